//! Path canonicalization for outbound requests.
//!
//! The backend only ever sees absolute paths. Resolution is lexical: the
//! path is joined onto a base directory and `.`/`..` are collapsed. Nothing
//! touches the filesystem, so the target does not have to exist.

use std::path::{Component, Path, PathBuf};

use crate::error::AdapterError;

/// Resolves path arguments against a fixed base directory
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    base_dir: PathBuf,
}

impl Canonicalizer {
    /// `base_dir` is expected to be absolute (normally the process cwd).
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: normalize(&base_dir.into()),
        }
    }

    /// Resolve `raw` to an absolute path string.
    ///
    /// `param` names the argument in the error if resolution fails.
    pub fn absolute(&self, param: &'static str, raw: &str) -> Result<String, AdapterError> {
        if raw.contains('\0') {
            return Err(AdapterError::invalid_path(
                param,
                raw,
                "contains a NUL byte",
            ));
        }

        let candidate = Path::new(raw);
        let joined = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_dir.join(candidate)
        };

        normalize(&joined)
            .into_os_string()
            .into_string()
            .map_err(|_| AdapterError::invalid_path(param, raw, "resolved path is not valid UTF-8"))
    }
}

/// Collapse `.` and `..` without consulting the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            // `pop` on a bare root is a no-op, which is what we want
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon() -> Canonicalizer {
        Canonicalizer::new("/work/project")
    }

    #[test]
    fn test_relative_path_is_joined() {
        assert_eq!(
            canon().absolute("path", "notes.txt").unwrap(),
            "/work/project/notes.txt"
        );
        assert_eq!(
            canon().absolute("path", "src/lib.rs").unwrap(),
            "/work/project/src/lib.rs"
        );
    }

    #[test]
    fn test_dot_segments_are_collapsed() {
        assert_eq!(
            canon().absolute("path", "./a/../b/./c").unwrap(),
            "/work/project/b/c"
        );
        assert_eq!(canon().absolute("path", "../sibling").unwrap(), "/work/sibling");
        assert_eq!(canon().absolute("path", "dir/").unwrap(), "/work/project/dir");
    }

    #[test]
    fn test_parent_of_root_stays_at_root() {
        assert_eq!(canon().absolute("path", "/../../etc").unwrap(), "/etc");
        assert_eq!(canon().absolute("path", "../../../..").unwrap(), "/");
    }

    #[test]
    fn test_absolute_path_is_kept() {
        assert_eq!(
            canon().absolute("path", "/srv/repo//x").unwrap(),
            "/srv/repo/x"
        );
    }

    #[test]
    fn test_empty_path_is_working_dir() {
        assert_eq!(canon().absolute("path", "").unwrap(), "/work/project");
        assert_eq!(canon().absolute("path", ".").unwrap(), "/work/project");
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let err = canon().absolute("path", "a\0b").unwrap_err();
        match err {
            AdapterError::InvalidPath { param, reason, .. } => {
                assert_eq!(param, "path");
                assert_eq!(reason, "contains a NUL byte");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
