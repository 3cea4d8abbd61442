//! File and search tools.

use crate::api::types::{PathRequest, PatternRequest, ReplaceRequest, WriteRequest};
use crate::canonicalize::Canonicalizer;
use crate::error::AdapterError;
use crate::mcp::types::*;
use crate::registry::ToolId;

use super::ToolArgs;

impl ToolArgs for CleanBackupsArgs {
    const TOOL: ToolId = ToolId::CleanBackups;
    type Body = PathRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<PathRequest, AdapterError> {
        Ok(PathRequest {
            path: canon.absolute("path", &self.path)?,
        })
    }
}

impl ToolArgs for SearchTextArgs {
    const TOOL: ToolId = ToolId::SearchText;
    type Body = PatternRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<PatternRequest, AdapterError> {
        Ok(PatternRequest {
            path: canon.absolute("path", &self.path)?,
            pattern: self.pattern,
        })
    }
}

impl ToolArgs for FindFilesArgs {
    const TOOL: ToolId = ToolId::FindFiles;
    type Body = PatternRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<PatternRequest, AdapterError> {
        Ok(PatternRequest {
            path: canon.absolute("path", &self.path)?,
            pattern: self.pattern,
        })
    }
}

impl ToolArgs for ReadDirectoryArgs {
    const TOOL: ToolId = ToolId::ReadDirectory;
    type Body = PathRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<PathRequest, AdapterError> {
        Ok(PathRequest {
            path: canon.absolute("path", &self.path)?,
        })
    }
}

impl ToolArgs for ReadFileArgs {
    const TOOL: ToolId = ToolId::ReadFile;
    type Body = PathRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<PathRequest, AdapterError> {
        Ok(PathRequest {
            path: canon.absolute("path", &self.path)?,
        })
    }
}

impl ToolArgs for WriteFileArgs {
    const TOOL: ToolId = ToolId::WriteFile;
    type Body = WriteRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<WriteRequest, AdapterError> {
        Ok(WriteRequest {
            path: canon.absolute("path", &self.path)?,
            content: self.content,
        })
    }
}

impl ToolArgs for ReplaceWholeWordArgs {
    const TOOL: ToolId = ToolId::ReplaceWholeWord;
    type Body = ReplaceRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<ReplaceRequest, AdapterError> {
        Ok(ReplaceRequest {
            path: canon.absolute("path", &self.path)?,
            old: self.old_word,
            new: self.new_word,
        })
    }
}

impl ToolArgs for ReplaceTextArgs {
    const TOOL: ToolId = ToolId::ReplaceText;
    type Body = ReplaceRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<ReplaceRequest, AdapterError> {
        Ok(ReplaceRequest {
            path: canon.absolute("path", &self.path)?,
            old: self.old_text,
            new: self.new_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon() -> Canonicalizer {
        Canonicalizer::new("/work")
    }

    #[test]
    fn test_replace_tools_use_short_wire_names() {
        let body = ReplaceWholeWordArgs {
            path: "a.rs".to_string(),
            old_word: "foo".to_string(),
            new_word: "bar".to_string(),
        }
        .into_body(&canon())
        .unwrap();
        assert_eq!(
            body,
            ReplaceRequest {
                path: "/work/a.rs".to_string(),
                old: "foo".to_string(),
                new: "bar".to_string(),
            }
        );

        let body = ReplaceTextArgs {
            path: "/abs/b.rs".to_string(),
            old_text: "x = 1".to_string(),
            new_text: "x = 2".to_string(),
        }
        .into_body(&canon())
        .unwrap();
        assert_eq!(body.path, "/abs/b.rs");
        assert_eq!(body.old, "x = 1");
        assert_eq!(body.new, "x = 2");
    }

    #[test]
    fn test_pattern_is_not_touched() {
        let body = SearchTextArgs {
            path: ".".to_string(),
            pattern: "../not-a-path".to_string(),
        }
        .into_body(&canon())
        .unwrap();
        assert_eq!(body.path, "/work");
        assert_eq!(body.pattern, "../not-a-path");
    }

    #[test]
    fn test_content_is_not_touched() {
        let body = WriteFileArgs {
            path: "notes.txt".to_string(),
            content: "  hello\n".to_string(),
        }
        .into_body(&canon())
        .unwrap();
        assert_eq!(body.content, "  hello\n");
    }
}
