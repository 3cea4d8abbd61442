mod call;
mod checkpoints;
mod log;
mod tools;

pub use call::run_call;
pub use checkpoints::run_checkpoints;
pub use log::run_log;
pub use tools::run_tools;
