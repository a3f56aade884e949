mod execution_context;
mod progress_monitor;

pub use self::execution_context::ExecutionContext;
pub use self::progress_monitor::{ProgressMonitor, SubTask};
