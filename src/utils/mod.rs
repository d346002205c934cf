pub mod logging;
pub mod paths;

pub use logging::init_logging;
pub use paths::{ensure_parent_dir, list_record_files};
