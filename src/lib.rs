// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::commands::dump::{dump_tree, DumpReport, SkippedFile};
pub use crate::config::{DumpConfig, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT};
pub use crate::errors::DumpError;
pub use crate::io::walker::FileWalker;
