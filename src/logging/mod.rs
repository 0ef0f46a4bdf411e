//! Logging for the command-line tool
//!
//! - Bracketed log lines with local timestamps
//! - Dual output: stderr plus a timestamped file when one can be created
//! - `RUST_LOG` overrides the configured filter

mod formatter;
mod setup;

pub use formatter::BracketedFormatter;
pub use setup::{log_dir, setup_logging};
