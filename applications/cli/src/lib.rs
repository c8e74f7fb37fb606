//! Roster command-line client
//!
//! Terminal adapter over `roster-core`: configuration, rendering, and the
//! interactive browser. The binary in `main.rs` only parses arguments and
//! installs logging.

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod render;

/// `RUST_LOG` fallback for the binary
pub const DEFAULT_LOG_FILTER: &str = "warn,roster=info,roster_cli=info,roster_core=info";
