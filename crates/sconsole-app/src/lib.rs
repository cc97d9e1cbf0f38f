//! sconsole-app - Console state and configuration for Server Console
//!
//! This crate implements the [`ConsoleLogger`] (emission API, filtering
//! pipeline, section stack), settings loading, and the process-wide console
//! exposed through the [`global`] functions.

pub mod config;
pub mod console;
pub mod global;

// Re-export primary types
pub use config::{ConsoleSettings, Settings};
pub use console::{ConsoleLogger, INDENT_UNIT};
