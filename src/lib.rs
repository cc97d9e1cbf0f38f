//! Server Console Library
//!
//! Mode-filtered, section-aware console logging. The domain types live in
//! `sconsole-core`, the console state machine and settings in `sconsole-app`;
//! this crate re-exports both and hosts the `sconsole` binary.

pub mod cli;

pub use sconsole_app::{config, global, ConsoleLogger, ConsoleSettings, Settings};
pub use sconsole_core::{
    kinds, logging, should_show, Error, Fields, LogOptions, LogRecord, Mode, Result, ShowSections,
    Value, PRIORITY_LEVELS,
};

/// Prelude for common imports
pub mod prelude {
    pub use sconsole_app::global::*;
    pub use sconsole_core::prelude::*;
    pub use sconsole_core::{Fields, LogOptions, Mode, ShowSections, Value};
}
