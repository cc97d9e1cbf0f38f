//! # sconsole-core - Core Domain Types
//!
//! Foundation crate for Server Console. Provides the log record model, the
//! mode-based visibility policy, error handling, and diagnostics setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Payloads (`value`)
//! - [`Value`] - Scalar or structured message payload
//! - [`Fields`] - Ordered keyed structure
//!
//! ### Records (`record`)
//! - [`LogRecord`] - One message with priority, type, header, and args
//! - [`LogOptions`] - Optional per-call record configuration
//!
//! ### Visibility (`mode`)
//! - [`Mode`] - Console display mode (verbose, normal, sparse, ...)
//! - [`should_show()`] - Whether a record is printed under a mode
//! - [`ShowSections`] - When section names are shown
//! - [`PRIORITY_LEVELS`] - Named priority thresholds
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sconsole_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod mode;
pub mod prelude;
pub mod record;
pub mod value;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use mode::{should_show, Mode, PriorityLevels, ShowSections, PRIORITY_LEVELS};
pub use record::{kinds, LogOptions, LogRecord};
pub use value::{Fields, Value};
