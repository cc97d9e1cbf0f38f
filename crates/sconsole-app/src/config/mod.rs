//! Configuration file parsing for Server Console
//!
//! Supports `.sconsole/config.toml` in a project directory.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, save_settings, try_load_settings};
pub use types::*;
