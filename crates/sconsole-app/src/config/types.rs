//! Configuration types for Server Console
//!
//! Defines:
//! - `Settings` - Root of `.sconsole/config.toml`
//! - `ConsoleSettings` - Display configuration of a console

use sconsole_core::{Mode, ShowSections};
use serde::{Deserialize, Serialize};

/// Application settings (.sconsole/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub console: ConsoleSettings,
}

/// Console display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsoleSettings {
    /// Which records are printed
    #[serde(default)]
    pub mode: Mode,

    /// Prefix records with their header label
    #[serde(default = "default_true")]
    pub show_headers: bool,

    /// Prefix records with their type
    #[serde(default)]
    pub show_types: bool,

    /// When the active section name is shown
    #[serde(default)]
    pub show_sections: ShowSections,

    /// Indent lines by section depth
    #[serde(default = "default_true")]
    pub use_indented_sections: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            show_headers: true,
            show_types: false,
            show_sections: ShowSections::default(),
            use_indented_sections: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_settings_default() {
        let settings = ConsoleSettings::default();
        assert_eq!(settings.mode, Mode::Normal);
        assert!(settings.show_headers);
        assert!(!settings.show_types);
        assert_eq!(settings.show_sections, ShowSections::OnChange);
        assert!(settings.use_indented_sections);
    }

    #[test]
    fn test_deserialize_empty() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let toml = r#"
[console]
mode = "sparse"
show_sections = "firstLog"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.console.mode, Mode::Sparse);
        assert_eq!(settings.console.show_sections, ShowSections::FirstLog);
        assert!(settings.console.show_headers);
        assert!(settings.console.use_indented_sections);
    }

    #[test]
    fn test_deserialize_unknown_mode_fails() {
        let toml = r#"
[console]
mode = "loud"
"#;
        assert!(toml::from_str::<Settings>(toml).is_err());
    }

    #[test]
    fn test_serialize_uses_config_names() {
        let settings = Settings {
            console: ConsoleSettings {
                mode: Mode::Progress,
                show_sections: ShowSections::LogOnly,
                ..Default::default()
            },
        };
        let content = toml::to_string_pretty(&settings).unwrap();
        assert!(content.contains("mode = \"progress\""));
        assert!(content.contains("show_sections = \"logOnly\""));

        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
    }
}
