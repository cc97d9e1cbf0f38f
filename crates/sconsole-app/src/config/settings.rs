//! Settings parser for .sconsole/config.toml

use super::types::Settings;
use sconsole_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const SCONSOLE_DIR: &str = ".sconsole";

/// Path of the settings file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(SCONSOLE_DIR).join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .sconsole/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    match try_load_settings(project_path) {
        Ok(settings) => settings,
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}; using default settings", e);
            Settings::default()
        }
    }
}

/// Load settings, reporting a missing or invalid file as an error
pub fn try_load_settings(project_path: &Path) -> Result<Settings> {
    let path = config_path(project_path);

    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("Failed to parse {:?}: {}", path, e)))?;

    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Create the default config file in .sconsole/ if it is missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let sconsole_dir = project_path.join(SCONSOLE_DIR);

    if !sconsole_dir.exists() {
        std::fs::create_dir_all(&sconsole_dir)
            .map_err(|e| Error::config(format!("Failed to create .sconsole dir: {}", e)))?;
    }

    let path = sconsole_dir.join(CONFIG_FILENAME);
    if !path.exists() {
        let default_content = r#"# Server Console Configuration

[console]
# verbose | normal | sparse | concise | error | progress | silent
mode = "normal"
show_headers = true
show_types = false
# onChange | firstLog | logOnly | always | never
show_sections = "onChange"
use_indented_sections = true
"#;
        std::fs::write(&path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", path);
    }

    Ok(())
}

/// Save settings to .sconsole/config.toml
///
/// Uses atomic write (temp file + rename).
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let sconsole_dir = project_path.join(SCONSOLE_DIR);

    if !sconsole_dir.exists() {
        std::fs::create_dir_all(&sconsole_dir)
            .map_err(|e| Error::config(format!("Failed to create .sconsole dir: {}", e)))?;
    }

    let path = sconsole_dir.join(CONFIG_FILENAME);
    let temp_path = sconsole_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", path);
    Ok(())
}

fn generate_config_header() -> String {
    "# Server Console Configuration\n# Generated by sconsole\n\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sconsole_core::{Mode, ShowSections};
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_try_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let err = try_load_settings(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".sconsole");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());

        let err = try_load_settings(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_settings_partial() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".sconsole");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            "[console]\nmode = \"error\"\nshow_types = true\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.console.mode, Mode::Error);
        assert!(settings.console.show_types);
        assert_eq!(settings.console.show_sections, ShowSections::OnChange);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();
        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        std::fs::write(&path, "[console]\nmode = \"silent\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("silent"));
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.console.mode = Mode::Verbose;
        settings.console.use_indented_sections = false;

        save_settings(temp.path(), &settings).unwrap();

        assert!(!temp.path().join(".sconsole/.config.toml.tmp").exists());
        let content = std::fs::read_to_string(config_path(temp.path())).unwrap();
        assert!(content.starts_with("# Server Console Configuration"));
        assert_eq!(load_settings(temp.path()), settings);
    }
}
