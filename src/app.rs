use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Demo-shell configuration: where the contact directory file lives and how
/// the simulated platform answers the permission prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// TOML directory file read by `FileStore`; the built-in sample rows
    /// are used when unset.
    pub contacts_path: Option<PathBuf>,
    /// Canned answer for the simulated permission dialog.
    #[serde(default = "default_permission")]
    pub permission_granted: bool,
}

fn default_permission() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contacts_path: None,
            permission_granted: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // TOML configuration is preferred; a legacy JSON file is converted and
    // re-saved as TOML when found.
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("contactos.toml"))
    }

    fn legacy_json_path() -> Option<PathBuf> {
        let proj = directories::ProjectDirs::from("com", "example", "Contactos")?;
        Some(proj.config_dir().join("state.json"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::toml_path() {
            if let Ok(text) = fs::read_to_string(&path) {
                match toml::from_str::<AppConfig>(&text) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("ignoring malformed config {}: {e}", path.display()),
                }
            }
        }

        if let Some(legacy) = Self::legacy_json_path() {
            if let Ok(bytes) = fs::read(&legacy) {
                if let Ok(config) = serde_json::from_slice::<AppConfig>(&bytes) {
                    let _ = config.save();
                    return config;
                }
            }
        }

        Self::new()
    }

    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::toml_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let toml = toml::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            fs::write(path, toml)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config dir",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.contacts_path, None);
        assert!(config.permission_granted);
    }

    #[test]
    fn test_config_parses_every_field() {
        let config: AppConfig = toml::from_str(
            r#"
contacts_path = "/tmp/agenda.toml"
permission_granted = false
"#,
        )
        .unwrap();
        assert_eq!(config.contacts_path, Some(PathBuf::from("/tmp/agenda.toml")));
        assert!(!config.permission_granted);
    }

    #[test]
    fn test_default_config_serializes() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("permission_granted = true"));
    }
}
