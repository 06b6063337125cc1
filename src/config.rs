use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub display: DisplayConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Display behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DisplayConfig {
    /// Draw scanline/noise CRT decoration
    pub crt_effects: bool,
    /// Show controller hints in the footer
    pub show_hints: bool,
    /// Interface font scale multiplier
    pub font_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig { mode: "dark".to_string() },
            display: DisplayConfig {
                crt_effects: true,
                show_hints: true,
                font_scale: 1.0,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "retrofolio") {
            return Some(proj_dirs.config_dir().join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("failed to parse config file: {}", e);
                        }
                    },
                    Err(e) => {
                        log::warn!("failed to read config file: {}", e);
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let contents = toml::to_string_pretty(self)?;
            fs::write(path, contents)?;
            return Ok(());
        }
        Err("Could not determine config directory".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert!(config.display.crt_effects);
        assert!(config.display.show_hints);
        assert_eq!(config.display.font_scale, 1.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.display.crt_effects, deserialized.display.crt_effects);
    }
}
