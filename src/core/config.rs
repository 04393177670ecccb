use serde::{Deserialize, Serialize};
use std::path::Path;

/// Date tool settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DateSettings {
    /// IANA timezone used when rendering dates
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Default options for the UUID generator.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct UuidSettings {
    pub version: String,
    pub quantity: usize,
    pub hyphens: bool,
    pub uppercase: bool,
    pub braces: bool,
    pub quotes: bool,
    pub commas: bool,
}

impl Default for UuidSettings {
    fn default() -> Self {
        Self {
            version: "v4".to_string(),
            quantity: 1,
            hyphens: true,
            uppercase: false,
            braces: false,
            quotes: false,
            commas: false,
        }
    }
}

/// Default hash algorithm and digest encoding.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HashSettings {
    pub algorithm: String,
    pub encoding: String,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            algorithm: "sha256".to_string(),
            encoding: "hex".to_string(),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum input size in bytes (0 = unlimited)
    pub max_input_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_input_size: 100 * 1024 * 1024,
        }
    }
}

/// Tool configuration loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ToolboxConfig {
    #[serde(default)]
    pub date: DateSettings,
    #[serde(default)]
    pub uuid: UuidSettings,
    #[serde(default)]
    pub hash: HashSettings,
    #[serde(default)]
    pub settings: Settings,
}

impl ToolboxConfig {
    /// Parses a configuration from TOML content. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::from_toml(DEFAULTS)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (embedded `defaults.toml`)
    /// 2. `~/.config/devtoolbox/config.toml` (user overrides)
    /// 3. `./devtoolbox.toml` (project-local overrides)
    /// 4. `explicit`, if given (must be readable)
    ///
    /// Later files override earlier ones key by key.
    pub fn load_with_overrides(explicit: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut table: toml::Table = toml::from_str(DEFAULTS)?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("devtoolbox").join("config.toml");
            merge_optional_file(&mut table, &user_config_path);
        }

        merge_optional_file(&mut table, Path::new("devtoolbox.toml"));

        if let Some(path) = explicit {
            let expanded = shellexpand::tilde(path);
            let content = std::fs::read_to_string(expanded.as_ref())
                .map_err(|e| format!("Cannot read config '{}': {}", path, e))?;
            let overrides: toml::Table = toml::from_str(&content)?;
            merge_tables(&mut table, overrides);
        }

        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Render as TOML, for `config show`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

const DEFAULTS: &str = include_str!("../../defaults.toml");

fn merge_optional_file(table: &mut toml::Table, path: &Path) {
    if !path.exists() {
        return;
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| toml::from_str::<toml::Table>(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(overrides) => {
            log::debug!("merging config overrides from {:?}", path);
            merge_tables(table, overrides);
        }
        Err(e) => {
            log::warn!("Failed to load config from {:?}: {}", path, e);
        }
    }
}

/// Merges `other` into `base`. Nested tables merge recursively, everything else replaces.
pub fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = ToolboxConfig::load_default().unwrap();
        assert_eq!(config, ToolboxConfig::default());
        assert_eq!(config.date.timezone, "UTC");
        assert_eq!(config.uuid.version, "v4");
        assert!(config.uuid.hyphens);
        assert_eq!(config.hash.algorithm, "sha256");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = ToolboxConfig::from_toml("[uuid]\nuppercase = true\n").unwrap();
        assert!(config.uuid.uppercase);
        assert!(config.uuid.hyphens);
        assert_eq!(config.uuid.quantity, 1);
        assert_eq!(config.date.timezone, "UTC");
    }

    #[test]
    fn test_merge_tables_is_key_by_key() {
        let mut base: toml::Table = toml::from_str(DEFAULTS).unwrap();
        let overrides: toml::Table =
            toml::from_str("[date]\ntimezone = \"Asia/Tokyo\"\n[hash]\nencoding = \"base64\"\n")
                .unwrap();
        merge_tables(&mut base, overrides);

        let config: ToolboxConfig = toml::Value::Table(base).try_into().unwrap();
        assert_eq!(config.date.timezone, "Asia/Tokyo");
        assert_eq!(config.hash.encoding, "base64");
        assert_eq!(config.hash.algorithm, "sha256");
    }

    #[test]
    fn test_round_trip_to_toml() {
        let config = ToolboxConfig::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(ToolboxConfig::from_toml(&rendered).unwrap(), config);
    }
}
