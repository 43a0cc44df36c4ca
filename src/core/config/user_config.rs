//! User configuration file handling
//!
//! Manages settings from ~/.config/fontcostumes/settings.json

use crate::charset::FilenamePolicy;
use crate::export::AdvanceTerm;
use crate::font_source::kerning::KerningScript;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "fontcostumes";
const SETTINGS_FILE: &str = "settings.json";

/// User configuration from ~/.config/fontcostumes/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory that receives `<font>-Font-Data/` (defaults to the working directory)
    pub output_dir: Option<PathBuf>,
    /// Naming of costumes for characters that are not filename-safe
    pub filename_policy: Option<FilenamePolicy>,
    /// Which character of a kerning pair contributes the advance width
    pub advance_from: Option<AdvanceTerm>,
    /// GPOS script preferred for kerning when a font has both `DFLT` and `latn`
    pub kerning_script: Option<KerningScript>,
}

impl ConfigFile {
    /// Get the path to the fontcostumes config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_DIR)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE)
    }

    /// Get the path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; missing or malformed files yield `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", SETTINGS_FILE, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", SETTINGS_FILE, e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/fontcostumes directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for `--log-file` output
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = Self::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            let example = ConfigFile {
                output_dir: None,
                filename_policy: Some(FilenamePolicy::default()),
                advance_from: Some(AdvanceTerm::default()),
                kerning_script: Some(KerningScript::default()),
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View logs in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("/tmp/out")),
            filename_policy: Some(FilenamePolicy::Raw),
            advance_from: Some(AdvanceTerm::Previous),
            kerning_script: Some(KerningScript::Latn),
        };

        config.save_to(&path).expect("save");
        assert_eq!(ConfigFile::load_from(&path), Some(config));
    }

    #[test]
    fn fields_are_optional() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "filename_policy": "index" }"#).expect("write");

        let config = ConfigFile::load_from(&path).expect("partial settings load");
        assert_eq!(config.filename_policy, Some(FilenamePolicy::Index));
        assert_eq!(config.output_dir, None);
        assert_eq!(config.advance_from, None);
        assert_eq!(config.kerning_script, None);
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").expect("write");
        assert_eq!(ConfigFile::load_from(&path), None);
        assert_eq!(ConfigFile::load_from(&dir.path().join("missing.json")), None);
    }
}
