//! Optional TOML settings for the command-line front end.
//!
//! ```toml
//! profile = "unbounded"
//! separator = " "
//! ```

use cell_engine::engine::Profile;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 65_536; // 64 KiB

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    #[default]
    Bounded,
    Unbounded,
}

impl ProfileName {
    pub fn profile(self) -> Profile {
        match self {
            ProfileName::Bounded => Profile::BOUNDED,
            ProfileName::Unbounded => Profile::UNBOUNDED,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    profile: Option<ProfileName>,
    separator: Option<String>,
}

/// Effective settings after the config file has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub profile: ProfileName,
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            profile: ProfileName::Bounded,
            separator: ",".to_string(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("dev", "sashite", "cell")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load settings from `config_file`, or from the default location.
///
/// Problems never fail the load; they come back as warnings and the
/// defaults stay in place.
pub fn load_settings(config_file: Option<&PathBuf>) -> (Settings, Vec<String>) {
    let mut warnings = Vec::new();
    let mut settings = Settings::default();

    let Some(path) = config_file.cloned().or_else(default_config_path) else {
        return (settings, warnings);
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (settings, warnings);
    }

    match read_config(&path) {
        Ok(file) => {
            if let Some(profile) = file.profile {
                settings.profile = profile;
            }
            if let Some(separator) = file.separator {
                settings.separator = separator;
            }
        }
        Err(warning) => warnings.push(warning),
    }

    (settings, warnings)
}

fn read_config(path: &Path) -> Result<ConfigFile, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    parse_config(&content).map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn parse_config(content: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str(content)
}
