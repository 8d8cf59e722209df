//! Unroll Configuration
//!
//! Handles loading the generator settings from ~/.config/unroll/config.toml.
//! Every field has a default, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use unroll_core::{DEFAULT_RESOLUTION, DEFAULT_WEIGHTS, Mode, Resolution};

/// Default configuration directory name (under ~/.config)
const CONFIG_DIR_NAME: &str = "unroll";
/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Offset mode as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModeSetting {
    #[default]
    #[serde(alias = "baked_offset")]
    Baked,
    #[serde(alias = "calculated_offset")]
    Calculated,
}

impl From<ModeSetting> for Mode {
    fn from(setting: ModeSetting) -> Self {
        match setting {
            ModeSetting::Baked => Mode::Baked,
            ModeSetting::Calculated => Mode::Calculated,
        }
    }
}

/// `resolution = 1024` or `resolution = [1920, 1080]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolutionSetting {
    Uniform(i64),
    PerAxis([i64; 2]),
}

impl From<ResolutionSetting> for Resolution {
    fn from(setting: ResolutionSetting) -> Self {
        match setting {
            ResolutionSetting::Uniform(r) => Resolution::Uniform(r),
            ResolutionSetting::PerAxis([x, y]) => Resolution::PerAxis { x, y },
        }
    }
}

/// Generator section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Mode used when no subcommand is given
    pub mode: ModeSetting,
    /// 1-D kernel weights (five taps)
    pub weights: Vec<f64>,
    /// Texel grid size; omitted means the mode's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionSetting>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::default(),
            weights: DEFAULT_WEIGHTS.to_vec(),
            resolution: None,
        }
    }
}

impl GeneratorConfig {
    /// Check every weight lies in (0, 1]; NaN and infinities fail too
    ///
    /// The number of weights is left to the generator, which reports it as
    /// a kernel size error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, &value) in self.weights.iter().enumerate() {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidWeight { index, value });
            }
        }
        Ok(())
    }

    /// Configured resolution, falling back to what each mode was tuned for:
    /// a per-axis pair when baking, a single scalar when calculating
    pub fn resolution_for(&self, mode: Mode) -> Resolution {
        match (self.resolution, mode) {
            (Some(setting), _) => setting.into(),
            (None, Mode::Baked) => Resolution::PerAxis {
                x: DEFAULT_RESOLUTION,
                y: DEFAULT_RESOLUTION,
            },
            (None, Mode::Calculated) => Resolution::Uniform(DEFAULT_RESOLUTION),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
}

impl Config {
    /// Get the config directory path (~/.config/unroll)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(".config").join(CONFIG_DIR_NAME))
    }

    /// Get the config file path (~/.config/unroll/config.toml)
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = match Self::config_file_path() {
            Ok(path) => path,
            Err(e) => {
                log::info!("{}, using defaults", e);
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Render the default configuration with a header comment
    pub fn default_toml() -> Result<String, ConfigError> {
        let toml_content =
            toml::to_string_pretty(&Config::default()).map_err(ConfigError::SerializeError)?;

        Ok(format!(
            "# Unroll Configuration\n\
             #\n\
             # mode: \"baked\" bakes texel offsets into literals,\n\
             #       \"calculated\" emits <n>/resolution expressions\n\
             # resolution: 1024 or [1920, 1080]; omitted uses 1024 on both axes\n\
             \n\
             {toml_content}"
        ))
    }

    /// Write the default configuration file, creating parent directories
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDirError(dir.to_path_buf(), e))?;
        }

        let content = Self::default_toml()?;
        fs::write(path, content).map_err(|e| ConfigError::WriteError(path.to_path_buf(), e))?;

        log::info!("Created default configuration at {:?}", path);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Home directory not found
    NoHomeDirectory,
    /// Failed to read config file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config file
    ParseError(PathBuf, toml::de::Error),
    /// Failed to serialize config
    SerializeError(toml::ser::Error),
    /// Failed to write config file
    WriteError(PathBuf, std::io::Error),
    /// Failed to create directory
    CreateDirError(PathBuf, std::io::Error),
    /// Kernel weight outside (0, 1]
    InvalidWeight { index: usize, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::WriteError(path, e) => write!(f, "Failed to write {:?}: {}", path, e),
            ConfigError::CreateDirError(path, e) => write!(f, "Failed to create {:?}: {}", path, e),
            ConfigError::InvalidWeight { index, value } => {
                write!(f, "Invalid weight {} at index {}: must be in (0, 1]", value, index)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoHomeDirectory | ConfigError::InvalidWeight { .. } => None,
            ConfigError::ReadError(_, e)
            | ConfigError::WriteError(_, e)
            | ConfigError::CreateDirError(_, e) => Some(e),
            ConfigError::ParseError(_, e) => Some(e),
            ConfigError::SerializeError(e) => Some(e),
        }
    }
}
