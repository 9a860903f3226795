use crate::convert::formatter::DEFAULT_PRECISION;
use crate::convert::viewport::{Viewport, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::convert::ConvertError;
use crate::settings::validation::ValidationResult;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// File picked up from the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "vpunits.toml";

/// Precision above this still works but prints float noise
const PRECISION_WARNING_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    // Decimal places kept when printing converted values
    #[serde(default = "default_precision")]
    pub precision: u32,

    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(ValidationResult),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Toml(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(result) => write!(f, "Invalid config:\n{}", result),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::read_file(path)?.checked()
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.checked()
    }

    fn read_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(toml::from_str(&content)?)
    }

    /// Read `path` if given, else `vpunits.toml` from `dir` if present, else defaults
    ///
    /// The result is not validated yet: apply overrides, then call [`Config::checked`].
    pub fn discover<P: AsRef<Path>>(path: Option<P>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::read_file(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::read_file(candidate)
        } else {
            Ok(Self::empty())
        }
    }

    /// Replace any values given on the command line
    pub fn with_overrides(
        mut self,
        width: Option<f64>,
        height: Option<f64>,
        precision: Option<u32>,
    ) -> Self {
        if let Some(width) = width {
            self.viewport.width = width;
        }
        if let Some(height) = height {
            self.viewport.height = height;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        self
    }

    /// Fail on validation errors, log warnings
    pub fn checked(self) -> Result<Self, ConfigError> {
        let validation = self.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation));
        }
        for warning in &validation.warnings {
            log::warn!("{}", warning);
        }
        Ok(self)
    }

    pub fn empty() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            viewport: ViewportConfig::default(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (field, value) in [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                result.add_error(
                    format!("must be a positive number of pixels, got {}", value),
                    Some(field),
                );
            }
        }

        if self.precision > PRECISION_WARNING_THRESHOLD {
            result.add_warning(
                format!(
                    "precision {} is above {}; extra digits are float noise",
                    self.precision, PRECISION_WARNING_THRESHOLD
                ),
                Some("precision"),
            );
        }

        result
    }

    pub fn viewport(&self) -> Result<Viewport, ConvertError> {
        Viewport::new(self.viewport.width, self.viewport.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
