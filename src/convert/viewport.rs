use crate::convert::error::ConvertError;
use crate::convert::types::ConversionUnit;
use serde::Deserialize;

pub const DEFAULT_WIDTH: f64 = 1920.0;
pub const DEFAULT_HEIGHT: f64 = 1080.0;

/// Viewport that vw and vh are measured against, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    width: f64,
    height: f64,
}

// Deserialized shape, checked through `Viewport::new`
#[derive(Deserialize)]
struct RawViewport {
    width: f64,
    height: f64,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = ConvertError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Viewport::new(raw.width, raw.height)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, ConvertError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixels per one `unit`
    pub fn dimension(&self, unit: ConversionUnit) -> f64 {
        match unit {
            ConversionUnit::Px => 1.0,
            ConversionUnit::Vw => self.width / 100.0,
            ConversionUnit::Vh => self.height / 100.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

fn check_dimension(name: &str, value: f64) -> Result<(), ConvertError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConvertError::InvalidViewport(format!(
            "{} must be a positive number of pixels, got {}",
            name, value
        )));
    }
    Ok(())
}
