use crate::convert::error::ConvertError;
use crate::convert::formatter::{format_value, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// One of the three supported CSS length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionUnit {
    /// Absolute pixels
    Px,
    /// Percent of the viewport width
    Vw,
    /// Percent of the viewport height
    Vh,
}

impl ConversionUnit {
    pub const ALL: [ConversionUnit; 3] =
        [ConversionUnit::Px, ConversionUnit::Vw, ConversionUnit::Vh];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionUnit::Px => "px",
            ConversionUnit::Vw => "vw",
            ConversionUnit::Vh => "vh",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConversionUnit::Px => "pixels",
            ConversionUnit::Vw => "1% of the viewport width",
            ConversionUnit::Vh => "1% of the viewport height",
        }
    }
}

impl fmt::Display for ConversionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("px") {
            Ok(ConversionUnit::Px)
        } else if tag.eq_ignore_ascii_case("vw") {
            Ok(ConversionUnit::Vw)
        } else if tag.eq_ignore_ascii_case("vh") {
            Ok(ConversionUnit::Vh)
        } else {
            Err(ConvertError::InvalidUnit(s.to_string()))
        }
    }
}

/// A length expressed in all three units at once
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ConversionResults {
    pub px: f64,
    pub vw: f64,
    pub vh: f64,
}

impl ConversionResults {
    pub fn new(px: f64, vw: f64, vh: f64) -> Self {
        Self { px, vw, vh }
    }

    /// Pick the field named by `unit`
    pub fn get(&self, unit: ConversionUnit) -> f64 {
        match unit {
            ConversionUnit::Px => self.px,
            ConversionUnit::Vw => self.vw,
            ConversionUnit::Vh => self.vh,
        }
    }

    /// Fields in `px, vw, vh` order, paired with their unit
    pub fn iter(&self) -> impl Iterator<Item = (ConversionUnit, f64)> + '_ {
        ConversionUnit::ALL
            .iter()
            .map(move |unit| (*unit, self.get(*unit)))
    }
}

impl Index<ConversionUnit> for ConversionResults {
    type Output = f64;

    fn index(&self, unit: ConversionUnit) -> &f64 {
        match unit {
            ConversionUnit::Px => &self.px,
            ConversionUnit::Vw => &self.vw,
            ConversionUnit::Vh => &self.vh,
        }
    }
}

/// A number paired with the unit it was written in (e.g. "12.5vw")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: ConversionUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: ConversionUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self.value, self.unit, DEFAULT_PRECISION))
    }
}
