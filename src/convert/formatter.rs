use crate::convert::types::{ConversionResults, ConversionUnit};
use serde::Serialize;

pub const DEFAULT_PRECISION: u32 = 2;

/// Decimals beyond this are noise for an f64
const MAX_PRECISION: u32 = 15;

/// Format `value` as a CSS length, e.g. `format_value(17.7777, Vh, 2) == "17.78vh"`
///
/// Rounds half away from zero, trims trailing zeros, and never prints "-0".
pub fn format_value(value: f64, unit: ConversionUnit, precision: u32) -> String {
    format!("{}{}", format_number(value, precision), unit)
}

fn format_number(value: f64, precision: u32) -> String {
    let precision = precision.min(MAX_PRECISION);
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    let rounded = if rounded.is_finite() { rounded } else { value };

    let mut text = format!("{:.*}", precision as usize, rounded);
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// All three units of a conversion, formatted as CSS lengths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResults {
    pub px: String,
    pub vw: String,
    pub vh: String,
}

#[derive(Debug, Clone, Copy)]
pub struct UnitFormatter {
    precision: u32,
}

impl UnitFormatter {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn format(&self, results: &ConversionResults) -> FormattedResults {
        FormattedResults {
            px: self.format_unit(results, ConversionUnit::Px),
            vw: self.format_unit(results, ConversionUnit::Vw),
            vh: self.format_unit(results, ConversionUnit::Vh),
        }
    }

    pub fn format_unit(&self, results: &ConversionResults, unit: ConversionUnit) -> String {
        format_value(results.get(unit), unit, self.precision)
    }
}

impl Default for UnitFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
