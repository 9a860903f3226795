use crate::convert::error::ConvertError;
use crate::convert::types::{ConversionUnit, Measurement};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MEASUREMENT: Regex = Regex::new(
        r"^(?P<value>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>[a-zA-Z%]*)$"
    ).unwrap();
}

/// Parse a measurement such as "12px", "-3.5 vw" or ".5vh"
pub fn parse_measurement(input: &str) -> Result<Measurement, ConvertError> {
    parse_inner(input, None)
}

/// Like [`parse_measurement`], but a bare number takes `default_unit`
pub fn parse_measurement_with_default(
    input: &str,
    default_unit: ConversionUnit,
) -> Result<Measurement, ConvertError> {
    parse_inner(input, Some(default_unit))
}

fn parse_inner(
    input: &str,
    default_unit: Option<ConversionUnit>,
) -> Result<Measurement, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::ParseError("empty measurement".to_string()));
    }

    let captures = MEASUREMENT.captures(trimmed).ok_or_else(|| {
        ConvertError::ParseError(format!("'{}' is not a measurement", trimmed))
    })?;

    let value = captures["value"].parse::<f64>().map_err(|e| {
        ConvertError::ParseError(format!("invalid number in '{}': {}", trimmed, e))
    })?;

    let unit = match (&captures["unit"], default_unit) {
        ("", Some(unit)) => unit,
        ("", None) => {
            return Err(ConvertError::ParseError(format!(
                "'{}' has no unit",
                trimmed
            )))
        }
        (tag, _) => tag.parse::<ConversionUnit>()?,
    };

    Ok(Measurement::new(value, unit))
}
