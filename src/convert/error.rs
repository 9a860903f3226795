use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    InvalidUnit(String),
    ParseError(String),
    InvalidViewport(String),
    NonFiniteValue(f64),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidUnit(unit) => {
                write!(f, "Invalid unit: '{}' (expected px, vw or vh)", unit)
            }
            ConvertError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConvertError::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            ConvertError::NonFiniteValue(value) => {
                write!(f, "Cannot convert non-finite value: {}", value)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
