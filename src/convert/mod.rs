// px / vw / vh conversion against a fixed viewport

pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod processor;
pub mod types;
pub mod viewport;


pub use converter::Converter;
pub use detector::looks_like_measurement;
pub use error::ConvertError;
pub use formatter::{format_value, FormattedResults, UnitFormatter, DEFAULT_PRECISION};
pub use parser::{parse_measurement, parse_measurement_with_default};
pub use processor::{ProcessedText, UnitProcessor};
pub use types::{ConversionResults, ConversionUnit, Measurement};
pub use viewport::Viewport;
