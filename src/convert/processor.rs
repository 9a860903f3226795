use crate::convert::detector::looks_like_measurement;
use crate::convert::converter::Converter;
use crate::convert::error::ConvertError;
use crate::convert::formatter::format_value;
use crate::convert::parser::parse_measurement;
use crate::convert::types::ConversionUnit;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    /// A pixel length inside a stylesheet, e.g. "16px" in "margin: 0 16px;"
    static ref PX_TOKEN: Regex = Regex::new(
        r"(?P<value>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)px\b"
    ).unwrap();
}

/// Output of [`UnitProcessor::process_text`]
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedText {
    pub text: String,
    pub replacements: usize,
}

/// Rewrites pixel lengths found in text or JSON into a target unit
pub struct UnitProcessor {
    converter: Converter,
    target: ConversionUnit,
    precision: u32,
}

impl UnitProcessor {
    pub fn new(converter: Converter, target: ConversionUnit, precision: u32) -> Self {
        Self {
            converter,
            target,
            precision,
        }
    }

    /// Replace every standalone `<number>px` token with its value in the target unit
    /// Tokens glued to an identifier (e.g. "icon-16px", "abc1px") are left alone,
    /// as are tokens whose value does not fit in an f64 once converted
    pub fn process_text(&self, input: &str) -> ProcessedText {
        if self.target == ConversionUnit::Px {
            return ProcessedText {
                text: input.to_string(),
                replacements: 0,
            };
        }

        let mut text = String::with_capacity(input.len());
        let mut last_end = 0;
        let mut replacements = 0;

        for captures in PX_TOKEN.captures_iter(input) {
            let whole = match captures.get(0) {
                Some(m) => m,
                None => continue,
            };
            if is_glued_to_identifier(input, whole.start()) {
                continue;
            }

            let converted = match self.convert_token(&captures["value"]) {
                Ok(converted) => converted,
                Err(e) => {
                    log::warn!("Keeping '{}' as-is: {}", whole.as_str(), e);
                    continue;
                }
            };

            text.push_str(&input[last_end..whole.start()]);
            text.push_str(&format_value(converted, self.target, self.precision));
            last_end = whole.end();
            replacements += 1;
        }
        text.push_str(&input[last_end..]);

        log::debug!("Rewrote {} px tokens to {}", replacements, self.target);

        ProcessedText { text, replacements }
    }

    fn convert_token(&self, number: &str) -> Result<f64, ConvertError> {
        let value = number.parse::<f64>().map_err(|e| {
            ConvertError::ParseError(format!("invalid number '{}': {}", number, e))
        })?;
        self.converter
            .convert_to(value, ConversionUnit::Px, self.target)
    }

    /// Process a JSON value, rewriting any measurement strings found
    /// Numbers, booleans and null are returned unchanged
    pub fn process_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => {
                if !looks_like_measurement(s) {
                    return value.clone();
                }
                let converted = parse_measurement(s)
                    .and_then(|measurement| self.converter.convert_measurement(&measurement));
                match converted {
                    Ok(results) => Value::String(format_value(
                        results.get(self.target),
                        self.target,
                        self.precision,
                    )),
                    Err(e) => {
                        // Other CSS units (em, %, ...) and overflowing values are kept as written
                        log::warn!("Keeping '{}' as-is: {}", s, e);
                        value.clone()
                    }
                }
            }
            Value::Array(arr) => {
                Value::Array(arr.iter().map(|v| self.process_value(v)).collect())
            }
            Value::Object(object) => {
                let mut processed = Map::new();
                for (key, val) in object {
                    processed.insert(key.clone(), self.process_value(val));
                }
                Value::Object(processed)
            }
            _ => value.clone(),
        }
    }
}

fn is_glued_to_identifier(input: &str, start: usize) -> bool {
    input[..start]
        .chars()
        .next_back()
        .map(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::viewport::Viewport;
    use serde_json::json;

    fn processor(target: ConversionUnit) -> UnitProcessor {
        UnitProcessor::new(Converter::new(Viewport::default()), target, 2)
    }

    #[test]
    fn test_rewrite_px_to_vw() {
        let result = processor(ConversionUnit::Vw)
            .process_text(".box { width: 192px; margin: 0 96px; }");
        assert_eq!(result.text, ".box { width: 10vw; margin: 0 5vw; }");
        assert_eq!(result.replacements, 2);
    }

    #[test]
    fn test_rewrite_px_to_vh() {
        let result = processor(ConversionUnit::Vh)
            .process_text("top:-108px;height:calc(100% - 54px)");
        assert_eq!(result.text, "top:-10vh;height:calc(100% - 5vh)");
        assert_eq!(result.replacements, 2);
    }

    #[test]
    fn test_leaves_other_text_alone() {
        let input = ".icon-16px { font-size: 1.5em; border: 1px solid #abc1px; }\n";
        let result = processor(ConversionUnit::Vw).process_text(input);
        assert_eq!(
            result.text,
            ".icon-16px { font-size: 1.5em; border: 0.05vw solid #abc1px; }\n"
        );
        assert_eq!(result.replacements, 1);
    }

    #[test]
    fn test_ignores_longer_units() {
        let result = processor(ConversionUnit::Vw)
            .process_text("width: 10pxx; height: 5pt");
        assert_eq!(result.text, "width: 10pxx; height: 5pt");
        assert_eq!(result.replacements, 0);
    }

    #[test]
    fn test_keeps_tokens_that_overflow() {
        let result = processor(ConversionUnit::Vw)
            .process_text("a{width:10px} b{width:1e400px}");
        assert_eq!(result.text, "a{width:0.52vw} b{width:1e400px}");
        assert_eq!(result.replacements, 1);
    }

    #[test]
    fn test_target_px_is_identity() {
        let input = "a { width: 12px; }";
        let result = processor(ConversionUnit::Px).process_text(input);
        assert_eq!(result.text, input);
        assert_eq!(result.replacements, 0);
    }

    #[test]
    fn test_process_json_value() {
        let value = json!({
            "width": "192px",
            "height": "100vh",
            "padding": ["96px", "2em", 4, "1e400px"],
            "label": "not a unit",
            "visible": true
        });

        let result = processor(ConversionUnit::Vw).process_value(&value);
        assert_eq!(
            result,
            json!({
                "width": "10vw",
                "height": "56.25vw",
                "padding": ["5vw", "2em", 4, "1e400px"],
                "label": "not a unit",
                "visible": true
            })
        );
    }
}
