use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimals, exponent), optional whitespace, then letters
    /// Examples: "12px", "-3.5 vw", ".5vh", "1e2px", "12em"
    static ref MEASUREMENT_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?\s*[a-zA-Z%]+$"
    ).unwrap();
}

/// Check if a string looks like a measurement, without validating the unit
pub fn looks_like_measurement(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    MEASUREMENT_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_detection() {
        assert!(looks_like_measurement("100px"));
        assert!(looks_like_measurement("10.5 vw"));
        assert!(looks_like_measurement("-20vh"));
        assert!(looks_like_measurement(".5vh"));
        assert!(looks_like_measurement("1e3px"));
        assert!(looks_like_measurement("12em"));
        assert!(looks_like_measurement("  50% "));

        assert!(!looks_like_measurement("100"));
        assert!(!looks_like_measurement("px"));
        assert!(!looks_like_measurement("hello world"));
        assert!(!looks_like_measurement("10px 20px"));
        assert!(!looks_like_measurement(""));
    }
}
