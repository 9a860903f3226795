use std::fmt;

/// Problems found while checking a config file
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub message: String,
    /// Dotted config key, e.g. "viewport.width"
    pub field: Option<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>, field: Option<&str>) {
        self.errors.push(ValidationIssue {
            message: message.into(),
            field: field.map(str::to_string),
        });
    }

    pub fn add_warning(&mut self, message: impl Into<String>, field: Option<&str>) {
        self.warnings.push(ValidationIssue {
            message: message.into(),
            field: field.map(str::to_string),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, issues) in [("Errors", &self.errors), ("Warnings", &self.warnings)] {
            if issues.is_empty() {
                continue;
            }
            writeln!(f, "{}:", title)?;
            for issue in issues {
                writeln!(f, "  {}", issue)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
        assert_eq!(result.to_string(), "");
    }

    #[test]
    fn test_display_groups_errors_and_warnings() {
        let mut result = ValidationResult::new();
        result.add_warning("precision is high", Some("precision"));
        result.add_error("width must be positive", Some("viewport.width"));
        result.add_error("something else", None);

        assert!(!result.is_valid());
        assert_eq!(
            result.to_string(),
            "Errors:\n  [viewport.width] width must be positive\n  something else\nWarnings:\n  [precision] precision is high\n"
        );
    }
}
