use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, PLACEHOLDER, ValidationRange};

/// Configuration of a single [`DateInput`](crate::DateInput).
///
/// Every field has a default, so a partial document deserializes cleanly:
///
/// ```
/// use dmy_date::DateInputOptions;
///
/// let options: DateInputOptions = serde_json::from_str(r#"{"max_year": 2099}"#).unwrap();
/// assert_eq!(options.min_year, 1900);
/// assert!(options.auto_format);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateInputOptions {
    /// Lowest accepted year (inclusive)
    pub min_year: u16,
    /// Highest accepted year (inclusive)
    pub max_year: u16,
    /// Reshape text into `DD/MM/YYYY` on every input event
    pub auto_format: bool,
    /// Publish success/error status to the observer
    pub show_validation_messages: bool,
    /// Validate the initial (empty) value when the widget is created
    pub validate_on_init: bool,
    /// Hint shown while the input is empty; `None` shows nothing
    pub placeholder: Option<String>,
}

impl Default for DateInputOptions {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            auto_format: true,
            show_validation_messages: true,
            validate_on_init: false,
            placeholder: Some(PLACEHOLDER.to_owned()),
        }
    }
}

impl DateInputOptions {
    /// Returns the configured year bounds
    pub const fn range(&self) -> ValidationRange {
        ValidationRange::new(self.min_year, self.max_year)
    }

    /// Replaces both year bounds
    #[must_use]
    pub fn with_range(mut self, range: ValidationRange) -> Self {
        self.min_year = range.min_year();
        self.max_year = range.max_year();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DateInputOptions::default();
        assert_eq!(options.range(), ValidationRange::INSTANCE);
        assert!(options.auto_format);
        assert!(options.show_validation_messages);
        assert!(!options.validate_on_init);
        assert_eq!(options.placeholder.as_deref(), Some("dd/mm/yyyy"));
    }

    #[test]
    fn test_with_range() {
        let options = DateInputOptions::default().with_range(ValidationRange::UTILITY);
        assert_eq!(options.min_year, 1900);
        assert_eq!(options.max_year, 2099);
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"min_year": 2000, "auto_format": false, "placeholder": null}"#;
        let options: DateInputOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.range(), ValidationRange::new(2000, 9999));
        assert!(!options.auto_format);
        assert!(options.show_validation_messages);
        assert_eq!(options.placeholder, None);
    }

    #[test]
    fn test_serde_round_trip() {
        let options = DateInputOptions {
            validate_on_init: true,
            ..DateInputOptions::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        let parsed: DateInputOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, parsed);
    }
}
