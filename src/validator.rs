use chrono::{Local, NaiveDate};

use crate::{DISPLAY_FORMAT, DisplayDate, FormatError, NormalizedDate, ParseError, ValidationRange};

/// Validates and converts display-format text against a fixed year range.
///
/// Every method re-validates the text it is given; nothing is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTextValidator {
    range: ValidationRange,
}

impl DateTextValidator {
    /// Creates a validator accepting years inside `range`
    pub const fn new(range: ValidationRange) -> Self {
        Self { range }
    }

    /// Returns the accepted year range
    pub const fn range(&self) -> ValidationRange {
        self.range
    }

    /// Returns true if `value` is a complete, calendar-valid `DD/MM/YYYY`
    /// date with its year inside the range.
    ///
    /// Never fails: anything unusable is simply `false`.
    pub fn validate(&self, value: &str) -> bool {
        self.parse(value).is_ok()
    }

    /// Parses `value`, reporting why it was refused.
    ///
    /// # Errors
    /// Returns the first `ParseError` encountered.
    pub fn parse(&self, value: &str) -> Result<DisplayDate, ParseError> {
        DisplayDate::parse_in(value, self.range)
    }

    /// Converts `DD/MM/YYYY` text into `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `FormatError` if the text does not validate.
    pub fn to_normalized(&self, value: &str) -> Result<NormalizedDate, FormatError> {
        let date = self.parse(value).inspect_err(|err| {
            tracing::debug!(value, reason = %err, "refused normalization");
        })?;
        Ok(date.to_normalized())
    }

    /// Converts `DD/MM/YYYY` text into a calendar date.
    ///
    /// # Errors
    /// Returns `FormatError` if the text does not validate.
    pub fn to_naive_date(&self, value: &str) -> Result<NaiveDate, FormatError> {
        let date = self.parse(value).inspect_err(|err| {
            tracing::debug!(value, reason = %err, "refused date conversion");
        })?;
        Ok(date.to_naive_date()?)
    }
}

/// Checks `value` against [`ValidationRange::UTILITY`] (1900 through 2099).
pub fn is_valid(value: &str) -> bool {
    is_valid_in(value, ValidationRange::UTILITY)
}

/// Checks `value` against an explicit year range.
pub fn is_valid_in(value: &str, range: ValidationRange) -> bool {
    DateTextValidator::new(range).validate(value)
}

/// Converts `DD/MM/YYYY` text into `YYYY-MM-DD`, validating against
/// [`ValidationRange::UTILITY`].
///
/// # Errors
/// Returns `FormatError` if the text does not validate.
pub fn to_normalized_date(value: &str) -> Result<NormalizedDate, FormatError> {
    DateTextValidator::new(ValidationRange::UTILITY).to_normalized(value)
}

/// Returns the local calendar date rendered as `DD/MM/YYYY`.
pub fn today() -> String {
    format_display(Local::now().date_naive())
}

pub(crate) fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days_in_month;
    use proptest::prelude::*;

    #[test]
    fn test_leap_day() {
        let validator = DateTextValidator::default();
        assert!(validator.validate("29/02/2024"));
        assert!(!validator.validate("29/02/2023"));
    }

    #[test]
    fn test_utility_range_boundaries() {
        let validator = DateTextValidator::new(ValidationRange::UTILITY);
        assert!(validator.validate("01/01/1900"));
        assert!(!validator.validate("01/01/1899"));
        assert!(validator.validate("31/12/2099"));
        assert!(!validator.validate("01/01/2100"));
    }

    #[test]
    fn test_instance_range_reaches_9999() {
        let validator = DateTextValidator::default();
        assert!(validator.validate("31/12/9999"));
        assert!(validator.validate("01/01/2100"));
        assert!(!validator.validate("31/12/1899"));
    }

    #[test]
    fn test_inverted_range_rejects_everything() {
        let validator = DateTextValidator::new(ValidationRange::new(2025, 2024));
        assert!(!validator.validate("01/01/2024"));
        assert!(!validator.validate("01/01/2025"));
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let validator = DateTextValidator::default();
        for input in ["", "hello", "12/03", "12/03/202", "2024-03-12", "12/3/2024"] {
            assert!(!validator.validate(input), "{input:?} should be invalid");
        }
    }

    #[test]
    fn test_to_normalized() {
        let validator = DateTextValidator::default();
        let normalized = validator.to_normalized("05/11/2024").unwrap();
        assert_eq!(normalized.to_string(), "2024-11-05");
    }

    #[test]
    fn test_to_normalized_refuses_impossible_day() {
        let validator = DateTextValidator::default();
        let err = validator.to_normalized("31/02/2024").unwrap_err();
        assert_eq!(err.to_string(), "invalid date format");
        assert_eq!(
            err.reason(),
            &ParseError::InvalidDay {
                day: 31,
                month: 2,
                year: 2024
            }
        );
    }

    #[test]
    fn test_to_naive_date() {
        let validator = DateTextValidator::default();
        assert_eq!(
            validator.to_naive_date("01/03/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(validator.to_naive_date("32/01/2024").is_err());
    }

    #[test]
    fn test_utility_functions() {
        assert!(is_valid("31/12/2099"));
        assert!(!is_valid("01/01/2100"));
        assert!(is_valid_in("01/01/2100", ValidationRange::INSTANCE));

        assert_eq!(to_normalized_date("29/02/2024").unwrap().to_string(), "2024-02-29");
        assert!(to_normalized_date("31/02/2024").is_err());
        assert!(to_normalized_date("01/01/2100").is_err());
    }

    #[test]
    fn test_format_display_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(format_display(date), "07/01/2024");
    }

    #[test]
    fn test_today_is_valid_display_date() {
        let today = today();
        assert_eq!(today.len(), crate::DISPLAY_LEN);
        assert!(is_valid_in(&today, ValidationRange::INSTANCE));
        assert_eq!(
            today,
            DisplayDate::try_from(Local::now().date_naive())
                .unwrap()
                .to_string()
        );
    }

    proptest! {
        #[test]
        fn non_matching_shapes_are_invalid(value in "\\PC{0,12}") {
            prop_assume!(!crate::DISPLAY_DATE_PATTERN.is_match(&value));
            prop_assert!(!DateTextValidator::default().validate(&value));
        }

        #[test]
        fn every_day_of_month_is_valid_and_next_is_not(
            year in 1900u16..=2099,
            month in 1u8..=12,
        ) {
            let validator = DateTextValidator::new(ValidationRange::UTILITY);
            let last = days_in_month(year, month);
            for day in 1..=last {
                let text = format!("{day:02}/{month:02}/{year:04}");
                prop_assert!(validator.validate(&text), "{} should be valid", text);
            }
            let past_end = format!("{:02}/{month:02}/{year:04}", last + 1);
            prop_assert!(!validator.validate(&past_end), "{} should be invalid", past_end);
        }

        #[test]
        fn normalization_round_trips(
            year in 1900u16..=9999,
            month in 1u8..=12,
            day in 1u8..=31,
        ) {
            prop_assume!(day <= days_in_month(year, month));
            let text = format!("{day:02}/{month:02}/{year:04}");
            let normalized = DateTextValidator::default().to_normalized(&text).unwrap().to_string();

            let mut parts = normalized.split('-');
            let (y, m, d) = (parts.next().unwrap(), parts.next().unwrap(), parts.next().unwrap());
            prop_assert_eq!(format!("{d:0>2}/{m:0>2}/{y}"), text);
        }
    }
}
