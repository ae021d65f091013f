use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, UTILITY_MAX_YEAR, prelude::*};

/// Inclusive bounds on the year of an accepted date.
///
/// `min_year <= max_year` is assumed but not enforced by [`ValidationRange::new`];
/// an inverted range accepts no year at all. Use [`ValidationRange::try_new`]
/// to reject it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{min_year}..={max_year}")]
#[serde(default)]
pub struct ValidationRange {
    min_year: u16,
    max_year: u16,
}

/// Error type for validation range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum year is after maximum year.
    #[error("Invalid year range: minimum ({min_year}) is after maximum ({max_year})")]
    Inverted { min_year: u16, max_year: u16 },
}

impl ValidationRange {
    /// Range used by the stateless helpers such as [`crate::is_valid`]:
    /// 1900 through 2099.
    pub const UTILITY: Self = Self::new(DEFAULT_MIN_YEAR, UTILITY_MAX_YEAR);

    /// Range used by widgets unless configured otherwise: 1900 through 9999.
    pub const INSTANCE: Self = Self::new(DEFAULT_MIN_YEAR, DEFAULT_MAX_YEAR);

    /// Creates a range without checking that the bounds are ordered.
    pub const fn new(min_year: u16, max_year: u16) -> Self {
        Self { min_year, max_year }
    }

    /// Creates a range, rejecting a minimum that is after the maximum.
    ///
    /// # Errors
    /// Returns `RangeError::Inverted` if `min_year > max_year`.
    pub const fn try_new(min_year: u16, max_year: u16) -> Result<Self, RangeError> {
        if min_year > max_year {
            return Err(RangeError::Inverted { min_year, max_year });
        }
        Ok(Self::new(min_year, max_year))
    }

    /// Returns the lowest accepted year
    pub const fn min_year(&self) -> u16 {
        self.min_year
    }

    /// Returns the highest accepted year
    pub const fn max_year(&self) -> u16 {
        self.max_year
    }

    /// Checks if `year` falls within the bounds (inclusive on both ends)
    pub const fn contains(&self, year: u16) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    /// Returns true if no year can satisfy this range
    pub const fn is_empty(&self) -> bool {
        self.min_year > self.max_year
    }
}

impl Default for ValidationRange {
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl From<RangeInclusive<u16>> for ValidationRange {
    fn from(range: RangeInclusive<u16>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<ValidationRange> for RangeInclusive<u16> {
    fn from(range: ValidationRange) -> Self {
        range.min_year..=range.max_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let range = ValidationRange::default();
        assert_eq!(range.min_year(), 1900);
        assert_eq!(range.max_year(), 9999);

        assert_eq!(ValidationRange::UTILITY.min_year(), 1900);
        assert_eq!(ValidationRange::UTILITY.max_year(), 2099);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = ValidationRange::UTILITY;
        assert!(range.contains(1900));
        assert!(range.contains(2099));
        assert!(range.contains(2024));
        assert!(!range.contains(1899));
        assert!(!range.contains(2100));
    }

    #[test]
    fn test_inverted_range_accepts_nothing() {
        let range = ValidationRange::new(2000, 1999);
        assert!(range.is_empty());
        assert!(!range.contains(1999));
        assert!(!range.contains(2000));
    }

    #[test]
    fn test_try_new() {
        assert!(ValidationRange::try_new(1900, 1900).is_ok());

        let result = ValidationRange::try_new(2000, 1999);
        assert_eq!(
            result,
            Err(RangeError::Inverted {
                min_year: 2000,
                max_year: 1999
            })
        );
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("minimum (2000) is after maximum (1999)"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationRange::UTILITY.to_string(), "1900..=2099");
    }

    #[test]
    fn test_from_range_inclusive() {
        let range: ValidationRange = (1950..=2050).into();
        assert_eq!(range, ValidationRange::new(1950, 2050));

        let back: RangeInclusive<u16> = range.into();
        assert_eq!(back, 1950..=2050);
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let range: ValidationRange = serde_json::from_str(r#"{"max_year": 2099}"#).unwrap();
        assert_eq!(range, ValidationRange::UTILITY);

        let range: ValidationRange = serde_json::from_str("{}").unwrap();
        assert_eq!(range, ValidationRange::INSTANCE);

        let json = serde_json::to_string(&ValidationRange::UTILITY).unwrap();
        assert_eq!(json, r#"{"min_year":1900,"max_year":2099}"#);
    }
}
