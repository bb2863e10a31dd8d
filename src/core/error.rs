use std::ops::RangeInclusive;

use thiserror::Error;

use crate::core::charger::CurrentType;

#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("invalid {field}: `{value}`, expected {expected}")]
    InvalidInput { field: &'static str, value: f64, expected: &'static str },

    #[error("incompatible pairing: the vehicle does not accept {current_type} charging")]
    Incompatible { current_type: CurrentType },
}

impl ComparisonError {
    pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidInput { field, value, expected: "a positive number" })
        }
    }

    pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidInput { field, value, expected: "zero or a positive number" })
        }
    }

    pub(crate) fn ensure_within(
        field: &'static str,
        value: f64,
        range: &RangeInclusive<f64>,
        expected: &'static str,
    ) -> Result<(), Self> {
        if range.contains(&value) {
            Ok(())
        } else {
            Err(Self::InvalidInput { field, value, expected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ComparisonError::ensure_positive("price", 0.8).is_ok());
        assert_eq!(
            ComparisonError::ensure_positive("price", 0.0),
            Err(ComparisonError::InvalidInput {
                field: "price",
                value: 0.0,
                expected: "a positive number"
            }),
        );
        assert!(ComparisonError::ensure_positive("price", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_within_rejects_nan() {
        assert!(ComparisonError::ensure_within("share", f64::NAN, &(0.0..=100.0), "").is_err());
    }

    #[test]
    fn test_display() {
        let error = ComparisonError::Incompatible { current_type: CurrentType::Dc };
        assert_eq!(
            error.to_string(),
            "incompatible pairing: the vehicle does not accept DC charging",
        );
    }
}
