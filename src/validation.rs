//! Input validation.
//!
//! Turns the raw text of an amount field into a positive, finite number

use crate::calculator::InputField;
use crate::{logging, RentCalcError, Result};
use regex::Regex;
use std::sync::OnceLock;

// Optional sign, digits with an optional fraction (`5.`, `.5` allowed), optional exponent
static NUMBER_LITERAL: OnceLock<Regex> = OnceLock::new();

fn number_literal() -> &'static Regex {
    NUMBER_LITERAL.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$")
            .expect("number literal regex is valid")
    })
}

/// Input validator for the calculator amount fields
pub struct InputValidator;

impl InputValidator {
    /// Validates the text of `field` and returns the amount it holds
    pub fn validate_amount(text: &str, field: InputField) -> Result<f64> {
        let trimmed = text.trim();

        if trimmed.is_empty() || !number_literal().is_match(trimmed) {
            logging::warn_log(&format!("Rejected {} input: {:?}", field.description(), text));
            return Err(RentCalcError::validation_error(field, text));
        }

        // `inf` and `NaN` never get past the regex, but a huge exponent still overflows
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
            _ => {
                logging::warn_log(&format!(
                    "Rejected {} amount: {:?}",
                    field.description(),
                    text
                ));
                Err(RentCalcError::validation_error(field, text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount_accepts_positive_numbers() {
        let cases = [
            ("1000", 1000.0),
            ("60000", 60000.0),
            ("  1250.50 ", 1250.5),
            ("+42", 42.0),
            ("5.", 5.0),
            (".5", 0.5),
            ("1e3", 1000.0),
            ("2.5E-1", 0.25),
        ];

        for (text, expected) in cases {
            let value = InputValidator::validate_amount(text, InputField::MonthlyRent)
                .unwrap_or_else(|e| panic!("{:?} should be valid: {:?}", text, e));
            assert_eq!(value, expected, "Failed for input {:?}", text);
        }
    }

    #[test]
    fn test_validate_amount_rejects_invalid_text() {
        let cases = [
            "", "   ", "abc", "12abc", "1,000", "£100", "0x10", "inf", "Infinity", "NaN", ".",
            "-", "1e", "1 000",
        ];

        for text in cases {
            assert!(
                InputValidator::validate_amount(text, InputField::AnnualIncome).is_err(),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_validate_amount_rejects_non_positive() {
        for text in ["0", "0.0", "-0", "-500", "-0.01"] {
            assert!(InputValidator::validate_amount(text, InputField::MonthlyRent).is_err());
        }
    }

    #[test]
    fn test_validate_amount_rejects_overflow() {
        assert!(InputValidator::validate_amount("1e400", InputField::MonthlyRent).is_err());
    }

    #[test]
    fn test_validation_error_carries_field() {
        let err = InputValidator::validate_amount("", InputField::MonthlyRent).unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid monthly rent amount");

        let err = InputValidator::validate_amount("-500", InputField::AnnualIncome).unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid annual income");
    }
}
