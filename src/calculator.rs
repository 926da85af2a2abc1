//! Rent affordability calculator.
//!
//! Holds the form state (mode, raw input text and the last outcome) and
//! converts between monthly rent and annual income using the 30x rule.

use crate::constants::AFFORDABILITY_MULTIPLIER;
use crate::format::format_currency;
use crate::logging;
use crate::validation::InputValidator;
use crate::{RentCalcError, Result};

/// What the user wants to calculate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CalculationMode {
    /// Required annual income for a given monthly rent
    #[default]
    Income,
    /// Affordable monthly rent for a given annual income
    Rent,
}

impl CalculationMode {
    /// Field the mode reads its amount from
    pub fn input_field(&self) -> InputField {
        match self {
            CalculationMode::Income => InputField::MonthlyRent,
            CalculationMode::Rent => InputField::AnnualIncome,
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            CalculationMode::Income => CalculationMode::Rent,
            CalculationMode::Rent => CalculationMode::Income,
        }
    }

    /// Label shown on the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::Income => "Required Income",
            CalculationMode::Rent => "Affordable Rent",
        }
    }

    /// Prefix of the success message
    pub fn result_prefix(&self) -> &'static str {
        match self {
            CalculationMode::Income => "Required Annual Income: ",
            CalculationMode::Rent => "Affordable Monthly Rent: ",
        }
    }

    /// Apply the mode's conversion to a validated amount
    pub fn convert(&self, amount: f64) -> f64 {
        match self {
            CalculationMode::Income => required_annual_income(amount),
            CalculationMode::Rent => affordable_monthly_rent(amount),
        }
    }
}

/// The two text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    MonthlyRent,
    AnnualIncome,
}

impl InputField {
    /// Label above the input box
    pub fn label(&self) -> &'static str {
        match self {
            InputField::MonthlyRent => "Monthly Rent (£)",
            InputField::AnnualIncome => "Annual Income (£)",
        }
    }

    /// Text shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputField::MonthlyRent => "Enter monthly rent",
            InputField::AnnualIncome => "Enter annual income",
        }
    }

    /// Lower-case name used in logs and suggestions
    pub fn description(&self) -> &'static str {
        match self {
            InputField::MonthlyRent => "monthly rent",
            InputField::AnnualIncome => "annual income",
        }
    }

    /// Message shown when the field fails validation
    pub fn invalid_message(&self) -> &'static str {
        match self {
            InputField::MonthlyRent => "Please enter a valid monthly rent amount",
            InputField::AnnualIncome => "Please enter a valid annual income",
        }
    }
}

/// Result of the last calculation attempt. Error and success never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// No attempt yet
    #[default]
    Empty,
    Error(String),
    Success(String),
}

/// Raw form contents and the last outcome
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub monthly_rent_text: String,
    pub annual_income_text: String,
    pub outcome: Outcome,
}

impl FormState {
    /// Text held by `field`
    pub fn text(&self, field: InputField) -> &str {
        match field {
            InputField::MonthlyRent => &self.monthly_rent_text,
            InputField::AnnualIncome => &self.annual_income_text,
        }
    }

    fn text_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::MonthlyRent => &mut self.monthly_rent_text,
            InputField::AnnualIncome => &mut self.annual_income_text,
        }
    }
}

/// Required annual income for `monthly_rent`
pub fn required_annual_income(monthly_rent: f64) -> f64 {
    monthly_rent * AFFORDABILITY_MULTIPLIER
}

/// Affordable monthly rent for `annual_income`
pub fn affordable_monthly_rent(annual_income: f64) -> f64 {
    annual_income / AFFORDABILITY_MULTIPLIER
}

/// Calculator panel state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    mode: CalculationMode,
    form: FormState,
}

impl Calculator {
    /// Create a calculator in income mode with empty inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator starting in `mode`
    pub fn with_mode(mode: CalculationMode) -> Self {
        Self {
            mode,
            form: FormState::default(),
        }
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn outcome(&self) -> &Outcome {
        &self.form.outcome
    }

    /// Field read by the current mode
    pub fn active_field(&self) -> InputField {
        self.mode.input_field()
    }

    /// Text of the field read by the current mode
    pub fn active_text(&self) -> &str {
        self.form.text(self.active_field())
    }

    /// Error banner text, if the last attempt failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.form.outcome {
            Outcome::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Result banner text, if the last attempt succeeded
    pub fn result_text(&self) -> Option<&str> {
        match &self.form.outcome {
            Outcome::Success(msg) => Some(msg),
            _ => None,
        }
    }

    /// Switch mode. Inputs and the previous outcome are left as they are.
    pub fn set_mode(&mut self, mode: CalculationMode) {
        if self.mode != mode {
            logging::debug_log(&format!("Mode changed: {:?} -> {:?}", self.mode, mode));
        }
        self.mode = mode;
    }

    /// Store raw text for `field` without validating it
    pub fn update_input(&mut self, field: InputField, text: &str) {
        *self.form.text_mut(field) = text.to_string();
    }

    /// Append a character to the active field
    pub fn push_char(&mut self, ch: char) {
        let field = self.active_field();
        self.form.text_mut(field).push(ch);
    }

    /// Remove the last character of the active field
    pub fn pop_char(&mut self) {
        let field = self.active_field();
        self.form.text_mut(field).pop();
    }

    /// Validate the active field and convert it, recording the outcome
    pub fn calculate(&mut self) -> &Outcome {
        // The previous error or result is always replaced
        self.form.outcome = match self.evaluate() {
            Ok(message) => {
                logging::debug_log(&format!("Calculation succeeded: {}", message));
                Outcome::Success(message)
            }
            Err(err) => Outcome::Error(err.user_message()),
        };
        &self.form.outcome
    }

    fn evaluate(&self) -> Result<String> {
        let field = self.active_field();
        let text = self.form.text(field);
        let amount = InputValidator::validate_amount(text, field)?;

        let converted = self.mode.convert(amount);
        if !converted.is_finite() {
            logging::warn_log(&format!("Conversion of {} overflowed", amount));
            return Err(RentCalcError::validation_error(field, text));
        }

        Ok(format!(
            "{}{}",
            self.mode.result_prefix(),
            format_currency(converted)
        ))
    }
}
