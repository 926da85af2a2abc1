//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap. Arguments pre-fill the
//! calculator form and can run a single calculation without the TUI.

use crate::calculator::{CalculationMode, Calculator, InputField};
use crate::RentCalcError;
use clap::Parser;

/// Rent Affordability Calculator - converts between monthly rent and annual income
#[derive(Parser, Debug)]
#[command(
    name = "rent-calc",
    about = "Rent Affordability Calculator - converts between monthly rent and annual income",
    long_about = "Rent Affordability Calculator - terminal calculator based on the 30% rule of thumb

    EXAMPLES:
        rent-calc                          # Interactive calculator
        rent-calc --rent 1000              # Pre-fill the monthly rent
        rent-calc --rent 1000 --once       # Print the required annual income and exit
        rent-calc --income 60000 --once    # Print the affordable monthly rent and exit

    USAGE TIP:
        Use Tab to move between controls, Enter to calculate and Esc to quit
    "
)]
#[command(version)]
pub struct Cli {
    /// What to calculate
    #[arg(
        short,
        long,
        value_enum,
        help = "What to calculate (default: income, or rent when only --income is given)"
    )]
    pub mode: Option<CalculationMode>,

    /// Monthly rent
    #[arg(short, long, allow_hyphen_values = true, help = "Monthly rent in pounds")]
    pub rent: Option<String>,

    /// Annual income
    #[arg(short, long, allow_hyphen_values = true, help = "Annual income in pounds")]
    pub income: Option<String>,

    /// Print the outcome once and exit
    #[arg(short, long, help = "Calculate once, print the outcome and exit")]
    pub once: bool,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to a temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> bool {
        if self.once {
            let field = self.calculation_mode().input_field();
            let supplied = match field {
                InputField::MonthlyRent => self.rent.is_some(),
                InputField::AnnualIncome => self.income.is_some(),
            };
            if !supplied {
                let err = RentCalcError::InvalidArguments(format!(
                    "--once needs the {} ({}) to be given",
                    field.description(),
                    Self::flag_for(field)
                ));
                eprintln!("{}", err);
                return false;
            }
        }

        true
    }

    /// Get the calculation mode, inferring it from the supplied amounts
    pub fn calculation_mode(&self) -> CalculationMode {
        match (self.mode, &self.rent, &self.income) {
            (Some(mode), _, _) => mode,
            (None, None, Some(_)) => CalculationMode::Rent,
            _ => CalculationMode::Income,
        }
    }

    /// Build a calculator pre-filled from the arguments
    pub fn build_calculator(&self) -> Calculator {
        let mut calculator = Calculator::with_mode(self.calculation_mode());
        if let Some(rent) = &self.rent {
            calculator.update_input(InputField::MonthlyRent, rent);
        }
        if let Some(income) = &self.income {
            calculator.update_input(InputField::AnnualIncome, income);
        }
        calculator
    }

    fn flag_for(field: InputField) -> &'static str {
        match field {
            InputField::MonthlyRent => "--rent",
            InputField::AnnualIncome => "--income",
        }
    }
}
