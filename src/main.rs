use rent_calc::calculator::Outcome;
use rent_calc::tui::{self, App};
use rent_calc::{logging, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    if !cli.validate() {
        return ExitCode::from(2);
    }

    if cli.debug {
        match logging::init_debug_logging() {
            Ok(path) => eprintln!("Debug log: {}", path.display()),
            Err(err) => eprintln!("{}", err),
        }
    }
    logging::info_log(&format!("Starting with arguments: {:?}", cli));

    let mut calculator = cli.build_calculator();

    if cli.once {
        return match calculator.calculate() {
            Outcome::Success(result) => {
                println!("{}", result);
                ExitCode::SUCCESS
            }
            Outcome::Error(message) => {
                eprintln!("{}", message);
                ExitCode::FAILURE
            }
            Outcome::Empty => ExitCode::FAILURE,
        };
    }

    if let Err(err) = tui::run(App::with_calculator(calculator)) {
        logging::error_log(&format!(
            "TUI exited with error (recoverable: {}): {:?}",
            err.is_recoverable(),
            err
        ));
        eprintln!("{}", err);
        if let Some(suggestion) = err.get_recovery_suggestion() {
            eprintln!("{}", suggestion);
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
