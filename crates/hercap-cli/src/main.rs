mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let rendered = commands::run(cli)?;
    output::render(&rendered, cli.format, cli.pretty)?;

    let warnings = &rendered.envelope.meta.warnings;
    if cli.strict && !warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: warnings.len(),
        });
    }

    Ok(())
}
