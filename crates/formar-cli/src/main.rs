//! Formador CLI: structural validation of HTML form documents
//!
//! ## Usage
//!
//! ```bash
//! formador check                  # validate ./index.html
//! formador check form.html        # validate a specific document
//! formador check --format json    # machine-readable report
//! formador check --fail-fast      # stop on the first mismatch
//! ```

use clap::Parser;
use formador::{
    render_console, render_summary, CheckArgs, Cli, CliConfig, CliResult, Commands, ReportFormat,
    Verbosity,
};
use formar::{student_form_suite, FormarError, Reporter, Validator};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match run(&config, &cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig, cli: &Cli) -> CliResult<bool> {
    match &cli.command {
        Commands::Check(args) => run_check(config, args),
    }
}

/// Run the check battery; returns whether every check passed.
fn run_check(config: &CliConfig, args: &CheckArgs) -> CliResult<bool> {
    let validator = Validator::from_file(&args.path)?;
    let suite = student_form_suite();

    let mut reporter = if config.fail_fast || args.fail_fast {
        Reporter::fail_fast()
    } else {
        Reporter::new()
    }
    .with_name(suite.name());

    if let Err(err) = validator.run(&suite, &mut reporter) {
        match err {
            // The mismatch is recorded; the report below covers it.
            FormarError::CheckFailed { .. } => {}
            other => return Err(other.into()),
        }
    }

    match args.format {
        ReportFormat::Console => {
            if config.verbosity.is_quiet() {
                print!("{}", render_summary(&reporter));
            } else {
                print!("{}", render_console(&reporter, config.color.should_color()));
            }
        }
        ReportFormat::Json => println!("{}", reporter.render_json()?),
        ReportFormat::Junit => print!("{}", reporter.render_junit()),
    }

    if let Some(path) = &args.junit_out {
        reporter.generate_junit(path)?;
    }

    Ok(reporter.all_passed())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };
    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
}

fn init_tracing(verbosity: Verbosity) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.env_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
