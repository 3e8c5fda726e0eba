//! Exam builder CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use exam_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_build, run_check, run_grades, run_inspect, run_terms};
use crate::summary::{print_build_summary, print_check_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Build(args) => run_build(args).map(|result| {
            print_build_summary(&result);
            !result.has_errors()
        }),
        Command::Check(args) => run_check(args).map(|result| {
            print_check_summary(&result);
            !result.has_errors()
        }),
        Command::Inspect(args) => run_inspect(args).map(|()| true),
        Command::Grades => run_grades().map(|()| true),
        Command::Terms => run_terms().map(|()| true),
    };
    let exit_code = match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
