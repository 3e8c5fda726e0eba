//! CLI argument definitions for the exam builder.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "exam-builder",
    version,
    about = "Exam builder - turn an exam file into a printable .docx",
    long_about = "Build printable exams from a JSON exam file.\n\n\
                  Questions are validated before anything is written; pictures that\n\
                  cannot be embedded are replaced by a placeholder and reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an exam file and export it as a .docx document.
    Build(BuildArgs),

    /// Validate an exam file and list its questions.
    Check(CheckArgs),

    /// Print the paragraph outline of a .docx document.
    Inspect(InspectArgs),

    /// List the accepted grade levels.
    Grades,

    /// List the accepted terms.
    Terms,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the exam file (JSON).
    #[arg(value_name = "EXAM_FILE")]
    pub exam_file: PathBuf,

    /// Output directory for the document (default: the exam file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Default font family.
    #[arg(long = "font", value_name = "NAME", default_value = "Arial")]
    pub font: String,

    /// Default font size in points.
    #[arg(long = "font-size", value_name = "PT", default_value_t = 12.0)]
    pub font_size: f32,

    /// Answer lines printed under each essay question.
    #[arg(
        long = "essay-lines",
        value_name = "N",
        default_value_t = exam_report::DEFAULT_ESSAY_LINES,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=exam_report::MAX_ESSAY_LINES as u64)
    )]
    pub essay_lines: usize,

    /// Leave out the "Nome do aluno" line.
    #[arg(long = "no-student-line")]
    pub no_student_line: bool,

    /// Do not print correct answers (student copy).
    #[arg(long = "omit-answers")]
    pub omit_answers: bool,

    /// Validate and assemble without writing the document.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the exam file (JSON).
    #[arg(value_name = "EXAM_FILE")]
    pub exam_file: PathBuf,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to a .docx document.
    #[arg(value_name = "DOCX_FILE")]
    pub document: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
