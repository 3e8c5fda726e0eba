use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use exam_cli::exam_file::{LoadedExam, load_exam};
use exam_docx::summarize;
use exam_model::{GradeLevel, Term};
use exam_report::{AnswerKey, AssemblyOptions, assemble, export_file_name, save_artifact};

use crate::cli::{BuildArgs, CheckArgs, InspectArgs};
use crate::summary::{apply_table_style, print_outline};
use crate::types::{BuildResult, CheckResult, QuestionRow};

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let span = info_span!("build", exam = %args.exam_file.display());
    let _guard = span.enter();

    let loaded = load_exam(&args.exam_file)?;
    let title = loaded.metadata.title();
    let file_name = export_file_name(&loaded.metadata);
    let questions = question_rows(&loaded);

    if !loaded.is_valid() {
        return Ok(BuildResult {
            title,
            file_name,
            output: None,
            bytes: 0,
            questions,
            issues: loaded.issues(),
            rejected: loaded.rejected,
            warnings: Vec::new(),
        });
    }

    let options = assembly_options(args);
    let exam = assemble(&loaded.metadata, &loaded.store.snapshot(), &options)
        .context("assemble exam document")?;

    let output = if args.dry_run {
        info!("dry run, document not written");
        None
    } else {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| loaded.base_dir().to_path_buf());
        fs::create_dir_all(&dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
        let path = save_artifact(&dir, &file_name, &exam.document)
            .with_context(|| format!("save {file_name}"))?;
        Some(path)
    };

    Ok(BuildResult {
        title,
        file_name,
        output,
        bytes: exam.document.len(),
        questions,
        issues: Vec::new(),
        rejected: Vec::new(),
        warnings: exam.warnings,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let loaded = load_exam(&args.exam_file)?;
    Ok(CheckResult {
        title: loaded.metadata.title(),
        questions: question_rows(&loaded),
        issues: loaded.issues(),
        rejected: loaded.rejected,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let bytes = fs::read(&args.document)
        .with_context(|| format!("read document {}", args.document.display()))?;
    let summary = summarize(&bytes)
        .with_context(|| format!("read package {}", args.document.display()))?;
    print_outline(&summary);
    Ok(())
}

pub fn run_grades() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Grade", "Level"]);
    apply_table_style(&mut table);
    for grade in GradeLevel::ALL {
        let level = if grade.is_high_school() {
            "Ensino Médio"
        } else {
            "Ensino Fundamental"
        };
        table.add_row(vec![grade.label(), level]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_terms() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Term"]);
    apply_table_style(&mut table);
    for term in Term::ALL {
        table.add_row(vec![term.label()]);
    }
    println!("{table}");
    Ok(())
}

fn assembly_options(args: &BuildArgs) -> AssemblyOptions {
    AssemblyOptions::default()
        .with_font(args.font.clone(), args.font_size)
        .with_essay_lines(args.essay_lines)
        .with_student_name_line(!args.no_student_line)
        .with_answer_key(if args.omit_answers {
            AnswerKey::Omit
        } else {
            AnswerKey::Inline
        })
}

fn question_rows(loaded: &LoadedExam) -> Vec<QuestionRow> {
    loaded
        .store
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionRow::from_question(index + 1, question))
        .collect()
}
