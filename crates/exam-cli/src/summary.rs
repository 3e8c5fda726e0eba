use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use exam_cli::exam_file::{ExamIssue, RejectedQuestion};
use exam_docx::PackageSummary;
use exam_report::{DOCX_MIME_TYPE, ImageEmbedWarning};

use crate::types::{BuildResult, CheckResult, QuestionRow};

const PREVIEW_CHARS: usize = 60;

pub fn print_build_summary(result: &BuildResult) {
    println!("Exam: {}", result.title);
    print_question_table(&result.questions);
    if result.has_errors() {
        print_issues(&result.issues);
        print_rejected(&result.rejected);
        println!("Nothing written: fix the problems above and run again.");
        return;
    }
    print_warnings(&result.warnings);
    match &result.output {
        Some(path) => println!(
            "Saved: {} ({} bytes, {})",
            path.display(),
            result.bytes,
            DOCX_MIME_TYPE
        ),
        None => println!(
            "Dry run: {} would be {} bytes",
            result.file_name, result.bytes
        ),
    }
}

pub fn print_check_summary(result: &CheckResult) {
    println!("Exam: {}", result.title);
    print_question_table(&result.questions);
    if result.has_errors() {
        print_issues(&result.issues);
        print_rejected(&result.rejected);
    } else {
        println!("All {} questions are valid.", result.questions.len());
    }
}

fn print_issues(issues: &[ExamIssue]) {
    for issue in issues {
        println!("Error: {issue}");
    }
}

pub fn print_outline(summary: &PackageSummary) {
    if let Some(title) = &summary.title {
        println!("Title: {title}");
    }
    println!(
        "Paragraphs: {}  Pictures: {}",
        summary.paragraphs.len(),
        summary.pictures
    );
    for part in &summary.media {
        println!("  {part}");
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Text")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, text) in summary.paragraphs.iter().enumerate() {
        let cell = if text.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(text)
        };
        table.add_row(vec![Cell::new(index + 1), cell]);
    }
    println!("{table}");
}

fn print_question_table(rows: &[QuestionRow]) {
    if rows.is_empty() {
        println!("No valid questions.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Question"),
        header_cell("Answer"),
        header_cell("Image"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.number),
            Cell::new(row.kind),
            Cell::new(preview(&row.text)),
            optional_cell(row.answer.as_deref()),
            optional_cell(row.image.as_deref()),
        ]);
    }
    println!("{table}");
}

fn print_rejected(rejected: &[RejectedQuestion]) {
    if rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Question"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for item in rejected {
        table.add_row(vec![
            Cell::new(item.position),
            Cell::new(preview(&item.text)),
            Cell::new(item.error.to_string())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!("Rejected questions: {}", rejected.len());
    println!("{table}");
}

fn print_warnings(warnings: &[ImageEmbedWarning]) {
    if warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Where"),
        header_cell("File"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    for warning in warnings {
        table.add_row(vec![
            Cell::new(warning.slot.to_string()),
            Cell::new(&warning.filename),
            Cell::new(warning.error.to_string()).fg(Color::Yellow),
        ]);
    }
    println!("Pictures replaced by placeholders: {}", warnings.len());
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn preview(text: &str) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= PREVIEW_CHARS {
        single_line
    } else {
        let cut: String = single_line.chars().take(PREVIEW_CHARS - 1).collect();
        format!("{cut}…")
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
