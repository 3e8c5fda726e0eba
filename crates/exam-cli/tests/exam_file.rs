//! Integration tests for exam file loading.

use std::fs;
use std::path::Path;

use tempfile::{TempDir, tempdir};

use exam_cli::exam_file::{ExamIssue, load_exam};
use exam_docx::paragraph_texts;
use exam_model::{GradeLevel, OptionLabel, QuestionBody, QuestionKind, Term, ValidationError};
use exam_report::{AssemblyOptions, assemble, export_file_name, save_artifact};
use exam_store::StoreError;

const SCENARIO: &str = r#"{
  "professor": "Ana",
  "subject": "Matemática",
  "grade": "6º ano - Fundamental",
  "term": "2º Bimestre",
  "date": "2024-05-10",
  "questions": [
    { "kind": "essay", "text": "Resolva: 2+2" },
    { "kind": "multiple_choice", "text": "Capital do Brasil?",
      "options": { "A": "Rio", "B": "Brasília", "C": "SP", "D": "BH" },
      "correct_answer": "B" }
  ]
}"#;

fn write_exam(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("prova.json");
    fs::write(&path, json).unwrap();
    path
}

fn write_file(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

#[test]
fn scenario_loads_metadata_and_questions() {
    let dir = tempdir().unwrap();
    let loaded = load_exam(&write_exam(&dir, SCENARIO)).unwrap();

    assert!(loaded.is_valid());
    assert_eq!(loaded.metadata.professor, "Ana");
    assert_eq!(loaded.metadata.grade, GradeLevel::Fundamental6);
    assert_eq!(loaded.metadata.term, Term::Second);
    assert_eq!(loaded.metadata.formatted_date(), "10/05/2024");
    assert_eq!(loaded.store.len(), 2);

    let second = loaded.store.get_at(1).unwrap();
    match second.body() {
        QuestionBody::MultipleChoice {
            options,
            correct_answer,
        } => {
            assert_eq!(options.get(OptionLabel::B), "Brasília");
            assert_eq!(*correct_answer, Some(OptionLabel::B));
        }
        QuestionBody::Essay => panic!("expected multiple choice"),
    }
}

#[test]
fn invalid_questions_are_collected_with_their_position() {
    let dir = tempdir().unwrap();
    let json = r#"{
      "professor": "Ana", "subject": "História", "grade": "1º ano - Médio",
      "term": "4º Bimestre", "date": "2024-11-20",
      "questions": [
        { "kind": "essay", "text": "   " },
        { "kind": "essay", "text": "Válida" },
        { "kind": "multiple_choice", "text": "Incompleta", "options": { "A": "x", "C": "y" } }
      ]
    }"#;
    let loaded = load_exam(&write_exam(&dir, json)).unwrap();

    assert!(!loaded.is_valid());
    assert_eq!(loaded.store.len(), 1);
    assert_eq!(loaded.rejected.len(), 2);
    assert_eq!(loaded.rejected[0].position, 1);
    assert_eq!(
        loaded.rejected[0].error,
        StoreError::Validation(ValidationError::EmptyText)
    );
    assert_eq!(loaded.rejected[1].position, 3);
    assert_eq!(
        loaded.rejected[1].error,
        StoreError::Validation(ValidationError::MissingOptions {
            labels: vec![OptionLabel::B, OptionLabel::D]
        })
    );
}

#[test]
fn pictures_resolve_relative_to_the_exam_file() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("img")).unwrap();
    write_file(&dir.path().join("img"), "mapa.PNG", b"bytes");
    write_file(dir.path(), "logo.jpg", b"logo");
    let json = r#"{
      "professor": "Ana", "subject": "Geografia", "grade": "7º ano - Fundamental",
      "term": "1º Bimestre", "date": "2024-03-01", "school_logo": "logo.jpg",
      "questions": [ { "kind": "essay", "text": "Observe.", "image": "img/mapa.PNG" } ]
    }"#;
    let loaded = load_exam(&write_exam(&dir, json)).unwrap();

    let logo = loaded.metadata.school_logo.as_ref().unwrap();
    assert_eq!(logo.filename.as_deref(), Some("logo.jpg"));
    let image = loaded.store.get_at(0).unwrap().image().unwrap();
    assert_eq!(image.bytes, b"bytes");
    assert_eq!(image.display_name(), "mapa.PNG");
}

#[test]
fn unsupported_picture_extension_fails_the_load() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "figura.gif", b"GIF89a");
    let json = r#"{
      "professor": "Ana", "subject": "Artes", "grade": "2º ano - Fundamental",
      "term": "3º Bimestre", "date": "2024-08-01",
      "questions": [ { "kind": "essay", "text": "Descreva.", "image": "figura.gif" } ]
    }"#;
    let error = load_exam(&write_exam(&dir, json)).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("question 1"), "{message}");
    assert!(message.contains("unsupported image file"), "{message}");
}

#[test]
fn missing_picture_fails_the_load() {
    let dir = tempdir().unwrap();
    let json = r#"{
      "professor": "Ana", "subject": "Artes", "grade": "2º ano - Fundamental",
      "term": "3º Bimestre", "date": "2024-08-01", "school_logo": "nao-existe.png"
    }"#;
    let error = load_exam(&write_exam(&dir, json)).unwrap_err();

    assert!(format!("{error:#}").contains("load school logo"));
}

#[test]
fn unknown_grade_and_fields_are_parse_errors() {
    let dir = tempdir().unwrap();
    let bad_grade = SCENARIO.replace("6º ano - Fundamental", "10º ano");
    assert!(load_exam(&write_exam(&dir, &bad_grade)).is_err());

    let extra_field = SCENARIO.replace("\"professor\"", "\"teacher\": \"x\", \"professor\"");
    let error = load_exam(&write_exam(&dir, &extra_field)).unwrap_err();
    assert!(format!("{error:#}").contains("parse exam file"));
}

#[test]
fn blank_header_and_missing_questions_block_export() {
    let dir = tempdir().unwrap();
    let json = r#"{
      "professor": "", "subject": "   ", "grade": "6º ano - Fundamental",
      "term": "2º Bimestre", "date": "2024-05-10"
    }"#;
    let loaded = load_exam(&write_exam(&dir, json)).unwrap();

    assert!(loaded.rejected.is_empty());
    assert_eq!(
        loaded.issues(),
        vec![
            ExamIssue::BlankSubject,
            ExamIssue::BlankProfessor,
            ExamIssue::NoQuestions
        ]
    );
    assert!(!loaded.is_valid());
}

#[test]
fn all_questions_rejected_leaves_no_questions() {
    let dir = tempdir().unwrap();
    let json = SCENARIO.replace("Resolva: 2+2", " ").replace("\"D\": \"BH\"", "\"D\": \"\"");
    let loaded = load_exam(&write_exam(&dir, &json)).unwrap();

    assert_eq!(loaded.rejected.len(), 2);
    assert_eq!(loaded.issues(), vec![ExamIssue::NoQuestions]);
}

#[test]
fn portuguese_kind_names_are_accepted() {
    let dir = tempdir().unwrap();
    let json = SCENARIO
        .replace("\"essay\"", "\"dissertativa\"")
        .replace("\"multiple_choice\"", "\"Múltipla Escolha\"");
    let loaded = load_exam(&write_exam(&dir, &json)).unwrap();

    assert!(loaded.is_valid());
    let kinds: Vec<QuestionKind> = loaded.store.iter().map(|q| q.kind()).collect();
    assert_eq!(kinds, vec![QuestionKind::Essay, QuestionKind::MultipleChoice]);
}

#[test]
fn loaded_exam_assembles_and_saves() {
    let dir = tempdir().unwrap();
    let loaded = load_exam(&write_exam(&dir, SCENARIO)).unwrap();

    let exam = assemble(
        &loaded.metadata,
        &loaded.store.snapshot(),
        &AssemblyOptions::default(),
    )
    .unwrap();
    let name = export_file_name(&loaded.metadata);
    let path = save_artifact(loaded.base_dir(), &name, &exam.document).unwrap();

    let saved = fs::read(path).unwrap();
    let paragraphs = paragraph_texts(&saved).unwrap();
    assert!(paragraphs.iter().any(|p| p == "1. Resolva: 2+2"));
    assert!(paragraphs.iter().any(|p| p == "D) BH"));
}
