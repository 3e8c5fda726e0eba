//! Tests for artifact naming and saving.

use chrono::NaiveDate;
use tempfile::tempdir;

use exam_model::{ExamMetadata, GradeLevel, Term};
use exam_report::{AssemblyError, DOCX_MIME_TYPE, export_file_name, save_artifact};

fn metadata(subject: &str) -> ExamMetadata {
    ExamMetadata::new(
        "Ana",
        subject,
        GradeLevel::Fundamental6,
        Term::Second,
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
    )
}

#[test]
fn file_name_joins_subject_grade_and_term() {
    assert_eq!(
        export_file_name(&metadata("Matemática")),
        "Matemática_6º_ano_-_Fundamental_2º_Bimestre.docx"
    );
}

#[test]
fn file_name_drops_path_separators() {
    assert_eq!(
        export_file_name(&metadata(" Língua Portuguesa/../Artes\\x ")),
        "Língua_Portuguesa..Artesx_6º_ano_-_Fundamental_2º_Bimestre.docx"
    );
}

#[test]
fn mime_type_is_wordprocessing_document() {
    assert!(DOCX_MIME_TYPE.ends_with("wordprocessingml.document"));
}

#[test]
fn save_writes_bytes_and_leaves_no_temp_files() {
    let dir = tempdir().unwrap();

    let path = save_artifact(dir.path(), "prova.docx", b"conteudo").unwrap();

    assert_eq!(path, dir.path().join("prova.docx"));
    assert_eq!(std::fs::read(&path).unwrap(), b"conteudo");
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    save_artifact(dir.path(), "prova.docx", b"antiga").unwrap();

    let path = save_artifact(dir.path(), "prova.docx", b"nova").unwrap();

    assert_eq!(std::fs::read(path).unwrap(), b"nova");
}

#[test]
fn save_rejects_names_with_separators() {
    let dir = tempdir().unwrap();
    for name in ["", "..", "sub/prova.docx", "sub\\prova.docx"] {
        let error = save_artifact(dir.path(), name, b"x").unwrap_err();
        assert!(matches!(error, AssemblyError::InvalidFileName(_)), "{name}");
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_into_missing_directory_fails_cleanly() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nao-existe");

    let error = save_artifact(&missing, "prova.docx", b"x").unwrap_err();

    assert!(matches!(error, AssemblyError::Save { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
