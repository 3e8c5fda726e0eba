//! Exam file loading.
//!
//! An exam file is JSON holding the header fields and the question list.
//! Picture paths are relative to the exam file. Loading feeds every question
//! through a [`QuestionStore`]; questions the store rejects are collected
//! with their position instead of aborting the load.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use exam_model::{
    ExamMetadata, GradeLevel, ImageBlob, OptionLabel, QuestionDraft, QuestionKind,
    SUPPORTED_IMAGE_EXTENSIONS, Term,
};
use exam_store::{QuestionStore, StoreError};

/// On-disk exam description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExamFile {
    pub professor: String,
    pub subject: String,
    pub grade: GradeLevel,
    pub term: Term,
    pub date: NaiveDate,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub school_logo: Option<PathBuf>,
    #[serde(default)]
    pub questions: Vec<QuestionEntry>,
}

/// One question as written in the exam file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionEntry {
    pub kind: QuestionKind,
    pub text: String,
    #[serde(default)]
    pub options: OptionsEntry,
    #[serde(default)]
    pub correct_answer: Option<OptionLabel>,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsEntry {
    #[serde(rename = "A", default)]
    pub a: String,
    #[serde(rename = "B", default)]
    pub b: String,
    #[serde(rename = "C", default)]
    pub c: String,
    #[serde(rename = "D", default)]
    pub d: String,
}

/// A question the store refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedQuestion {
    /// 1-based position in the exam file.
    pub position: usize,
    pub text: String,
    pub error: StoreError,
}

/// A problem with the exam as a whole that blocks export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamIssue {
    BlankSubject,
    BlankProfessor,
    NoQuestions,
}

impl fmt::Display for ExamIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankSubject => write!(f, "the subject is blank"),
            Self::BlankProfessor => write!(f, "the professor name is blank"),
            Self::NoQuestions => write!(f, "the exam has no valid questions"),
        }
    }
}

/// Result of loading an exam file.
#[derive(Debug)]
pub struct LoadedExam {
    pub path: PathBuf,
    pub metadata: ExamMetadata,
    pub store: QuestionStore,
    pub rejected: Vec<RejectedQuestion>,
}

impl LoadedExam {
    /// True when nothing blocks export: no rejected questions and no
    /// [`ExamIssue`].
    pub fn is_valid(&self) -> bool {
        self.rejected.is_empty() && self.issues().is_empty()
    }

    /// Exam-level problems, in header order.
    pub fn issues(&self) -> Vec<ExamIssue> {
        let mut issues = Vec::new();
        if self.metadata.subject.trim().is_empty() {
            issues.push(ExamIssue::BlankSubject);
        }
        if self.metadata.professor.trim().is_empty() {
            issues.push(ExamIssue::BlankProfessor);
        }
        if self.store.is_empty() {
            issues.push(ExamIssue::NoQuestions);
        }
        issues
    }

    /// Directory holding the exam file.
    pub fn base_dir(&self) -> &Path {
        base_dir(&self.path)
    }
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

/// Reads, parses and validates the exam file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or when a referenced
/// picture is missing or has an unsupported extension. Invalid questions and
/// a blank header are not errors; see [`LoadedExam::rejected`] and
/// [`LoadedExam::issues`].
pub fn load_exam(path: &Path) -> Result<LoadedExam> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read exam file {}", path.display()))?;
    let file: ExamFile = serde_json::from_str(&raw)
        .with_context(|| format!("parse exam file {}", path.display()))?;
    let (metadata, store, rejected) = file.into_exam(base_dir(path))?;
    info!(
        path = %path.display(),
        accepted = store.len(),
        rejected = rejected.len(),
        "loaded exam file"
    );
    Ok(LoadedExam {
        path: path.to_path_buf(),
        metadata,
        store,
        rejected,
    })
}

impl ExamFile {
    /// Builds metadata and a populated store; picture paths resolve against
    /// `base_dir`.
    pub fn into_exam(
        self,
        base_dir: &Path,
    ) -> Result<(ExamMetadata, QuestionStore, Vec<RejectedQuestion>)> {
        let mut metadata = ExamMetadata::new(
            self.professor,
            self.subject,
            self.grade,
            self.term,
            self.date,
        );
        if let Some(name) = self.school_name {
            metadata = metadata.with_school_name(name);
        }
        if let Some(logo) = &self.school_logo {
            let blob = load_image(base_dir, logo).context("load school logo")?;
            metadata = metadata.with_school_logo(blob);
        }

        let mut store = QuestionStore::new();
        let mut rejected = Vec::new();
        for (index, entry) in self.questions.into_iter().enumerate() {
            let position = index + 1;
            let draft = entry
                .to_draft(base_dir)
                .with_context(|| format!("question {position}"))?;
            match store.add_question(&draft) {
                Ok(id) => debug!(position, %id, "accepted question"),
                Err(error) => {
                    warn!(position, %error, "rejected question");
                    rejected.push(RejectedQuestion {
                        position,
                        text: draft.text.clone(),
                        error,
                    });
                }
            }
        }
        Ok((metadata, store, rejected))
    }
}

impl QuestionEntry {
    fn to_draft(&self, base_dir: &Path) -> Result<QuestionDraft> {
        let mut draft = match self.kind {
            QuestionKind::Essay => QuestionDraft::essay(self.text.clone()),
            QuestionKind::MultipleChoice => QuestionDraft::multiple_choice(
                self.text.clone(),
                [
                    self.options.a.as_str(),
                    self.options.b.as_str(),
                    self.options.c.as_str(),
                    self.options.d.as_str(),
                ],
            ),
        };
        draft.correct_answer = self.correct_answer;
        if let Some(image) = &self.image {
            draft = draft.with_image(load_image(base_dir, image)?);
        }
        Ok(draft)
    }
}

/// Reads a picture file and checks its extension.
pub fn load_image(base_dir: &Path, relative: &Path) -> Result<ImageBlob> {
    let path = base_dir.join(relative);
    let bytes = fs::read(&path).with_context(|| format!("read image {}", path.display()))?;
    let mut blob = ImageBlob::new(bytes);
    if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
        blob = blob.with_filename(name);
    }
    if !blob.has_supported_extension() {
        bail!(
            "unsupported image file {} (expected one of: {})",
            path.display(),
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        );
    }
    Ok(blob)
}
