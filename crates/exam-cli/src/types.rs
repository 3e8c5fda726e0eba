use std::path::PathBuf;

use exam_cli::exam_file::{ExamIssue, RejectedQuestion};
use exam_model::{Question, QuestionBody};
use exam_report::ImageEmbedWarning;

#[derive(Debug)]
pub struct BuildResult {
    pub title: String,
    pub file_name: String,
    /// Where the document was saved; `None` on a dry run or when validation failed.
    pub output: Option<PathBuf>,
    pub bytes: usize,
    pub questions: Vec<QuestionRow>,
    pub issues: Vec<ExamIssue>,
    pub rejected: Vec<RejectedQuestion>,
    pub warnings: Vec<ImageEmbedWarning>,
}

impl BuildResult {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty() || !self.rejected.is_empty()
    }
}

#[derive(Debug)]
pub struct CheckResult {
    pub title: String,
    pub questions: Vec<QuestionRow>,
    pub issues: Vec<ExamIssue>,
    pub rejected: Vec<RejectedQuestion>,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty() || !self.rejected.is_empty()
    }
}

#[derive(Debug)]
pub struct QuestionRow {
    pub number: usize,
    pub kind: &'static str,
    pub text: String,
    pub answer: Option<String>,
    pub image: Option<String>,
}

impl QuestionRow {
    pub fn from_question(number: usize, question: &Question) -> Self {
        let answer = match question.body() {
            QuestionBody::MultipleChoice { correct_answer, .. } => {
                correct_answer.map(|label| label.to_string())
            }
            QuestionBody::Essay => None,
        };
        Self {
            number,
            kind: question.kind().display_label(),
            text: question.text().to_string(),
            answer,
            image: question.image().map(|blob| blob.display_name().to_string()),
        }
    }
}
