use chrono::NaiveDate;

use crate::enums::{GradeLevel, Term};
use crate::question::ImageBlob;

/// Header information printed at the top of an exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamMetadata {
    pub professor: String,
    pub subject: String,
    pub grade: GradeLevel,
    pub term: Term,
    pub date: NaiveDate,
    pub school_name: Option<String>,
    pub school_logo: Option<ImageBlob>,
}

impl ExamMetadata {
    pub fn new(
        professor: impl Into<String>,
        subject: impl Into<String>,
        grade: GradeLevel,
        term: Term,
        date: NaiveDate,
    ) -> Self {
        Self {
            professor: professor.into(),
            subject: subject.into(),
            grade,
            term,
            date,
            school_name: None,
            school_logo: None,
        }
    }

    pub fn with_school_name(mut self, name: impl Into<String>) -> Self {
        self.school_name = Some(name.into());
        self
    }

    pub fn with_school_logo(mut self, logo: ImageBlob) -> Self {
        self.school_logo = Some(logo);
        self
    }

    /// Title line: subject and term, both uppercased.
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.subject.trim().to_uppercase(),
            self.term.label().to_uppercase()
        )
    }

    /// Exam date as day/month/year.
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// School name, when present and not blank.
    pub fn school_name(&self) -> Option<&str> {
        self.school_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
