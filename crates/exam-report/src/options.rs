//! Layout options for assembled exams.

/// Number of blank answer lines under an essay question.
pub const DEFAULT_ESSAY_LINES: usize = 4;

/// Upper bound on answer lines per essay question.
pub const MAX_ESSAY_LINES: usize = 50;

/// Length of one answer line, in underscores.
pub const RULE_WIDTH: usize = 60;

/// Display width of the school logo.
pub const DEFAULT_LOGO_WIDTH_CM: f64 = 4.0;

/// Display width of question pictures.
pub const DEFAULT_IMAGE_WIDTH_CM: f64 = 12.0;

/// How the correct answer of a multiple-choice question is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerKey {
    /// A "Resposta correta: X" line under the options.
    #[default]
    Inline,
    /// Not printed (student copy).
    Omit,
}

/// Formatting choices applied by [`crate::assemble`].
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyOptions {
    pub font_family: String,
    pub font_size_pt: f32,
    pub essay_lines: usize,
    pub logo_width_cm: f64,
    pub image_width_cm: f64,
    /// Print the "Nome do aluno" line under the header.
    pub student_name_line: bool,
    pub answer_key: AnswerKey,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size_pt: 12.0,
            essay_lines: DEFAULT_ESSAY_LINES,
            logo_width_cm: DEFAULT_LOGO_WIDTH_CM,
            image_width_cm: DEFAULT_IMAGE_WIDTH_CM,
            student_name_line: true,
            answer_key: AnswerKey::Inline,
        }
    }
}

impl AssemblyOptions {
    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size_pt: f32) -> Self {
        self.font_family = family.into();
        self.font_size_pt = size_pt;
        self
    }

    /// Sets the answer lines per essay question, capped at [`MAX_ESSAY_LINES`].
    #[must_use]
    pub fn with_essay_lines(mut self, lines: usize) -> Self {
        self.essay_lines = lines.min(MAX_ESSAY_LINES);
        self
    }

    #[must_use]
    pub fn with_student_name_line(mut self, enabled: bool) -> Self {
        self.student_name_line = enabled;
        self
    }

    #[must_use]
    pub fn with_answer_key(mut self, answer_key: AnswerKey) -> Self {
        self.answer_key = answer_key;
        self
    }

    #[must_use]
    pub fn with_image_widths(mut self, logo_cm: f64, question_cm: f64) -> Self {
        self.logo_width_cm = logo_cm;
        self.image_width_cm = question_cm;
        self
    }
}
