use crate::enums::{OptionLabel, QuestionKind};
use crate::error::ValidationError;
use crate::question::{Choices, ImageBlob, QuestionBody, QuestionContent};

/// A question as typed on the input surface, before validation.
///
/// Option texts and the correct answer are kept regardless of `kind`, the
/// way form fields keep their values when the discriminator is switched.
/// Validation drops them for essay questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub kind: QuestionKind,
    pub options: [String; 4],
    pub correct_answer: Option<OptionLabel>,
    pub image: Option<ImageBlob>,
}

impl QuestionDraft {
    pub fn essay(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: QuestionKind::Essay,
            options: Default::default(),
            correct_answer: None,
            image: None,
        }
    }

    pub fn multiple_choice(text: impl Into<String>, options: [&str; 4]) -> Self {
        Self {
            text: text.into(),
            kind: QuestionKind::MultipleChoice,
            options: options.map(str::to_string),
            correct_answer: None,
            image: None,
        }
    }

    pub fn with_correct_answer(mut self, label: OptionLabel) -> Self {
        self.correct_answer = Some(label);
        self
    }

    pub fn with_image(mut self, image: ImageBlob) -> Self {
        self.image = Some(image);
        self
    }

    pub fn set_option(&mut self, label: OptionLabel, text: impl Into<String>) {
        self.options[label.index()] = text.into();
    }

    /// Checks the draft and produces validated question content.
    ///
    /// The text must be non-empty after trimming. Multiple-choice drafts must
    /// have all four options non-empty after trimming.
    pub fn validate(&self) -> Result<QuestionContent, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let body = match self.kind {
            QuestionKind::Essay => QuestionBody::Essay,
            QuestionKind::MultipleChoice => {
                let [a, b, c, d] = &self.options;
                let options = Choices::new([a.as_str(), b.as_str(), c.as_str(), d.as_str()])?;
                QuestionBody::MultipleChoice {
                    options,
                    correct_answer: self.correct_answer,
                }
            }
        };
        Ok(QuestionContent::new(
            text.to_string(),
            body,
            self.image.clone(),
        ))
    }
}
