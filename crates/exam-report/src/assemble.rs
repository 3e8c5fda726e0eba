//! Exam document assembly.

use exam_docx::{Alignment, Document, DocumentSettings, Paragraph, ParagraphStyle, Run};
use exam_model::{ExamMetadata, ImageBlob, Question, QuestionBody};
use exam_store::Snapshot;
use tracing::{debug, info, warn};

use crate::error::{ImageEmbedWarning, ImageSlot, Result};
use crate::images::prepare_picture;
use crate::options::{AnswerKey, AssemblyOptions, RULE_WIDTH};

const STUDENT_NAME_LINE: &str = "Nome do aluno: ____________________________";

/// A finished exam document.
#[derive(Debug, Clone)]
pub struct AssembledExam {
    /// The `.docx` package.
    pub document: Vec<u8>,
    /// Pictures that were replaced by placeholders.
    pub warnings: Vec<ImageEmbedWarning>,
    pub question_count: usize,
}

impl AssembledExam {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Placeholder printed where a picture could not be embedded.
pub fn image_placeholder(blob: &ImageBlob) -> String {
    format!("[Imagem indisponível: {}]", blob.display_name())
}

/// Answer line printed under an essay question.
pub fn rule_line() -> String {
    "_".repeat(RULE_WIDTH)
}

/// Builds the exam document for `questions` in their snapshot order.
///
/// Picture failures are recorded in [`AssembledExam::warnings`]; only a
/// failure to produce the package itself is an error.
pub fn assemble(
    metadata: &ExamMetadata,
    questions: &Snapshot,
    options: &AssemblyOptions,
) -> Result<AssembledExam> {
    let settings =
        DocumentSettings::default().with_font(options.font_family.clone(), options.font_size_pt);
    let mut builder = ExamBuilder {
        document: Document::new(settings),
        options,
        warnings: Vec::new(),
    };

    builder.header(metadata);
    for (index, question) in questions.iter().enumerate() {
        builder.question(index + 1, question);
    }

    let document = builder.document.to_bytes()?;
    info!(
        questions = questions.len(),
        warnings = builder.warnings.len(),
        bytes = document.len(),
        "assembled exam document"
    );
    Ok(AssembledExam {
        document,
        warnings: builder.warnings,
        question_count: questions.len(),
    })
}

struct ExamBuilder<'a> {
    document: Document,
    options: &'a AssemblyOptions,
    warnings: Vec<ImageEmbedWarning>,
}

impl ExamBuilder<'_> {
    fn header(&mut self, metadata: &ExamMetadata) {
        if let Some(logo) = &metadata.school_logo {
            self.picture(logo, self.options.logo_width_cm, ImageSlot::Logo);
        }
        if let Some(school) = metadata.school_name() {
            self.document.add_paragraph(
                Paragraph::new()
                    .run(Run::new(school).bold())
                    .align(Alignment::Center),
            );
        }
        self.document.add_paragraph(
            Paragraph::new()
                .run(Run::new(metadata.title()).bold())
                .style(ParagraphStyle::Title)
                .align(Alignment::Center),
        );
        self.document
            .add_text(format!("Professor(a): {}", metadata.professor))
            .add_text(format!("Turma: {}", metadata.grade))
            .add_text(format!("Data: {}", metadata.formatted_date()));
        if self.options.student_name_line {
            self.document.add_text(STUDENT_NAME_LINE);
        }
        self.document.add_blank();
    }

    fn question(&mut self, number: usize, question: &Question) {
        debug!(number, id = %question.id(), kind = %question.kind(), "adding question");
        self.document.add_paragraph(
            Paragraph::new()
                .run(Run::new(format!("{number}. ")).bold())
                .run(Run::new(question.text()))
                .keep_with_next(),
        );

        if let Some(image) = question.image() {
            let slot = ImageSlot::Question {
                number,
                id: question.id(),
            };
            self.picture(image, self.options.image_width_cm, slot);
        }

        match question.body() {
            QuestionBody::MultipleChoice {
                options,
                correct_answer,
            } => {
                for (label, option) in options.iter() {
                    self.document.add_text(format!("{label}) {option}"));
                }
                if let (Some(label), AnswerKey::Inline) = (correct_answer, self.options.answer_key)
                {
                    self.document.add_paragraph(
                        Paragraph::new()
                            .run(Run::new(format!("Resposta correta: {label}")).italic()),
                    );
                }
            }
            QuestionBody::Essay => {
                for _ in 0..self.options.essay_lines {
                    self.document.add_text(rule_line());
                }
            }
        }

        self.document.add_blank();
    }

    fn picture(&mut self, blob: &ImageBlob, width_cm: f64, slot: ImageSlot) {
        match prepare_picture(blob, width_cm) {
            Ok(picture) => {
                self.document.add_picture(picture, Alignment::Center);
            }
            Err(error) => {
                warn!(%slot, file = blob.display_name(), %error, "image replaced by placeholder");
                self.document.add_paragraph(
                    Paragraph::text(image_placeholder(blob)).align(Alignment::Center),
                );
                self.warnings.push(ImageEmbedWarning {
                    slot,
                    filename: blob.display_name().to_string(),
                    error,
                });
            }
        }
    }
}
