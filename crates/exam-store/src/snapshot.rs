use std::ops::Deref;
use std::sync::Arc;

use exam_model::{Question, QuestionKind};

/// Frozen copy of a question list, in list order.
///
/// Cloning is cheap and later changes to the store are never visible here,
/// so a document can be assembled from a snapshot while editing goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    questions: Arc<[Question]>,
}

impl Snapshot {
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions of the given kind.
    pub fn count_kind(&self, kind: QuestionKind) -> usize {
        self.questions.iter().filter(|q| q.kind() == kind).count()
    }

    /// Number of questions carrying a picture.
    pub fn image_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.image().is_some())
            .count()
    }
}

impl Deref for Snapshot {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
