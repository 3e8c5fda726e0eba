//! The session question list.

use tracing::debug;

use exam_model::{Question, QuestionDraft, QuestionId};

use crate::error::{Result, StoreError};
use crate::snapshot::Snapshot;

/// Handle for an open edit, returned by [`QuestionStore::begin_edit`].
///
/// A ticket only commits against the edit that produced it; once that edit
/// is committed or cancelled the ticket is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an edit ticket is needed to commit the edit"]
pub struct EditTicket {
    id: QuestionId,
    serial: u64,
}

impl EditTicket {
    /// The question being edited.
    pub fn question_id(&self) -> QuestionId {
        self.id
    }
}

/// Ordered, mutable list of questions owned by one exam session.
///
/// Insertion order is display and export order. Each question receives a
/// [`QuestionId`] when it is added; identifiers are never reused, so edits
/// and removals can target a question without depending on its position.
///
/// At most one question can be open for editing. While it is open it cannot
/// be removed, by identifier or by position.
#[derive(Debug, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
    next_id: u64,
    editing: Option<EditTicket>,
    edit_serial: u64,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Current zero-based position of a question.
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Validates the draft and appends it to the end of the list.
    pub fn add_question(&mut self, draft: &QuestionDraft) -> Result<QuestionId> {
        let content = draft.validate()?;
        let id = self.allocate_id();
        self.questions.push(Question::new(id, content));
        debug!(
            question_id = %id,
            kind = %draft.kind,
            position = self.questions.len(),
            "question added"
        );
        Ok(id)
    }

    /// Validates the draft and overwrites the question at `index` in place.
    ///
    /// The replaced question keeps its identifier.
    pub fn replace_question(&mut self, index: usize, draft: &QuestionDraft) -> Result<()> {
        let len = self.questions.len();
        if index >= len {
            return Err(StoreError::IndexOutOfBounds { index, len });
        }
        let content = draft.validate()?;
        let question = &mut self.questions[index];
        question.replace_content(content);
        debug!(question_id = %question.id(), index, "question replaced");
        Ok(())
    }

    /// Removes the question at `index`, shifting later questions down by one.
    pub fn remove_question(&mut self, index: usize) -> Result<Question> {
        let len = self.questions.len();
        let Some(question) = self.questions.get(index) else {
            return Err(StoreError::IndexOutOfBounds { index, len });
        };
        self.ensure_not_editing(question.id())?;
        let removed = self.questions.remove(index);
        debug!(question_id = %removed.id(), index, "question removed");
        Ok(removed)
    }

    /// Validates the draft and overwrites the question with the given id.
    pub fn replace(&mut self, id: QuestionId, draft: &QuestionDraft) -> Result<()> {
        let index = self.index_of(id)?;
        self.replace_question(index, draft)
    }

    /// Removes the question with the given id.
    pub fn remove(&mut self, id: QuestionId) -> Result<Question> {
        let index = self.index_of(id)?;
        self.remove_question(index)
    }

    /// Opens `id` for editing.
    pub fn begin_edit(&mut self, id: QuestionId) -> Result<EditTicket> {
        if let Some(open) = &self.editing {
            return Err(StoreError::EditAlreadyOpen {
                open: open.question_id(),
            });
        }
        self.index_of(id)?;
        self.edit_serial += 1;
        let ticket = EditTicket {
            id,
            serial: self.edit_serial,
        };
        self.editing = Some(ticket.clone());
        debug!(question_id = %id, "edit opened");
        Ok(ticket)
    }

    /// Applies the edit described by `ticket` and closes it.
    ///
    /// A draft that fails validation leaves the edit open so it can be
    /// corrected and committed again.
    pub fn commit_edit(&mut self, ticket: &EditTicket, draft: &QuestionDraft) -> Result<()> {
        match &self.editing {
            None => return Err(StoreError::NoEditInProgress),
            Some(open) if open != ticket => return Err(StoreError::StaleEdit(ticket.id)),
            Some(_) => {}
        }
        self.replace(ticket.id, draft)?;
        self.editing = None;
        debug!(question_id = %ticket.id, "edit committed");
        Ok(())
    }

    /// Closes the open edit without changing the question.
    pub fn cancel_edit(&mut self) -> Option<QuestionId> {
        let closed = self.editing.take().map(|ticket| ticket.id);
        if let Some(id) = closed {
            debug!(question_id = %id, "edit cancelled");
        }
        closed
    }

    /// The question currently open for editing.
    pub fn editing(&self) -> Option<QuestionId> {
        self.editing.as_ref().map(EditTicket::question_id)
    }

    /// Immutable copy of the current list.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.questions.clone())
    }

    fn allocate_id(&mut self) -> QuestionId {
        self.next_id += 1;
        QuestionId::from_raw(self.next_id)
    }

    fn index_of(&self, id: QuestionId) -> Result<usize> {
        self.position(id).ok_or(StoreError::UnknownQuestion(id))
    }

    fn ensure_not_editing(&self, id: QuestionId) -> Result<()> {
        match self.editing() {
            Some(open) if open == id => Err(StoreError::EditInProgress(id)),
            _ => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a QuestionStore {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
