use std::fmt;

/// Stable identifier of a question within one question store.
///
/// Identifiers are handed out by the store when a question is created and
/// survive edits and the removal of other questions. They carry no meaning
/// beyond identity; the display number of a question is its position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
