//! Fixed vocabularies used by exams and questions.
//!
//! Grade levels and terms follow the Brazilian school calendar: nine years
//! of Ensino Fundamental, three years of Ensino Médio, and four bimesters.
//! Each value round-trips through its literal label, which is also what the
//! exported document prints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One of the four fixed multiple-choice option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in display order.
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }

    /// Zero-based slot of this label inside a four-option set.
    pub fn index(&self) -> usize {
        match self {
            OptionLabel::A => 0,
            OptionLabel::B => 1,
            OptionLabel::C => 2,
            OptionLabel::D => 3,
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(OptionLabel::A),
            "B" => Ok(OptionLabel::B),
            "C" => Ok(OptionLabel::C),
            "D" => Ok(OptionLabel::D),
            _ => Err(ModelError::UnknownOptionLabel(s.to_string())),
        }
    }
}

/// Discriminator chosen on the input surface before a question is validated.
///
/// Serialized as its snake_case name; deserialization also accepts the
/// Portuguese names and the short form `mc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Essay,
    MultipleChoice,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Essay => "essay",
            QuestionKind::MultipleChoice => "multiple_choice",
        }
    }

    /// Label shown to teachers.
    pub fn display_label(&self) -> &'static str {
        match self {
            QuestionKind::Essay => "Dissertativa",
            QuestionKind::MultipleChoice => "Múltipla Escolha",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "essay" | "dissertativa" => Ok(QuestionKind::Essay),
            "multiple_choice" | "mc" | "múltipla_escolha" | "multipla_escolha" => {
                Ok(QuestionKind::MultipleChoice)
            }
            _ => Err(ModelError::UnknownQuestionKind(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for QuestionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Class/grade the exam is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradeLevel {
    Fundamental1,
    Fundamental2,
    Fundamental3,
    Fundamental4,
    Fundamental5,
    Fundamental6,
    Fundamental7,
    Fundamental8,
    Fundamental9,
    Medio1,
    Medio2,
    Medio3,
}

impl GradeLevel {
    /// All grade levels in the order the input surface offers them.
    pub const ALL: [GradeLevel; 12] = [
        GradeLevel::Fundamental1,
        GradeLevel::Fundamental2,
        GradeLevel::Fundamental3,
        GradeLevel::Fundamental4,
        GradeLevel::Fundamental5,
        GradeLevel::Fundamental6,
        GradeLevel::Fundamental7,
        GradeLevel::Fundamental8,
        GradeLevel::Fundamental9,
        GradeLevel::Medio1,
        GradeLevel::Medio2,
        GradeLevel::Medio3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Fundamental1 => "1º ano - Fundamental",
            GradeLevel::Fundamental2 => "2º ano - Fundamental",
            GradeLevel::Fundamental3 => "3º ano - Fundamental",
            GradeLevel::Fundamental4 => "4º ano - Fundamental",
            GradeLevel::Fundamental5 => "5º ano - Fundamental",
            GradeLevel::Fundamental6 => "6º ano - Fundamental",
            GradeLevel::Fundamental7 => "7º ano - Fundamental",
            GradeLevel::Fundamental8 => "8º ano - Fundamental",
            GradeLevel::Fundamental9 => "9º ano - Fundamental",
            GradeLevel::Medio1 => "1º ano - Médio",
            GradeLevel::Medio2 => "2º ano - Médio",
            GradeLevel::Medio3 => "3º ano - Médio",
        }
    }

    /// Returns true for the three Ensino Médio years.
    pub fn is_high_school(&self) -> bool {
        matches!(
            self,
            GradeLevel::Medio1 | GradeLevel::Medio2 | GradeLevel::Medio3
        )
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GradeLevel {
    type Err = ModelError;

    /// Parses the literal label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        GradeLevel::ALL
            .into_iter()
            .find(|grade| grade.label().to_lowercase() == wanted)
            .ok_or_else(|| ModelError::UnknownGradeLevel(s.to_string()))
    }
}

impl Serialize for GradeLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for GradeLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// School term (bimester).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    First,
    Second,
    Third,
    Fourth,
}

impl Term {
    pub const ALL: [Term; 4] = [Term::First, Term::Second, Term::Third, Term::Fourth];

    pub fn label(&self) -> &'static str {
        match self {
            Term::First => "1º Bimestre",
            Term::Second => "2º Bimestre",
            Term::Third => "3º Bimestre",
            Term::Fourth => "4º Bimestre",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Term {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Term::ALL
            .into_iter()
            .find(|term| term.label().to_lowercase() == wanted)
            .ok_or_else(|| ModelError::UnknownTerm(s.to_string()))
    }
}

impl Serialize for Term {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_labels_are_unique() {
        let mut labels: Vec<&str> = GradeLevel::ALL.iter().map(GradeLevel::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn option_label_index_matches_order() {
        for (idx, label) in OptionLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), idx);
        }
    }
}
