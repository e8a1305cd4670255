use serde::{Deserialize, Serialize};

/// A single tagged mention of an entity within a transcript.
///
/// Spans are produced by the tagging adapter with sub-word tokens already
/// merged into whole mentions, so `text` is always a complete surface string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The surface string of the mention - immutable, never rewritten
    pub text: String,
    /// Raw label from the tagging model (e.g. "PER", "B-ORG", "I-LOC")
    pub label: String,
}

impl Span {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Category this span belongs to, or `None` if the label carries no
    /// recognized marker.
    pub fn category(&self) -> Option<EntityCategory> {
        EntityCategory::from_label(&self.label)
    }
}

/// The three recognized entity classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
}

impl EntityCategory {
    /// Marker substring for this category in the model's label vocabulary.
    pub fn marker(&self) -> &'static str {
        match self {
            EntityCategory::Person => "PER",
            EntityCategory::Organization => "ORG",
            EntityCategory::Location => "LOC",
        }
    }

    /// Resolve a raw label to a category by case-sensitive substring match.
    ///
    /// The substring check covers both label schemes the tagging model can
    /// emit: merged per-mention labels ("PER") and per-token labels with a
    /// continuation prefix ("B-PER", "I-PER"). Checked in person,
    /// organization, location order; a label that pathologically contains
    /// more than one marker resolves to the first match only.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.contains(EntityCategory::Person.marker()) {
            Some(EntityCategory::Person)
        } else if label.contains(EntityCategory::Organization.marker()) {
            Some(EntityCategory::Organization)
        } else if label.contains(EntityCategory::Location.marker()) {
            Some(EntityCategory::Location)
        } else {
            None
        }
    }
}
