use serde::{Deserialize, Serialize};

use super::EntityCategory;

/// Deduplicated entity mentions grouped by category.
///
/// Each sequence holds unique surface strings in first-seen order. Built
/// fresh per uploaded recording and discarded after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedEntities {
    pub persons: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

impl GroupedEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text to the given category unless it is already present.
    ///
    /// Returns true if the text was appended. Idempotent per unique text
    /// within a category.
    pub fn insert(&mut self, category: EntityCategory, text: &str) -> bool {
        let list = self.category_mut(category);
        if list.iter().any(|t| t == text) {
            return false;
        }
        list.push(text.to_string());
        true
    }

    /// The sequence for a category.
    pub fn category(&self, category: EntityCategory) -> &[String] {
        match category {
            EntityCategory::Person => &self.persons,
            EntityCategory::Organization => &self.organizations,
            EntityCategory::Location => &self.locations,
        }
    }

    fn category_mut(&mut self, category: EntityCategory) -> &mut Vec<String> {
        match category {
            EntityCategory::Person => &mut self.persons,
            EntityCategory::Organization => &mut self.organizations,
            EntityCategory::Location => &mut self.locations,
        }
    }

    /// Total number of unique mentions across all categories.
    pub fn len(&self) -> usize {
        self.persons.len() + self.organizations.len() + self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
