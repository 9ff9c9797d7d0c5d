//! Selection State
//!
//! Sparse `category id -> (option text -> selected)` mapping built up as the
//! user toggles options. A missing entry reads as unselected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    categories: BTreeMap<String, BTreeMap<String, bool>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for an option and return its new value
    pub fn toggle(&mut self, category_id: &str, option_text: &str) -> bool {
        let flag = self
            .categories
            .entry(category_id.to_string())
            .or_default()
            .entry(option_text.to_string())
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn is_selected(&self, category_id: &str, option_text: &str) -> bool {
        self.categories
            .get(category_id)
            .and_then(|options| options.get(option_text))
            .copied()
            .unwrap_or(false)
    }

    /// False once any category has been touched, even if every flag in it
    /// has since been toggled back off
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Selected `(category id, option text)` pairs
    pub fn selected(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|(category_id, options)| {
            options
                .iter()
                .filter(|(_, selected)| **selected)
                .map(move |(text, _)| (category_id.as_str(), text.as_str()))
        })
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_creates_entry() {
        let mut selections = SelectionState::new();
        assert!(!selections.is_selected("personality", "Chaotic Good"));

        assert!(selections.toggle("personality", "Chaotic Good"));
        assert!(selections.is_selected("personality", "Chaotic Good"));
        assert!(!selections.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let mut selections = SelectionState::new();
        selections.toggle("social", "Meme Lord");
        let before = selections.is_selected("social", "Meme Lord");

        selections.toggle("social", "Meme Lord");
        selections.toggle("social", "Meme Lord");
        assert_eq!(selections.is_selected("social", "Meme Lord"), before);
    }

    #[test]
    fn test_toggled_off_category_still_counts() {
        let mut selections = SelectionState::new();
        selections.toggle("lifestyle", "Night Owl");
        selections.toggle("lifestyle", "Night Owl");

        assert!(!selections.is_empty());
        assert_eq!(selections.selected_count(), 0);
    }

    #[test]
    fn test_clear_returns_to_initial() {
        let mut selections = SelectionState::new();
        selections.toggle("lifestyle", "Coffee Addict");
        selections.toggle("adventures", "World Traveler");
        selections.toggle("adventures", "World Traveler");

        selections.clear();
        assert_eq!(selections, SelectionState::new());
        assert!(selections.is_empty());
    }

    #[test]
    fn test_selected_pairs() {
        let mut selections = SelectionState::new();
        selections.toggle("personality", "Main Character Energy");
        selections.toggle("social", "Party Animal");
        selections.toggle("social", "Meme Lord");
        selections.toggle("social", "Meme Lord");

        let pairs: Vec<(&str, &str)> = selections.selected().collect();
        assert_eq!(
            pairs,
            vec![("personality", "Main Character Energy"), ("social", "Party Animal")]
        );
    }

    #[test]
    fn test_json_shape() {
        let mut selections = SelectionState::new();
        selections.toggle("personality", "Main Character Energy");

        let json = serde_json::to_value(&selections).unwrap();
        assert_eq!(json, serde_json::json!({ "personality": { "Main Character Energy": true } }));
    }
}
