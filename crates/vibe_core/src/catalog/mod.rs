//! Trait Catalog
//!
//! Read-only table of quiz categories and their weighted options. The
//! built-in "Life Vibes" catalog is used unless a JSON catalog is supplied.

pub mod types;

pub use types::{Category, TraitOption};

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCatalog {
    categories: Vec<Category>,
}

impl Default for TraitCatalog {
    fn default() -> Self {
        Self::life_vibes()
    }
}

impl TraitCatalog {
    /// Build a catalog from categories, rejecting duplicate keys
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The stock four-category catalog
    pub fn life_vibes() -> Self {
        let categories = vec![
            Category::new("personality", "Personality Check")
                .with_option(TraitOption::new(
                    "Main Character Energy",
                    15,
                    "You're the star of your own show",
                ))
                .with_option(TraitOption::new(
                    "Chaotic Good",
                    12,
                    "Breaking rules for the right reasons",
                ))
                .with_option(TraitOption::new("Certified Overthinker", 8, "Your brain never stops"))
                .with_option(TraitOption::new(
                    "Professional Procrastinator",
                    5,
                    "Why do today what you can do tomorrow?",
                )),
            Category::new("lifestyle", "Life Choices")
                .with_option(TraitOption::new("Coffee Addict", 10, "Running on caffeine and chaos"))
                .with_option(TraitOption::new("Night Owl", 8, "3 AM is prime time"))
                .with_option(TraitOption::new("Gym Enthusiast", 12, "Gains over everything"))
                .with_option(TraitOption::new("Plant Parent", 7, "Your succulents are thriving")),
            Category::new("social", "Social Life")
                .with_option(TraitOption::new("Party Animal", 10, "Weekend? What's a weekend?"))
                .with_option(TraitOption::new("Meme Lord", 8, "Your group chat game is strong"))
                .with_option(TraitOption::new("Social Butterfly", 12, "Everyone's best friend"))
                .with_option(TraitOption::new("Netflix Marathon Pro", 7, "One more episode...")),
            Category::new("adventures", "Life Adventures")
                .with_option(TraitOption::new(
                    "World Traveler",
                    15,
                    "Passport stamps are your badges",
                ))
                .with_option(TraitOption::new("Food Explorer", 10, "Will try anything once"))
                .with_option(TraitOption::new("Spontaneous Spirit", 12, "Plans are overrated"))
                .with_option(TraitOption::new("Creative Soul", 8, "Life is your canvas")),
        ];

        Self { categories }
    }

    /// Parse a catalog from its JSON form: `{"categories": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: TraitCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::IoError(format!("Failed to read catalog '{}': {}", path.display(), e))
        })?;
        let catalog = Self::from_json(&content)?;
        log::info!("Loaded catalog with {} categories from {:?}", catalog.categories.len(), path);
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(CoreError::ValidationError("catalog has no categories".to_string()));
        }

        let mut ids = HashSet::new();
        for category in &self.categories {
            if category.id.is_empty() {
                return Err(CoreError::ValidationError("category id is empty".to_string()));
            }
            if !ids.insert(category.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }

            let mut texts = HashSet::new();
            for option in &category.options {
                if !texts.insert(option.text.as_str()) {
                    return Err(CoreError::ValidationError(format!(
                        "duplicate option '{}' in category '{}'",
                        option.text, category.id
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn option(&self, category_id: &str, option_text: &str) -> Option<&TraitOption> {
        self.category(category_id).and_then(|c| c.option(option_text))
    }

    pub fn contains(&self, category_id: &str, option_text: &str) -> bool {
        self.option(category_id, option_text).is_some()
    }

    /// Impact weight of an option, or `NotFound` naming the missing key
    pub fn impact(&self, category_id: &str, option_text: &str) -> Result<i32> {
        let category = self
            .category(category_id)
            .ok_or_else(|| CoreError::NotFound(format!("Category not found: {}", category_id)))?;

        category.option(option_text).map(|o| o.impact).ok_or_else(|| {
            CoreError::NotFound(format!("Option not found: {}/{}", category_id, option_text))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_vibes_shape() {
        let catalog = TraitCatalog::life_vibes();
        assert!(catalog.validate().is_ok());

        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["personality", "lifestyle", "social", "adventures"]);
        assert!(catalog.categories().iter().all(|c| c.options.len() == 4));
    }

    #[test]
    fn test_impact_lookup() {
        let catalog = TraitCatalog::life_vibes();
        assert_eq!(catalog.impact("personality", "Main Character Energy"), Ok(15));
        assert_eq!(catalog.impact("social", "Netflix Marathon Pro"), Ok(7));
        assert_eq!(catalog.impact("adventures", "World Traveler"), Ok(15));
    }

    #[test]
    fn test_impact_lookup_missing() {
        let catalog = TraitCatalog::life_vibes();
        assert!(matches!(catalog.impact("music", "Jazz"), Err(CoreError::NotFound(_))));
        assert!(matches!(catalog.impact("personality", "Jazz"), Err(CoreError::NotFound(_))));
        assert!(!catalog.contains("personality", "Jazz"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [
                {
                    "id": "music",
                    "label": "Music Taste",
                    "options": [
                        { "text": "Vinyl Collector", "impact": 9, "description": "Warm sound only" },
                        { "text": "Playlist Curator", "impact": 6 }
                    ]
                }
            ]
        }"#;

        let catalog = TraitCatalog::from_json(json).unwrap();
        assert_eq!(catalog.impact("music", "Vinyl Collector"), Ok(9));
        assert_eq!(catalog.option("music", "Playlist Curator").unwrap().description, "");
    }

    #[test]
    fn test_validation_rejects_duplicates() {
        let duplicate_ids = vec![Category::new("a", "A"), Category::new("a", "Again")];
        assert!(matches!(TraitCatalog::new(duplicate_ids), Err(CoreError::ValidationError(_))));

        let duplicate_options = vec![Category::new("a", "A")
            .with_option(TraitOption::new("x", 1, ""))
            .with_option(TraitOption::new("x", 2, ""))];
        assert!(TraitCatalog::new(duplicate_options).is_err());

        assert!(TraitCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(TraitCatalog::from_json("{ nope"), Err(CoreError::ParseError(_))));
    }
}
