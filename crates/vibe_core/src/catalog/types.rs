use serde::{Deserialize, Serialize};

/// A selectable trait tag with a fixed score contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitOption {
    /// Unique within its category; also the key used in selections
    pub text: String,
    pub impact: i32,
    #[serde(default)]
    pub description: String,
}

impl TraitOption {
    pub fn new(text: impl Into<String>, impact: i32, description: impl Into<String>) -> Self {
        Self { text: text.into(), impact, description: description.into() }
    }
}

/// Themed group of independent trait options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub options: Vec<TraitOption>,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), options: Vec::new() }
    }

    pub fn with_option(mut self, option: TraitOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn option(&self, text: &str) -> Option<&TraitOption> {
        self.options.iter().find(|o| o.text == text)
    }
}
