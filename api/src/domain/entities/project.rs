//! Portfolio project entity

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A past wedding shown in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Derived from the title, not guaranteed unique
    pub slug: String,
    /// URI or inline data URI
    pub cover_image: String,
    pub location: String,
    /// Free text, e.g. "12 October 2023"
    pub date: String,
    #[serde(default)]
    pub theme_tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl PortfolioProject {
    pub fn has_theme(&self, theme: &str) -> bool {
        self.theme_tags.iter().any(|t| t == theme)
    }
}

/// Operator input for a new project
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub cover_image: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub theme_tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub vendors: Option<Vec<String>>,
    pub is_featured: Option<bool>,
}

/// Lowercase the title and collapse each whitespace run into a dash
pub fn slugify(title: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
    re.replace_all(&title.to_lowercase(), "-").into_owned()
}
