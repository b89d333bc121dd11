//! Service package entity

use serde::{Deserialize, Serialize};

/// A priced planning package shown on the packages page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Display string, e.g. "IDR 75.000.000"
    pub price_from: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    /// Sort key, ascending. Need not be contiguous.
    pub order: i32,
}

/// Operator input for a new package; missing fields get placeholders
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDraft {
    pub name: Option<String>,
    pub price_from: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
}
