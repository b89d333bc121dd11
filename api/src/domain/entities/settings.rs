//! Site settings singleton

use serde::{Deserialize, Serialize};

/// Brand and contact channels shared by every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub brand_name: String,
    /// International format without '+', e.g. "6281234567890"
    pub whatsapp_number: String,
    pub admin_email: String,
    pub address: String,
    #[serde(default)]
    pub budget_ranges: Vec<String>,
}
