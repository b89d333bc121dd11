//! Site content singleton
//!
//! One logical instance exists at a time; an edit replaces the whole document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub background_image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureIcon {
    Heart,
    Clock,
    Star,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStyle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon_name: SignatureIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub header: PageSection,
    pub section1: PageSection,
    pub section2: PageSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPage {
    pub header: PageSection,
    pub story: PageSection,
}

/// Copy for the home, services and about pages
///
/// Documents written before the process/FAQ and page sections existed still
/// decode with those sections `None`. Such a document is returned as stored;
/// consumers pick per-section defaults. A present but empty list is an edit
/// and stays empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: HeroSection,
    pub signature_styles: Vec<SignatureStyle>,
    pub cta_section: CtaSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_page: Option<ServicesPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_page: Option<AboutPage>,
}
