//! Testimonial entity

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A client review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// e.g. "Bride", "Mother of Groom"
    pub role: String,
    pub rating: u8,
    pub quote: String,
    pub event_type: String,
}

impl Testimonial {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(DomainError::Validation(format!(
                "rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, self.rating
            )));
        }
        Ok(())
    }
}

/// Operator input for a new testimonial
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub name: Option<String>,
    pub role: Option<String>,
    pub rating: Option<u8>,
    pub quote: Option<String>,
    pub event_type: Option<String>,
}
