//! Inquiry (lead) entity
//!
//! Created once by a public submission. Only the status changes afterwards,
//! and only through the operator back-office.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Triage state of an inquiry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryStatus::New => write!(f, "new"),
            InquiryStatus::Contacted => write!(f, "contacted"),
            InquiryStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(InquiryStatus::New),
            "contacted" => Ok(InquiryStatus::Contacted),
            "closed" => Ok(InquiryStatus::Closed),
            _ => Err(format!("Unknown inquiry status: {}", s)),
        }
    }
}

/// A stored lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Approximate date as typed by the visitor; empty when not fixed yet
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub service_interested: Vec<String>,
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Case-insensitive match against name or email
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}

/// A visitor submission from the contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub service_interested: Vec<String>,
    pub message: String,
}

impl NewInquiry {
    /// Required contact fields must be present
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{} is required", field)));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => {
                return Err(DomainError::Validation(format!(
                    "'{}' is not a valid email address",
                    email
                )))
            }
        }

        Ok(())
    }

    /// Convert into an inquiry awaiting a store id and creation time
    pub fn into_inquiry(self) -> Inquiry {
        Inquiry {
            id: String::new(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            event_date: self.event_date.trim().to_string(),
            budget_range: self.budget_range,
            service_interested: self.service_interested,
            message: self.message,
            status: InquiryStatus::New,
            created_at: DateTime::<Utc>::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewInquiry {
        NewInquiry {
            name: "Rina".to_string(),
            email: "rina@example.com".to_string(),
            phone: "0812345678".to_string(),
            message: "Garden wedding for 150 guests".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("Contacted".parse::<InquiryStatus>(), Ok(InquiryStatus::Contacted));
        assert_eq!(InquiryStatus::Closed.to_string(), "closed");
        assert!("archived".parse::<InquiryStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&InquiryStatus::New).unwrap();
        assert_eq!(json, "\"new\"");
    }

    #[test]
    fn valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn missing_message_is_rejected() {
        let inquiry = NewInquiry {
            message: "   ".to_string(),
            ..submission()
        };
        let err = inquiry.validate().unwrap_err();
        assert!(err.to_string().contains("message is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let inquiry = NewInquiry {
            email: "rina.example.com".to_string(),
            ..submission()
        };
        assert!(inquiry.validate().is_err());
    }

    #[test]
    fn into_inquiry_starts_as_new() {
        let inquiry = submission().into_inquiry();
        assert_eq!(inquiry.status, InquiryStatus::New);
        assert!(inquiry.id.is_empty());
    }

    #[test]
    fn query_matches_name_or_email() {
        let inquiry = NewInquiry {
            name: "Rina Wijaya".to_string(),
            ..submission()
        }
        .into_inquiry();
        assert!(inquiry.matches_query("wijaya"));
        assert!(inquiry.matches_query("EXAMPLE.COM"));
        assert!(!inquiry.matches_query("budi"));
    }

    #[test]
    fn stored_document_without_optional_fields_decodes() {
        let json = r#"{
            "name": "Rina",
            "email": "rina@example.com",
            "phone": "0812",
            "message": "Hi",
            "createdAt": "2024-01-05T10:00:00Z"
        }"#;
        let inquiry: Inquiry = serde_json::from_str(json).unwrap();
        assert_eq!(inquiry.status, InquiryStatus::New);
        assert!(inquiry.service_interested.is_empty());
    }
}
