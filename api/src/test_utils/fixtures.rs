//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    slugify, Inquiry, InquiryStatus, NewInquiry, PortfolioProject, ServicePackage, SiteSettings,
    Testimonial,
};

/// Create a test package with a specific id and sort key
pub fn test_package(id: &str, order: i32) -> ServicePackage {
    ServicePackage {
        id: id.to_string(),
        name: format!("Package {}", id),
        price_from: "IDR 10.000.000".to_string(),
        features: vec!["Venue scouting".to_string(), "Vendor booking".to_string()],
        is_featured: false,
        order,
    }
}

/// Create a test project; the slug is derived from the title
pub fn test_project(id: &str, title: &str) -> PortfolioProject {
    PortfolioProject {
        id: id.to_string(),
        title: title.to_string(),
        slug: slugify(title),
        cover_image: "https://picsum.photos/seed/test/800/600".to_string(),
        location: "Bali".to_string(),
        date: "1 June 2024".to_string(),
        theme_tags: vec!["Outdoor".to_string()],
        description: "A test wedding".to_string(),
        vendors: vec!["Test Florist".to_string()],
        is_featured: None,
    }
}

/// Create a test project tagged with the given themes
pub fn test_project_tagged(id: &str, tags: &[&str]) -> PortfolioProject {
    PortfolioProject {
        theme_tags: tags.iter().map(|t| t.to_string()).collect(),
        ..test_project(id, &format!("Wedding {}", id))
    }
}

/// Create a five-star test testimonial
pub fn test_testimonial(id: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: format!("Client {}", id),
        role: "Bride".to_string(),
        rating: 5,
        quote: "Everything went perfectly".to_string(),
        event_type: "Garden Wedding".to_string(),
    }
}

/// Create a valid visitor submission
pub fn test_new_inquiry() -> NewInquiry {
    NewInquiry {
        name: "Rina Wijaya".to_string(),
        email: "rina@example.com".to_string(),
        phone: "081234567890".to_string(),
        event_date: "2025-05-17".to_string(),
        budget_range: "IDR 100 - 250 Juta".to_string(),
        service_interested: vec!["Full Planning Service".to_string()],
        message: "Garden wedding for 150 guests".to_string(),
    }
}

/// Create a stored inquiry with a specific id
pub fn test_inquiry(id: &str) -> Inquiry {
    Inquiry {
        id: id.to_string(),
        status: InquiryStatus::New,
        created_at: Utc::now(),
        ..test_new_inquiry().into_inquiry()
    }
}

/// Create a stored inquiry created at an RFC 3339 timestamp
pub fn test_inquiry_at(id: &str, created_at: &str) -> Inquiry {
    Inquiry {
        created_at: DateTime::parse_from_rfc3339(created_at)
            .unwrap()
            .with_timezone(&Utc),
        ..test_inquiry(id)
    }
}

/// Create test settings with a specific WhatsApp number
pub fn test_settings(whatsapp_number: &str) -> SiteSettings {
    SiteSettings {
        brand_name: "Test Weddings".to_string(),
        whatsapp_number: whatsapp_number.to_string(),
        admin_email: "ops@example.com".to_string(),
        address: "Jl. Test 1, Jakarta".to_string(),
        budget_ranges: vec!["< IDR 100 Juta".to_string()],
    }
}
