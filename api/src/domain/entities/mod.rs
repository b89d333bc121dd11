//! Domain entities
//!
//! Passive records stored as camelCase JSON documents.
//! These are separate from the SeaORM table model in the `entity` module.

pub mod inquiry;
pub mod package;
pub mod project;
pub mod settings;
pub mod site_content;
pub mod testimonial;

pub use inquiry::{Inquiry, InquiryStatus, NewInquiry};
pub use package::{PackageDraft, ServicePackage};
pub use project::{slugify, PortfolioProject, ProjectDraft};
pub use settings::SiteSettings;
pub use site_content::{
    AboutPage, CtaSection, FaqItem, HeroSection, PageSection, ProcessStep, ServicesPage,
    SignatureIcon, SignatureStyle, SiteContent,
};
pub use testimonial::{Testimonial, TestimonialDraft};
