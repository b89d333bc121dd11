//! Page service
//!
//! Composes the public page views from facade reads. Live documents written
//! before a page section existed are completed here, one section at a time,
//! from the default catalog.

use std::sync::Arc;

use serde::Serialize;

use super::content_service::{ContentService, Fetched};
use crate::domain::defaults;
use crate::domain::entities::{
    AboutPage, FaqItem, PortfolioProject, ProcessStep, ServicePackage, ServicesPage,
    SignatureStyle, SiteContent, SiteSettings, Testimonial,
};
use crate::domain::ports::DocumentStore;

/// Theme filters offered on the portfolio page
pub const PORTFOLIO_FILTERS: [&str; 5] = [
    "All",
    "Outdoor",
    "Ballroom",
    "Intimate",
    "Traditional-Modern",
];
pub const ALL_THEMES: &str = "All";
pub const FEATURED_PROJECT_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub content: SiteContent,
    pub featured_projects: Vec<PortfolioProject>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub filters: Vec<String>,
    pub active_filter: String,
    pub projects: Vec<PortfolioProject>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesView {
    pub page: ServicesPage,
    pub process: Vec<ProcessStep>,
    pub faq: Vec<FaqItem>,
    pub packages: Vec<ServicePackage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub page: AboutPage,
    pub signature_styles: Vec<SignatureStyle>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub settings: SiteSettings,
    pub budget_ranges: Vec<String>,
    /// Package names a visitor can pick from
    pub services: Vec<String>,
    /// Services ticked when the form opens
    pub preselected: Vec<String>,
}

/// Keep projects tagged with `theme`; `All` or no theme keeps everything
pub fn filter_by_theme(
    projects: Vec<PortfolioProject>,
    theme: Option<&str>,
) -> Vec<PortfolioProject> {
    match theme.map(str::trim) {
        None | Some("") | Some(ALL_THEMES) => projects,
        Some(theme) => projects.into_iter().filter(|p| p.has_theme(theme)).collect(),
    }
}

/// Service composing public page views
pub struct PageService<S>
where
    S: DocumentStore + ?Sized,
{
    content: Arc<ContentService<S>>,
}

impl<S> PageService<S>
where
    S: DocumentStore + ?Sized,
{
    pub fn new(content: Arc<ContentService<S>>) -> Self {
        Self { content }
    }

    pub async fn home(&self) -> Fetched<HomeView> {
        let (content, projects, testimonials) = tokio::join!(
            self.content.fetch_singleton::<SiteContent>(),
            self.content.fetch_collection::<PortfolioProject>(),
            self.content.fetch_collection::<Testimonial>(),
        );

        let source = content
            .source
            .combine(projects.source)
            .combine(testimonials.source);

        let mut featured_projects = projects.data;
        featured_projects.truncate(FEATURED_PROJECT_COUNT);

        Fetched {
            data: HomeView {
                content: content.data,
                featured_projects,
                testimonials: testimonials.data,
            },
            source,
        }
    }

    pub async fn portfolio(&self, theme: Option<&str>) -> Fetched<PortfolioView> {
        let active_filter = match theme.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => ALL_THEMES.to_string(),
        };

        self.content
            .fetch_collection::<PortfolioProject>()
            .await
            .map(|projects| PortfolioView {
                filters: PORTFOLIO_FILTERS.iter().map(|f| f.to_string()).collect(),
                projects: filter_by_theme(projects, Some(&active_filter)),
                active_filter,
            })
    }

    /// First project with this slug. Slugs are not unique.
    pub async fn project(&self, slug: &str) -> Fetched<Option<PortfolioProject>> {
        self.content
            .fetch_collection::<PortfolioProject>()
            .await
            .map(|projects| projects.into_iter().find(|p| p.slug == slug))
    }

    pub async fn services(&self) -> Fetched<ServicesView> {
        let (content, packages) = tokio::join!(
            self.content.fetch_singleton::<SiteContent>(),
            self.content.fetch_collection::<ServicePackage>(),
        );
        let source = content.source.combine(packages.source);
        let content = content.data;

        let (process, faq) = match (content.process, content.faq) {
            (Some(process), Some(faq)) => (process, faq),
            (process, faq) => {
                let fallback = defaults::site_content();
                (
                    process.or(fallback.process).unwrap_or_default(),
                    faq.or(fallback.faq).unwrap_or_default(),
                )
            }
        };

        Fetched {
            data: ServicesView {
                page: content.services_page.unwrap_or_else(defaults::services_page),
                process,
                faq,
                packages: packages.data,
            },
            source,
        }
    }

    pub async fn about(&self) -> Fetched<AboutView> {
        self.content
            .fetch_singleton::<SiteContent>()
            .await
            .map(|content| AboutView {
                page: content.about_page.unwrap_or_else(defaults::about_page),
                signature_styles: content.signature_styles,
            })
    }

    /// Contact form data; `package` preselects a service, e.g. from a
    /// package card's link
    pub async fn contact(&self, package: Option<&str>) -> Fetched<ContactView> {
        let (settings, packages) = tokio::join!(
            self.content.fetch_singleton::<SiteSettings>(),
            self.content.fetch_collection::<ServicePackage>(),
        );
        let source = settings.source.combine(packages.source);

        let preselected = package
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| vec![p.to_string()])
            .unwrap_or_default();

        Fetched {
            data: ContactView {
                budget_ranges: settings.data.budget_ranges.clone(),
                settings: settings.data,
                services: packages.data.into_iter().map(|p| p.name).collect(),
                preselected,
            },
            source,
        }
    }
}
