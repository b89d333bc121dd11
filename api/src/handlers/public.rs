//! Public site handlers
//!
//! Read-only endpoints for the marketing pages. They always answer with
//! usable content; the `x-content-source` header says where it came from.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::app::page_service::filter_by_theme;
use crate::app::{AboutView, ContactView, Fetched, HomeView, PortfolioView, ServicesView};
use crate::domain::entities::{
    PortfolioProject, ServicePackage, SiteContent, SiteSettings, Testimonial,
};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for project listings
#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    /// Theme tag filter; "All" or absent keeps every project
    pub theme: Option<String>,
}

/// Query parameters for the contact page
#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    /// Package name to preselect
    pub package: Option<String>,
}

/// GET /site/content
pub async fn get_site_content(State(state): State<AppState>) -> Fetched<SiteContent> {
    state.content.fetch_singleton::<SiteContent>().await
}

/// GET /site/settings
pub async fn get_site_settings(State(state): State<AppState>) -> Fetched<SiteSettings> {
    state.content.fetch_singleton::<SiteSettings>().await
}

/// GET /packages
pub async fn list_packages(State(state): State<AppState>) -> Fetched<Vec<ServicePackage>> {
    state.content.fetch_collection::<ServicePackage>().await
}

/// GET /projects?theme=
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Fetched<Vec<PortfolioProject>> {
    state
        .content
        .fetch_collection::<PortfolioProject>()
        .await
        .map(|projects| filter_by_theme(projects, query.theme.as_deref()))
}

/// GET /projects/:slug
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Fetched<PortfolioProject>, AppError> {
    let fetched = state.pages.project(&slug).await;
    match fetched.data {
        Some(project) => Ok(Fetched {
            data: project,
            source: fetched.source,
        }),
        None => Err(AppError::NotFound(format!("project '{}'", slug))),
    }
}

/// GET /testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> Fetched<Vec<Testimonial>> {
    state.content.fetch_collection::<Testimonial>().await
}

/// GET /pages/home
pub async fn home_page(State(state): State<AppState>) -> Fetched<HomeView> {
    state.pages.home().await
}

/// GET /pages/portfolio?theme=
pub async fn portfolio_page(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Fetched<PortfolioView> {
    state.pages.portfolio(query.theme.as_deref()).await
}

/// GET /pages/services
pub async fn services_page(State(state): State<AppState>) -> Fetched<ServicesView> {
    state.pages.services().await
}

/// GET /pages/about
pub async fn about_page(State(state): State<AppState>) -> Fetched<AboutView> {
    state.pages.about().await
}

/// GET /pages/contact?package=
pub async fn contact_page(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Fetched<ContactView> {
    state.pages.contact(query.package.as_deref()).await
}
