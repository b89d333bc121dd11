//! Operator back-office handlers
//!
//! Every route here sits behind `operator_middleware`. Reads include their
//! source in the body so the dashboard can flag default content. Writes
//! surface store failures as errors and never report success they did not get.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{Fetched, InquiryFilter};
use crate::auth::Operator;
use crate::domain::entities::{
    Inquiry, InquiryStatus, PackageDraft, PortfolioProject, ProjectDraft, ServicePackage,
    SiteContent, SiteSettings, Testimonial, TestimonialDraft,
};
use crate::error::AppError;
use crate::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub operator: bool,
}

/// Request to change an inquiry's status
#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatusRequest {
    pub status: InquiryStatus,
}

// ============================================================================
// Session
// ============================================================================

/// GET /admin/session
pub async fn get_session(Extension(_operator): Extension<Operator>) -> Json<SessionResponse> {
    Json(SessionResponse { operator: true })
}

// ============================================================================
// Singletons
// ============================================================================

/// GET /admin/content
pub async fn admin_get_content(State(state): State<AppState>) -> Json<Fetched<SiteContent>> {
    Json(state.content.fetch_singleton::<SiteContent>().await)
}

/// PUT /admin/content
///
/// Replaces the whole document. Concurrent editors: last write wins.
pub async fn admin_put_content(
    State(state): State<AppState>,
    Json(content): Json<SiteContent>,
) -> Result<Json<SiteContent>, AppError> {
    state.content.save_singleton(&content).await?;
    Ok(Json(content))
}

/// GET /admin/settings
pub async fn admin_get_settings(State(state): State<AppState>) -> Json<Fetched<SiteSettings>> {
    Json(state.content.fetch_singleton::<SiteSettings>().await)
}

/// PUT /admin/settings
pub async fn admin_put_settings(
    State(state): State<AppState>,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<SiteSettings>, AppError> {
    state.content.save_singleton(&settings).await?;
    Ok(Json(settings))
}

// ============================================================================
// Packages
// ============================================================================

/// GET /admin/packages
pub async fn admin_list_packages(
    State(state): State<AppState>,
) -> Json<Fetched<Vec<ServicePackage>>> {
    Json(state.content.fetch_collection::<ServicePackage>().await)
}

/// POST /admin/packages
pub async fn admin_create_package(
    State(state): State<AppState>,
    Json(draft): Json<PackageDraft>,
) -> Result<(StatusCode, Json<ServicePackage>), AppError> {
    let package = state.catalog.create_package(draft).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /admin/packages/:id
pub async fn admin_put_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(package): Json<ServicePackage>,
) -> Result<Json<ServicePackage>, AppError> {
    Ok(Json(state.catalog.save_as(&id, package).await?))
}

/// DELETE /admin/packages/:id
pub async fn admin_delete_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete::<ServicePackage>(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Projects
// ============================================================================

/// GET /admin/projects
pub async fn admin_list_projects(
    State(state): State<AppState>,
) -> Json<Fetched<Vec<PortfolioProject>>> {
    Json(state.content.fetch_collection::<PortfolioProject>().await)
}

/// POST /admin/projects
pub async fn admin_create_project(
    State(state): State<AppState>,
    Json(draft): Json<ProjectDraft>,
) -> Result<(StatusCode, Json<PortfolioProject>), AppError> {
    let project = state.catalog.create_project(draft).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /admin/projects/:id
pub async fn admin_put_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(project): Json<PortfolioProject>,
) -> Result<Json<PortfolioProject>, AppError> {
    Ok(Json(state.catalog.save_project(&id, project).await?))
}

/// DELETE /admin/projects/:id
pub async fn admin_delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete::<PortfolioProject>(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Testimonials
// ============================================================================

/// GET /admin/testimonials
pub async fn admin_list_testimonials(
    State(state): State<AppState>,
) -> Json<Fetched<Vec<Testimonial>>> {
    Json(state.content.fetch_collection::<Testimonial>().await)
}

/// POST /admin/testimonials
pub async fn admin_create_testimonial(
    State(state): State<AppState>,
    Json(draft): Json<TestimonialDraft>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    let testimonial = state.catalog.create_testimonial(draft).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /admin/testimonials/:id
pub async fn admin_put_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(testimonial): Json<Testimonial>,
) -> Result<Json<Testimonial>, AppError> {
    Ok(Json(state.catalog.save_as(&id, testimonial).await?))
}

/// DELETE /admin/testimonials/:id
pub async fn admin_delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete::<Testimonial>(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Inquiries
// ============================================================================

/// GET /admin/inquiries?status=&q=
pub async fn admin_list_inquiries(
    State(state): State<AppState>,
    Query(filter): Query<InquiryFilter>,
) -> Json<Fetched<Vec<Inquiry>>> {
    Json(state.inquiries.list(&filter).await)
}

/// PATCH /admin/inquiries/:id
pub async fn admin_update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInquiryStatusRequest>,
) -> Result<StatusCode, AppError> {
    state.inquiries.set_status(&id, request.status).await?;
    Ok(StatusCode::NO_CONTENT)
}
