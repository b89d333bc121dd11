//! Aster API
//!
//! Content and lead-capture service for a wedding-planning business: public
//! page data, contact-form intake, and an operator back-office, all served
//! through a content facade that falls back to built-in defaults whenever the
//! document store is empty, unreachable or denies access.
//!
//! Uses hexagonal (ports & adapters) architecture: the store is a port with
//! in-memory, PostgreSQL and REST adapters.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod messaging;

#[cfg(test)]
mod test_utils;


use app::{CatalogService, ContentService, InquiryService, PageService};
use domain::ports::DocumentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService<dyn DocumentStore>>,
    pub pages: Arc<PageService<dyn DocumentStore>>,
    pub catalog: Arc<CatalogService<dyn DocumentStore>>,
    pub inquiries: Arc<InquiryService<dyn DocumentStore>>,
    /// SHA-256 hex of the operator key; `None` locks the back-office
    pub operator_key_hash: Option<String>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        store_timeout: Duration,
        operator_key_hash: Option<String>,
    ) -> Self {
        let content = Arc::new(ContentService::new(store, store_timeout));

        Self {
            pages: Arc::new(PageService::new(content.clone())),
            catalog: Arc::new(CatalogService::new(content.clone())),
            inquiries: Arc::new(InquiryService::new(content.clone())),
            content,
            operator_key_hash,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router
///
/// With `rate_limit_inquiries`, POST /inquiries is limited per peer IP, which
/// requires serving with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_router(state: AppState, rate_limit_inquiries: bool) -> Router {
    let mut intake_routes = Router::new().route("/inquiries", post(handlers::submit_inquiry));

    if rate_limit_inquiries {
        // 2 req/sec sustained, burst of 5
        match GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
        {
            Some(config) => {
                intake_routes = intake_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                });
            }
            None => tracing::warn!("Invalid rate limit config, inquiries are not rate limited"),
        }
    }

    let admin_routes = Router::new()
        .route("/session", get(handlers::get_session))
        .route(
            "/content",
            get(handlers::admin_get_content).put(handlers::admin_put_content),
        )
        .route(
            "/settings",
            get(handlers::admin_get_settings).put(handlers::admin_put_settings),
        )
        .route(
            "/packages",
            get(handlers::admin_list_packages).post(handlers::admin_create_package),
        )
        .route(
            "/packages/:id",
            put(handlers::admin_put_package).delete(handlers::admin_delete_package),
        )
        .route(
            "/projects",
            get(handlers::admin_list_projects).post(handlers::admin_create_project),
        )
        .route(
            "/projects/:id",
            put(handlers::admin_put_project).delete(handlers::admin_delete_project),
        )
        .route(
            "/testimonials",
            get(handlers::admin_list_testimonials).post(handlers::admin_create_testimonial),
        )
        .route(
            "/testimonials/:id",
            put(handlers::admin_put_testimonial).delete(handlers::admin_delete_testimonial),
        )
        .route("/inquiries", get(handlers::admin_list_inquiries))
        .route(
            "/inquiries/:id",
            patch(handlers::admin_update_inquiry_status),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::operator_middleware,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public site data
        .route("/site/content", get(handlers::get_site_content))
        .route("/site/settings", get(handlers::get_site_settings))
        .route("/packages", get(handlers::list_packages))
        .route("/projects", get(handlers::list_projects))
        .route("/projects/:slug", get(handlers::get_project))
        .route("/testimonials", get(handlers::list_testimonials))
        // Composed page views
        .route("/pages/home", get(handlers::home_page))
        .route("/pages/portfolio", get(handlers::portfolio_page))
        .route("/pages/services", get(handlers::services_page))
        .route("/pages/about", get(handlers::about_page))
        .route("/pages/contact", get(handlers::contact_page))
        .merge(intake_routes)
        // Operator back-office
        .nest("/admin", admin_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
