//! Inquiry intake handler

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::domain::entities::{Inquiry, NewInquiry};
use crate::error::AppError;
use crate::AppState;

/// Response to a contact form submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInquiryResponse {
    pub persisted: bool,
    /// Usable whether or not the inquiry was stored
    pub whatsapp_link: String,
    pub inquiry: Inquiry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /inquiries
///
/// 201 when stored. 502 when the store rejected it, still carrying the
/// chat link so the visitor can reach the business directly.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(submission): Json<NewInquiry>,
) -> Result<(StatusCode, Json<SubmitInquiryResponse>), AppError> {
    let outcome = state.inquiries.submit(submission).await?;

    let status = if outcome.persisted {
        StatusCode::CREATED
    } else {
        StatusCode::BAD_GATEWAY
    };

    let response = SubmitInquiryResponse {
        persisted: outcome.persisted,
        whatsapp_link: outcome.whatsapp_link,
        inquiry: outcome.inquiry,
        error: outcome
            .error
            .map(|_| "Your inquiry could not be saved. Please contact us via WhatsApp.".to_string()),
    };

    Ok((status, Json(response)))
}
