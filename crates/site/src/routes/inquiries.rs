//! Public inquiry submission.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use sonaverse_core::Email;

use crate::db::inquiries::NewInquiry;
use crate::db::{InquiryIntake, SettingsReader};
use crate::error::SiteError;
use crate::state::AppState;

const MAX_MESSAGE_LENGTH: usize = 5_000;
const MAX_FIELD_LENGTH: usize = 200;

#[derive(Debug, Deserialize)]
pub struct InquiryRequest {
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
}

/// POST /api/inquiries
///
/// Validates and stores a new inquiry. Rate-limited per IP at the router
/// layer; the form can also be closed entirely from the admin settings.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<InquiryRequest>,
) -> Result<(StatusCode, Json<Value>), SiteError> {
    let name = required(&body.name, "이름을 입력해 주세요.")?;
    let subject = required(&body.subject, "제목을 입력해 주세요.")?;
    let message = required(&body.message, "문의 내용을 입력해 주세요.")?;

    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(SiteError::Validation(
            "문의 내용이 너무 깁니다.".to_owned(),
        ));
    }

    let email = Email::parse(&body.email)
        .map_err(|_| SiteError::Validation("올바른 이메일 형식이 아닙니다.".to_owned()))?;

    if !SettingsReader::new(&state.pool)
        .inquiries_open()
        .await?
    {
        return Err(SiteError::Validation(
            "현재 문의 접수가 중단되어 있습니다.".to_owned(),
        ));
    }

    let phone = body.phone.as_deref().map(str::trim).filter(|p| !p.is_empty());
    let id = InquiryIntake::new(&state.pool)
        .submit(&NewInquiry {
            name,
            email: email.as_str(),
            phone,
            subject,
            message,
        })
        .await?;

    info!(inquiry_id = id, "inquiry submitted");
    Ok((StatusCode::ACCEPTED, Json(json!({ "success": true, "id": id }))))
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, SiteError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_FIELD_LENGTH {
        return Err(SiteError::Validation(message.to_owned()));
    }
    Ok(trimmed)
}
