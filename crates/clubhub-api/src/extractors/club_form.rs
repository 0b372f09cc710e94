//! Club creation payload, from a multipart form or a JSON body.
//!
//! Multipart forms carry the club fields as text parts and an optional
//! `logo` file part.

use axum::Json;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use clubhub_core::error::AppError;
use clubhub_entity::club::{Logo, NewClub};

use crate::error::ApiError;
use crate::extractors::json::from_document;

/// A parsed club creation request.
#[derive(Debug, Clone, Default)]
pub struct ClubForm {
    pub club: NewClub,
    pub logo: Option<Logo>,
}

impl<S> FromRequest<S> for ClubForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(body) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::validation(rejection.body_text()))?;
            let club = from_document::<NewClub>(&body)?;
            return Ok(ClubForm { club, logo: None });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        let mut form = ClubForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::validation(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == "logo" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                if !bytes.is_empty() {
                    form.logo = Some(Logo::from_upload(&file_name, &bytes));
                }
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            apply_text_field(&mut form.club, &name, value)?;
        }

        Ok(form)
    }
}

/// Set one multipart text field on the payload. Unknown fields are ignored.
fn apply_text_field(club: &mut NewClub, name: &str, value: String) -> Result<(), AppError> {
    match name {
        "name" => club.name = Some(value),
        "overview" => club.overview = Some(value),
        "description" => club.description = Some(value),
        "genre" => club.genre = Some(value),
        "colorTheme" => club.color_theme = Some(value),
        "location" => club.location = Some(value),
        "meetingsFrequency" => club.meetings_frequency = Some(value),
        "email" => club.email = Some(value),
        "instagram" => club.instagram = Some(value),
        "discord" => club.discord = Some(value),
        "facebook" => club.facebook = Some(value),
        "apply_link" => club.apply_link = Some(value),
        "facts" | "facts[]" => club.facts.push(value),
        "cost" => club.cost = Some(parse_number(name, &value)?),
        "size" => club.size = Some(parse_number(name, &value)?),
        "isActive" => club.is_active = Some(parse_bool(name, &value)?),
        "featured" => club.featured = Some(parse_bool(name, &value)?),
        _ => {}
    }
    Ok(())
}

fn parse_number(path: &str, value: &str) -> Result<i32, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::validation(format!(
            "Club validation failed: {path}: Cast to Number failed for value \"{value}\" at path \"{path}\""
        ))
    })
}

fn parse_bool(path: &str, value: &str) -> Result<bool, AppError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::validation(format!(
            "Club validation failed: {path}: Cast to Boolean failed for value \"{value}\" at path \"{path}\""
        ))),
    }
}
