//! JSON body extractor whose rejections use the API error shape.
//!
//! Syntax errors are reported as axum words them. A value of the wrong
//! type names the document, the field path and the offending value:
//! `Club validation failed: cost: Cast to Number failed for value "abc" at path "cost"`.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};

use clubhub_core::error::AppError;
use clubhub_core::types::Resource;
use clubhub_entity::validation::DocumentPayload;

use crate::error::ApiError;

/// Like [`axum::Json`], but malformed bodies become `400 {"error": ...}`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + DocumentPayload,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(JsonBody(from_document(&body)?))
    }
}

/// Deserialize a parsed body into a document payload.
pub(crate) fn from_document<T>(body: &Value) -> Result<T, AppError>
where
    T: DeserializeOwned + DocumentPayload,
{
    serde_path_to_error::deserialize(body).map_err(|err| {
        AppError::validation(describe_failure(
            T::RESOURCE,
            err.path(),
            body,
            &err.inner().to_string(),
        ))
    })
}

fn describe_failure(resource: Resource, path: &Path, body: &Value, message: &str) -> String {
    let kind = message
        .rsplit_once("expected ")
        .and_then(|(_, expected)| cast_kind(expected.trim()));
    let at_root = path.iter().next().is_none();

    match kind {
        Some(kind) if !at_root => {
            let value = lookup(body, path).map(render).unwrap_or_default();
            format!(
                "{resource} validation failed: {path}: Cast to {kind} failed for value \"{value}\" at path \"{path}\""
            )
        }
        _ => format!("{resource} validation failed: {message}"),
    }
}

fn cast_kind(expected: &str) -> Option<&'static str> {
    match expected {
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "f32" | "f64" => {
            Some("Number")
        }
        "a boolean" => Some("Boolean"),
        "a date" => Some("Date"),
        "a string" => Some("String"),
        "a sequence" => Some("Array"),
        _ => None,
    }
}

fn lookup<'a>(body: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(body, |value, segment| match segment {
        Segment::Map { key } => value.get(key.as_str()),
        Segment::Seq { index } => value.get(*index),
        _ => None,
    })
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
