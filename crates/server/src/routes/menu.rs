use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    Json,
};
use common::types::Message;
use models::MenuItem;
use serde_json::Value;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

/// Parse an `:id` segment the lenient way clients already rely on: surrounding
/// whitespace and trailing junk are ignored (`"7abc"` is 7). No leading digits,
/// a negative value, or overflow yields `None`.
pub fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let value = digits[..end].parse::<u64>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// A segment that fails to decode (e.g. percent-encoded non UTF-8) is just an unknown id.
fn path_id(path: Result<Path<String>, PathRejection>) -> Option<u64> {
    path.ok().and_then(|Path(raw)| parse_id(&raw))
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Only `application/json` bodies are read; anything else, or a blank body,
/// is an empty object and fails field validation. A JSON body that cannot be
/// read or parsed is an internal fault.
fn parse_body(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Value, ApiError> {
    let empty = || Value::Object(Default::default());
    if !is_json_content(headers) {
        return Ok(empty());
    }
    let body = body.map_err(|e| ApiError::Internal(format!("cannot read request body: {e}")))?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty());
    }
    serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("malformed JSON body: {e}")))
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.menu.list().await)
}

pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = path_id(path).ok_or(ApiError::NotFound)?;
    Ok(Json(state.menu.get(id).await?))
}

pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let raw = parse_body(&headers, body)?;
    info!(body = %raw, "create menu item request body");
    let item = state.menu.create(&raw).await?;
    info!(id = item.id, "menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn replace_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let raw = parse_body(&headers, body)?;
    info!(body = %raw, "replace menu item request body");
    // Body problems are reported before an unusable id.
    let Some(id) = path_id(path) else {
        models::validate(&raw).map_err(ApiError::Validation)?;
        return Err(ApiError::NotFound);
    };
    let item = state.menu.replace(id, &raw).await?;
    info!(id = item.id, "menu item replaced");
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = path_id(path).ok_or(ApiError::NotFound)?;
    state.menu.delete(id).await?;
    info!(id, "menu item deleted");
    Ok(Json(Message { message: "Menu item deleted successfully" }))
}
