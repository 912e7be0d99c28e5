//! Generic REST client for the per-entity CRUD endpoints.
//!
//! Every entity exposes the same surface (`GET/POST /api/<collection>`,
//! `PUT/DELETE /api/<collection>/<id>`), so the four calls are written
//! once over [`Entity`]. Failures are converted to human-readable
//! messages: the backend's structured `{"error": ...}` body when it is
//! present, a generic per-action message otherwise.

use contracts::domain::common::{Entity, EntityId};
use contracts::shared::ErrorBody;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

fn collection_url<T: Entity>() -> String {
    api_url(&format!("/api/{}", T::collection_name()))
}

fn element_url<T: Entity>(id: EntityId) -> String {
    api_url(&format!("/api/{}/{}", T::collection_name(), id))
}

/// Decide the message shown for a failed call: a non-empty structured
/// `error` field wins, anything else falls back to the generic
/// per-action message.
fn extract_error(body: Option<ErrorBody>, fallback: &str) -> String {
    match body {
        Some(body) if !body.error.is_empty() => body.error,
        _ => fallback.to_string(),
    }
}

async fn error_message(response: Response, fallback: &str) -> String {
    extract_error(response.json::<ErrorBody>().await.ok(), fallback)
}

/// Fetch the whole collection for an entity.
pub async fn fetch_all<T: Entity>() -> Result<Vec<T>, String> {
    let fallback = format!("Failed to load {}", T::list_name());

    let response = Request::get(&collection_url::<T>())
        .send()
        .await
        .map_err(|e| {
            log::error!("GET /api/{} failed: {}", T::collection_name(), e);
            fallback.clone()
        })?;

    if !response.ok() {
        return Err(error_message(response, &fallback).await);
    }

    response.json::<Vec<T>>().await.map_err(|e| {
        log::error!("Failed to parse {} list: {}", T::element_name(), e);
        fallback
    })
}

/// Create a new record.
pub async fn create<T: Entity>(input: &T::Input) -> Result<(), String> {
    let fallback = format!("Failed to create {}", T::element_name());

    let response = Request::post(&collection_url::<T>())
        .json(input)
        .map_err(|e| {
            log::error!("Failed to serialize {}: {}", T::element_name(), e);
            fallback.clone()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST /api/{} failed: {}", T::collection_name(), e);
            fallback.clone()
        })?;

    if !response.ok() {
        return Err(error_message(response, &fallback).await);
    }
    Ok(())
}

/// Update an existing record.

pub async fn update<T: Entity>(id: EntityId, input: &T::Input) -> Result<(), String> {
    let fallback = format!("Failed to update {}", T::element_name());

    let response = Request::put(&element_url::<T>(id))
        .json(input)
        .map_err(|e| {
            log::error!("Failed to serialize {}: {}", T::element_name(), e);
            fallback.clone()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("PUT /api/{}/{} failed: {}", T::collection_name(), id, e);
            fallback.clone()
        })?;

    if !response.ok() {
        return Err(error_message(response, &fallback).await);
    }
    Ok(())
}

/// Delete a record by id.
pub async fn delete_one<T: Entity>(id: EntityId) -> Result<(), String> {
    let fallback = format!("Failed to delete {}", T::element_name());

    let response = Request::delete(&element_url::<T>(id))
        .send()
        .await
        .map_err(|e| {
            log::error!("DELETE /api/{}/{} failed: {}", T::collection_name(), id, e);
            fallback.clone()
        })?;

    if !response.ok() {
        return Err(error_message(response, &fallback).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> Option<ErrorBody> {
        serde_json::from_str(json).ok()
    }

    #[test]
    fn test_structured_error_wins_over_fallback() {
        assert_eq!(
            extract_error(body(r#"{"error":"network down"}"#), "Failed to load companies"),
            "network down"
        );
    }

    #[test]
    fn test_empty_error_field_falls_back() {
        assert_eq!(
            extract_error(body(r#"{"error":""}"#), "Failed to load companies"),
            "Failed to load companies"
        );
    }

    #[test]
    fn test_missing_error_field_falls_back() {
        // body does not deserialize to the error shape at all
        assert_eq!(
            extract_error(body(r#"{"detail":"boom"}"#), "Failed to create contract"),
            "Failed to create contract"
        );
        assert_eq!(extract_error(None, "Failed to delete service"), "Failed to delete service");
    }
}
