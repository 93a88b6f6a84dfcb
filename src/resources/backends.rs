use crate::api::messages::{Backend, BACKENDS_KEY};
use crate::api::traits::{ApiRequest, Transport};
use crate::resources::{decode_entity, decode_list, encode_entity, API_PREFIX};
use crate::types::errors::ApiError;
use std::collections::HashMap;

pub fn backends_path() -> String {
    format!("{}/backends", API_PREFIX)
}

/// Identifiers are interpolated as-is, without escaping.
pub fn backend_path(backend_id: &str) -> String {
    format!("{}/backends/{}", API_PREFIX, backend_id)
}

/// Lists every backend, in the order the API returns them.
pub async fn list_backends<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    headers: &HashMap<String, String>,
) -> Result<Vec<Backend>, ApiError> {
    let request = ApiRequest::get(backends_path()).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_list(&payload, BACKENDS_KEY)
}

pub async fn get_backend_by_id<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend_id: &str,
    headers: &HashMap<String, String>,
) -> Result<Backend, ApiError> {
    let request = ApiRequest::get(backend_path(backend_id)).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_entity(&payload)
}

/// Creates or replaces a backend and returns the API's view of it.
pub async fn upsert_backend<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend: &Backend,
    headers: &HashMap<String, String>,
) -> Result<Backend, ApiError> {
    let body = encode_entity(backend)?;
    let request = ApiRequest::post(backends_path(), body).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_entity(&payload)
}

/// The response body is ignored; only transport failures are reported.
pub async fn delete_backend_by_id<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend_id: &str,
    headers: &HashMap<String, String>,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(backend_path(backend_id)).with_headers(headers);
    transport.execute(endpoint, request).await?;
    Ok(())
}
