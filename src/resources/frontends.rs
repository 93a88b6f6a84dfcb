use crate::api::messages::{Frontend, FRONTENDS_KEY};
use crate::api::traits::{ApiRequest, Transport};
use crate::resources::{decode_entity, decode_list, encode_entity, API_PREFIX};
use crate::types::errors::ApiError;
use std::collections::HashMap;

pub fn frontends_path() -> String {
    format!("{}/frontends", API_PREFIX)
}

pub fn frontend_path(frontend_id: &str) -> String {
    format!("{}/frontends/{}", API_PREFIX, frontend_id)
}

pub async fn list_frontends<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    headers: &HashMap<String, String>,
) -> Result<Vec<Frontend>, ApiError> {
    let request = ApiRequest::get(frontends_path()).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_list(&payload, FRONTENDS_KEY)
}

pub async fn get_frontend_by_id<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    frontend_id: &str,
    headers: &HashMap<String, String>,
) -> Result<Frontend, ApiError> {
    let request = ApiRequest::get(frontend_path(frontend_id)).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_entity(&payload)
}

pub async fn upsert_frontend<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    frontend: &Frontend,
    headers: &HashMap<String, String>,
) -> Result<Frontend, ApiError> {
    let body = encode_entity(frontend)?;
    let request = ApiRequest::post(frontends_path(), body).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_entity(&payload)
}

pub async fn delete_frontend_by_id<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    frontend_id: &str,
    headers: &HashMap<String, String>,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(frontend_path(frontend_id)).with_headers(headers);
    transport.execute(endpoint, request).await?;
    Ok(())
}
