//! Typed CRUD operations over the `/v2` control API.
//!
//! Each function builds the resource path, sends it through a [`Transport`] and
//! maps the JSON payload to or from domain entities.
//!
//! [`Transport`]: crate::api::traits::Transport

pub mod backends;
pub mod frontends;
pub mod servers;

use crate::types::errors::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

pub(crate) const API_PREFIX: &str = "/v2";

/// Unwraps a list envelope such as `{"Backends": [...]}`.
///
/// The body must be an object of arrays. A missing (or null) `key` yields an
/// empty list; any other shape is a decode error.
pub(crate) fn decode_list<T: DeserializeOwned>(
    payload: &[u8],
    key: &str,
) -> Result<Vec<T>, ApiError> {
    let mut envelope: HashMap<String, Option<Vec<T>>> = serde_json::from_slice(payload)?;
    match envelope.remove(key).flatten() {
        Some(items) => Ok(items),
        None => {
            tracing::debug!(key, "List envelope has no entries");
            Ok(Vec::new())
        }
    }
}

pub(crate) fn decode_entity<T: DeserializeOwned>(payload: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(payload)?)
}

pub(crate) fn encode_entity<T: Serialize>(entity: &T) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(entity)
        .map_err(|e| ApiError::InvalidRequest(format!("failed to encode body: {}", e)))
}
