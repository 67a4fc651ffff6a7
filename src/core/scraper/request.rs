//! Request translation
//!
//! Maps a resolved input item onto the fixed GeoScraper endpoint table and
//! builds the JSON payload for it.

use serde_json::{Map, Value, json};
use url::Url;

use super::config::GeoScraperConfig;
use crate::core::types::params::{IdType, InputItem, OperationVariant};
use crate::utils::error::ScrapeError;

/// A fully-translated request: endpoint plus JSON payload.
///
/// The payload carries `hl` when non-empty and `useCached` when defined, in
/// addition to the variant-specific fields, and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// Target endpoint
    pub endpoint: Url,
    /// JSON body, serialized as-is
    pub payload: Map<String, Value>,
}

/// Build the request for one item.
///
/// The only validation surfaced here is the single-place id check: the id
/// selected by `id_type` must be non-empty. Everything else passes through
/// untyped.
pub fn build_request(
    item: &InputItem,
    config: &GeoScraperConfig,
) -> Result<RequestSpec, ScrapeError> {
    let mut payload = Map::new();

    let path = match &item.operation {
        OperationVariant::MapSearch { ll, query, start } => {
            payload.insert("ll".to_string(), json!(ll));
            payload.insert("query".to_string(), json!(query));
            if let Some(start) = start {
                payload.insert("start".to_string(), json!(start));
            }
            "/google/map/results"
        }
        OperationVariant::PlaceSearch { ll, query } => {
            payload.insert("ll".to_string(), json!(ll));
            payload.insert("query".to_string(), json!(query));
            "/google/map/search/place"
        }
        OperationVariant::SinglePlace {
            id_type,
            data_id,
            place_id,
        } => {
            let id = match id_type {
                IdType::DataId => data_id,
                IdType::PlaceId => place_id,
            };
            if id.is_empty() {
                return Err(ScrapeError::validation(
                    item.index,
                    format!("missing {} for the selected id type", id_type.as_key()),
                ));
            }
            payload.insert(id_type.as_key().to_string(), json!(id));
            "/google/map/place"
        }
        OperationVariant::Review { data_id, token } => {
            payload.insert("data_id".to_string(), json!(data_id));
            match token {
                Some(token) if !token.is_empty() => {
                    payload.insert("token".to_string(), json!(token));
                }
                _ => {}
            }
            "/google/map/review"
        }
    };

    // Cross-cutting fields apply uniformly to all variants
    if !item.hl.is_empty() {
        payload.insert("hl".to_string(), json!(item.hl));
    }
    if let Some(use_cached) = item.use_cached {
        payload.insert("useCached".to_string(), json!(use_cached));
    }

    Ok(RequestSpec {
        endpoint: config.endpoint(path)?,
        payload,
    })
}
