//! Response normalization
//!
//! Expands a successful API response into zero or more output records.

use crate::core::types::records::{ApiResponse, OutputRecord};

/// Flatten a response into output records tagged with the item index.
///
/// An array yields one record per element in API order; anything else yields
/// exactly one record wrapping the body unchanged. An empty array is a legal
/// terminal state and yields nothing.
pub fn normalize_response(response: ApiResponse, item_index: usize) -> Vec<OutputRecord> {
    match response {
        ApiResponse::Many(items) => items
            .into_iter()
            .map(|payload| OutputRecord {
                payload,
                item_index,
            })
            .collect(),
        ApiResponse::One(payload) => vec![OutputRecord {
            payload,
            item_index,
        }],
    }
}
