//! Output records
//!
//! What a batch run emits: per-item output records, per-item error records,
//! and the array-or-object shape of a raw API response.

use serde::Serialize;
use serde_json::Value;

/// A successful API response body.
///
/// The API returns either an ordered sequence of objects or a single object;
/// no schema is assumed beyond that.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// An array body, one element per result
    Many(Vec<Value>),
    /// Any non-array body
    One(Value),
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(items),
            other => Self::One(other),
        }
    }
}

/// One output record, tagged with the item that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    /// The JSON payload, passed through unchanged
    pub payload: Value,
    /// Index of the originating input item
    pub item_index: usize,
}

/// A per-item failure that the batch continued past
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    /// Human-readable failure message
    pub message: String,
    /// Index of the originating input item
    pub item_index: usize,
}

/// One entry in the ordered batch output sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchRecord {
    Output(OutputRecord),
    Error(ErrorRecord),
}

impl BatchRecord {
    /// Index of the originating input item
    pub fn item_index(&self) -> usize {
        match self {
            Self::Output(record) => record.item_index,
            Self::Error(record) => record.item_index,
        }
    }

    /// Whether this entry is an error record
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
