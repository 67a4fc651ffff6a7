//! Input parameters
//!
//! Per-item parameter resolution: turns a loosely-typed parameter bag into a
//! strongly-discriminated `InputItem` with one active operation variant.

use serde_json::{Map, Value};

use crate::utils::error::ScrapeError;

/// Default coordinates, matching the published parameter schema
pub const DEFAULT_LL: &str = "@41.6948377,44.8015781,13z";

/// Default response language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Raw per-item parameter bag with default-value fallback accessors
#[derive(Debug, Clone, Default)]
pub struct ParameterBag {
    fields: Map<String, Value>,
}

impl ParameterBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from an existing JSON map
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set a field, builder-style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// String field with a default fallback
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
    }

    /// Integer field, absent when not supplied.
    ///
    /// This is a typed accessor: a value that is not a non-negative integer
    /// (a negative number, a float, a string) falls back exactly like an
    /// absent field. Pagination indexes are the only integer parameters, so
    /// anything else the caller supplied here is not forwardable anyway.
    pub fn opt_u64(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(Value::as_u64)
    }

    /// Boolean field with a default fallback
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.fields
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }
}

/// Which identifier scheme a single-place lookup uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdType {
    DataId,
    PlaceId,
}

impl IdType {
    /// The payload key this scheme maps to
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::DataId => "data_id",
            Self::PlaceId => "place_id",
        }
    }

    /// Parse the raw `idType` parameter; the schema default is `data_id`
    fn parse(raw: &str) -> Self {
        match raw {
            "place_id" => Self::PlaceId,
            _ => Self::DataId,
        }
    }
}

/// The closed set of operations the API supports.
///
/// Exactly one variant is active per item; adding or removing a variant is a
/// compile-time-checked, localized change.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationVariant {
    /// Scrape Google Map search results, optionally paginated via `start`
    MapSearch {
        ll: String,
        query: String,
        start: Option<u64>,
    },
    /// Scrape Google Map place search results
    PlaceSearch { ll: String, query: String },
    /// Get details for a single place by `data_id` or `place_id`
    SinglePlace {
        id_type: IdType,
        data_id: String,
        place_id: String,
    },
    /// Scrape reviews for a place, optionally continued via a page token
    Review {
        data_id: String,
        token: Option<String>,
    },
}

/// One resolved batch item, immutable once materialized
#[derive(Debug, Clone, PartialEq)]
pub struct InputItem {
    /// Position in the input sequence
    pub index: usize,
    /// The active operation variant
    pub operation: OperationVariant,
    /// Response language, merged into every payload when non-empty
    pub hl: String,
    /// Pass-through instruction asking the API to serve a cached result;
    /// merged into every payload when defined
    pub use_cached: Option<bool>,
}

/// Resolve an item's raw parameter bag into a discriminated `InputItem`.
///
/// Fails only when the declared operation is not one of the four known
/// variants; all other fields fall back to their schema defaults.
pub fn resolve_item(index: usize, params: &ParameterBag) -> Result<InputItem, ScrapeError> {
    let operation = match params.str_or("operation", "mapSearch") {
        "mapSearch" => OperationVariant::MapSearch {
            ll: params.str_or("ll", DEFAULT_LL).to_string(),
            query: params.str_or("query", "").to_string(),
            start: params.opt_u64("start"),
        },
        "placeSearch" => OperationVariant::PlaceSearch {
            ll: params.str_or("ll", DEFAULT_LL).to_string(),
            query: params.str_or("query", "").to_string(),
        },
        "singlePlace" => OperationVariant::SinglePlace {
            id_type: IdType::parse(params.str_or("idType", "data_id")),
            data_id: params.str_or("data_id", "").to_string(),
            place_id: params.str_or("place_id", "").to_string(),
        },
        "review" => {
            let token = params.str_or("token", "");
            OperationVariant::Review {
                data_id: params.str_or("review_data_id", "").to_string(),
                token: (!token.is_empty()).then(|| token.to_string()),
            }
        }
        other => {
            return Err(ScrapeError::validation(
                index,
                format!("unknown operation: {other}"),
            ));
        }
    };

    Ok(InputItem {
        index,
        operation,
        hl: params.str_or("hl", DEFAULT_LANGUAGE).to_string(),
        use_cached: Some(params.bool_or("useCached", true)),
    })
}
