//! # GeoScraper-RS
//!
//! A Rust client for the GeoScraper Google Map scraping API. Translates a
//! batch of loosely-typed input items into parametrized POST calls against
//! the fixed GeoScraper endpoints and flattens the responses back into an
//! ordered stream of output records.
//!
//! ## Features
//!
//! - **Four Operations**: Map search, place search, single place lookup, and
//!   review scraping as a closed, compile-time-checked enum
//! - **Batch Execution**: Strictly sequential per-item processing with
//!   configurable continue-on-fail semantics
//! - **Failure Isolation**: One bad item degrades to an error record instead
//!   of poisoning the whole batch
//! - **Sentinel Handling**: The API's "no more data" 404 is recognized and
//!   converted into a success-shaped record, never an error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geoscraper_rs::{
//!     BatchOptions, Credentials, GeoScraperClient, GeoScraperConfig, ParameterBag, run_batch,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GeoScraperClient::new(GeoScraperConfig::default())?;
//!     let credentials = Credentials::new("my-api-token");
//!
//!     let items = vec![
//!         ParameterBag::new()
//!             .with("operation", "mapSearch")
//!             .with("ll", "@41.6948377,44.8015781,13z")
//!             .with("query", "hotels"),
//!     ];
//!
//!     let options = BatchOptions { continue_on_fail: true };
//!     let records = run_batch(&client, &credentials, &items, &options).await?;
//!
//!     println!("Got {} records", records.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod core;
pub mod utils;

// Re-export main types
pub use crate::core::batch::{BatchOptions, run_batch};
pub use crate::core::scraper::client::{DispatchFailure, GeoScraperClient};
pub use crate::core::scraper::config::GeoScraperConfig;
pub use crate::core::scraper::credentials::Credentials;
pub use crate::core::scraper::outcome::{ItemOutcome, classify_failure};
pub use crate::core::scraper::request::{RequestSpec, build_request};
pub use crate::core::scraper::response::normalize_response;
pub use crate::core::types::params::{
    IdType, InputItem, OperationVariant, ParameterBag, resolve_item,
};
pub use crate::core::types::records::{ApiResponse, BatchRecord, ErrorRecord, OutputRecord};
pub use crate::utils::error::{Result, ScrapeError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
