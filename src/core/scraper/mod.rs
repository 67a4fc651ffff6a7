//! GeoScraper API integration
//!
//! Configuration, credentials, request building, dispatch, failure
//! classification, and response normalization for the fixed GeoScraper
//! Google Map endpoints.

pub mod client;
pub mod config;
pub mod credentials;
pub mod outcome;
pub mod request;
pub mod response;

pub use client::{DispatchFailure, GeoScraperClient};
pub use config::GeoScraperConfig;
pub use credentials::Credentials;
pub use outcome::{ItemOutcome, classify_failure};
pub use request::{RequestSpec, build_request};
pub use response::normalize_response;
