//! Core request-translation and dispatch engine
//!
//! The per-item pipeline: parameter resolution, request building, dispatch,
//! failure classification, and response normalization, driven by the
//! sequential batch runner.

pub mod batch;
pub mod scraper;
pub mod types;
