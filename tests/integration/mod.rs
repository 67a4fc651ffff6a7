//! Integration tests
//!
//! Everything here runs against a wiremock server standing in for the
//! GeoScraper API.

mod batch_tests;
mod dispatch_tests;
