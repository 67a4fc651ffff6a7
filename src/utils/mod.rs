//! Utility modules
//!
//! - **error**: Error handling
//! - **logging**: Logging & monitoring

pub mod error;
pub mod logging;

pub use error::{Result, ScrapeError};
