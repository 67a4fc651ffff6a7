//! API credentials
//!
//! A single opaque token, owned by the caller and shared read-only across
//! all items in a batch run.

use std::fmt;

/// The GeoScraper API token
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wrap an API token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The raw token value
    pub fn token(&self) -> &str {
        &self.token
    }
}

// The token is a secret; keep it out of debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"***")
            .finish()
    }
}
