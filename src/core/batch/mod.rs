//! Sequential batch execution
//!
//! Drives the per-item pipeline over an ordered input sequence: resolve,
//! build, dispatch, then normalize or classify. Items run strictly in order
//! with exactly one outstanding network call at a time; the output sequence
//! preserves item order and keeps each item's records contiguous.

use tracing::{debug, info};

use crate::core::scraper::client::GeoScraperClient;
use crate::core::scraper::credentials::Credentials;
use crate::core::scraper::outcome::{ItemOutcome, classify_failure};
use crate::core::scraper::request::build_request;
use crate::core::scraper::response::normalize_response;
use crate::core::types::params::{ParameterBag, resolve_item};
use crate::core::types::records::{BatchRecord, ErrorRecord};
use crate::utils::error::ScrapeError;

/// Run-level policy for a batch
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// When true, a per-item failure degrades to an error record; when
    /// false, it aborts the whole run
    pub continue_on_fail: bool,
}

/// Process an ordered sequence of items against the API.
///
/// Returns the ordered mix of output and error records, or the first fatal
/// failure. On a fatal failure no further items are processed and already
/// accumulated records are not returned.
pub async fn run_batch(
    client: &GeoScraperClient,
    credentials: &Credentials,
    items: &[ParameterBag],
    options: &BatchOptions,
) -> Result<Vec<BatchRecord>, ScrapeError> {
    info!(items = items.len(), "starting batch run");
    let mut records = Vec::new();

    for (index, params) in items.iter().enumerate() {
        match process_item(client, credentials, index, params, options.continue_on_fail).await {
            ItemOutcome::Records(output) => {
                debug!(item_index = index, records = output.len(), "item succeeded");
                records.extend(output.into_iter().map(BatchRecord::Output));
            }
            ItemOutcome::Sentinel(record) => records.push(BatchRecord::Output(record)),
            ItemOutcome::Recoverable(record) => records.push(BatchRecord::Error(record)),
            ItemOutcome::Fatal(err) => return Err(err),
        }
    }

    info!(records = records.len(), "batch run complete");
    Ok(records)
}

/// The full pipeline for one item, folded into a single outcome.
///
/// Validation failures are subject to the same continue-on-fail policy as
/// dispatch failures; only the sentinel bypasses it.
async fn process_item(
    client: &GeoScraperClient,
    credentials: &Credentials,
    index: usize,
    params: &ParameterBag,
    continue_on_fail: bool,
) -> ItemOutcome {
    let spec = match resolve_item(index, params)
        .and_then(|item| build_request(&item, client.config()))
    {
        Ok(spec) => spec,
        Err(err) if continue_on_fail => {
            return ItemOutcome::Recoverable(ErrorRecord {
                message: err.to_string(),
                item_index: index,
            });
        }
        Err(err) => return ItemOutcome::Fatal(err),
    };

    match client.dispatch(&spec, credentials).await {
        Ok(response) => ItemOutcome::Records(normalize_response(response, index)),
        Err(failure) => classify_failure(failure, index, continue_on_fail),
    }
}
