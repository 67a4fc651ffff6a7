//! Failure classification
//!
//! The three-way policy switch applied to a failed dispatch: the "no more
//! data" sentinel becomes a success-shaped record, everything else degrades
//! to an error record or aborts the batch depending on `continue_on_fail`.

use serde_json::{Value, json};
use tracing::{debug, warn};

use super::client::DispatchFailure;
use crate::core::types::records::{ErrorRecord, OutputRecord};
use crate::utils::error::ScrapeError;

/// The `detail` body the API sends when pagination is exhausted
pub const NO_DATA_DETAIL: &str = "No data found";

/// Message emitted in the synthetic sentinel record
pub const NO_MORE_RESULTS_MESSAGE: &str = "No more results";

/// What processing one item produced.
///
/// The batch loop pattern-matches on this; the whole failure policy lives in
/// a single visible switch rather than nested handlers.
#[derive(Debug)]
pub enum ItemOutcome {
    /// Normalized records from a successful response
    Records(Vec<OutputRecord>),
    /// Pagination exhausted; a synthetic success-shaped record
    Sentinel(OutputRecord),
    /// Per-item failure the batch continues past
    Recoverable(ErrorRecord),
    /// Failure that aborts the whole run
    Fatal(ScrapeError),
}

/// Classify a dispatch failure for one item.
///
/// The sentinel check runs first and never consults `continue_on_fail`.
pub fn classify_failure(
    failure: DispatchFailure,
    item_index: usize,
    continue_on_fail: bool,
) -> ItemOutcome {
    if is_no_data_sentinel(&failure) {
        debug!(item_index, "no more results");
        return ItemOutcome::Sentinel(OutputRecord {
            payload: json!({
                "message": NO_MORE_RESULTS_MESSAGE,
                "detail": NO_DATA_DETAIL,
            }),
            item_index,
        });
    }

    let message = failure.to_string();
    if continue_on_fail {
        warn!(item_index, %message, "item failed, continuing");
        ItemOutcome::Recoverable(ErrorRecord {
            message,
            item_index,
        })
    } else {
        ItemOutcome::Fatal(ScrapeError::request(item_index, message))
    }
}

/// HTTP 404 with a JSON body whose `detail` equals the canonical string
fn is_no_data_sentinel(failure: &DispatchFailure) -> bool {
    let DispatchFailure::Http { status: 404, body } = failure else {
        return false;
    };

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(Value::as_str)
                .map(|detail| detail == NO_DATA_DETAIL)
        })
        .unwrap_or(false)
}
