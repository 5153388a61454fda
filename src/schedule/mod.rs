pub mod query;
pub mod rows;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::fetch::sheet::{SheetFetchError, SheetSource};
use query::EventsRequest;

pub use query::EventsParams;

/// One schedule row, keyed by the sheet's header names. Every record carries
/// the full header key set; absent trailing cells hold empty text.
pub type Record = BTreeMap<String, String>;

/// Faults a schedule request can surface, in the shape the endpoint reports
/// them: caller mistakes, upstream refusals with their own status, and
/// everything else.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("failed to fetch sheet CSV: upstream returned status {status}")]
    Upstream { status: u16 },
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}

/// Fetch the published sheet and reshape it into schedule records.
///
/// A single unconditional read of the export URL; no retry, no cache. The
/// upstream's non-success status is carried through verbatim.
pub async fn fetch_schedule<S>(source: &S, request: &EventsRequest) -> Result<Vec<Record>, ScheduleError>
where
    S: SheetSource + ?Sized,
{
    debug!(
        sheet_id = %request.sheet_id,
        gid = %request.gid,
        header_row = request.header_row,
        "fetching schedule"
    );

    let csv = source
        .fetch_csv(&request.sheet_id, &request.gid)
        .await
        .map_err(|err| match err {
            SheetFetchError::Status(status) => ScheduleError::Upstream { status },
            SheetFetchError::Transport(cause) => ScheduleError::Internal(cause),
        })?;

    let records = rows::parse_records(&csv, request.header_row)?;
    debug!(count = records.len(), "parsed schedule records");
    Ok(records)
}
