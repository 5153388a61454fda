//! The events endpoint: query validation, sheet fetch, record mapping, and
//! the error-to-status contract.

use std::convert::Infallible;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::fetch::SheetSource;
use crate::schedule::{self, EventsParams, Record, ScheduleError};

#[derive(Serialize)]
struct EventsResponse {
    data: Vec<Record>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// All routes: `GET /health` and `GET /api/events`.
pub fn routes<S>(
    source: Arc<S>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone
where
    S: SheetSource + 'static,
{
    let health = warp::path("health").and(warp::get()).and_then(health_check);

    let with_source = warp::any().map(move || source.clone());
    let events = warp::path!("api" / "events")
        .and(warp::get())
        .and(warp::query::<EventsParams>())
        .and(with_source)
        .and_then(events_handler);

    health.or(events)
}

async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "festsite",
    })))
}

async fn events_handler<S>(
    params: EventsParams,
    source: Arc<S>,
) -> Result<impl Reply, Infallible>
where
    S: SheetSource,
{
    let result = match params.validate() {
        Ok(request) => schedule::fetch_schedule(source.as_ref(), &request).await,
        Err(err) => Err(err),
    };

    Ok(match result {
        Ok(data) => {
            info!(count = data.len(), "served schedule");
            warp::reply::with_status(
                warp::reply::json(&EventsResponse { data }),
                StatusCode::OK,
            )
        }
        Err(err) => {
            match &err {
                ScheduleError::Internal(cause) => {
                    error!(error = ?cause, "events request failed")
                }
                other => warn!(error = %other, "events request rejected"),
            }
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: error_message(&err),
                }),
                error_status(&err),
            )
        }
    })
}

/// InvalidInput is the caller's fault, upstream statuses pass through, and
/// everything else is a 500 with the cause kept in the log.
fn error_status(err: &ScheduleError) -> StatusCode {
    match err {
        ScheduleError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ScheduleError::Upstream { status } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_message(err: &ScheduleError) -> String {
    match err {
        // Generic on purpose: the cause is logged, not exposed.
        ScheduleError::Internal(_) => "internal server error".to_string(),
        other => other.to_string(),
    }
}
