use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;
use tracing::{debug, warn};
use crate::errors::AppError;
use crate::metrics::{
    INVALID_REQUESTS, REQUEST_LATENCY, REQUEST_TOTAL, WHITELIST_HITS, WHITELIST_MISSES,
};
use crate::models::{CheckRequest, CheckResponse};
use crate::state::AppState;

// Body is parsed by hand so a bad payload gets our JSON error instead of axum's rejection text
pub async fn check_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CheckResponse>, AppError> {
    REQUEST_TOTAL.inc();
    // observes on drop, rejected bodies included
    let _timer = REQUEST_LATENCY.start_timer();

    let request = CheckRequest::parse(&body).inspect_err(|e| {
        INVALID_REQUESTS.inc();
        warn!(error = %e, "rejecting unparseable lookup body");
    })?;

    let username = request.username();
    let time_order = state.allow_list.time_order(username);

    if time_order.is_some() {
        WHITELIST_HITS.inc();
    } else {
        WHITELIST_MISSES.inc();
    }
    debug!(?username, ?time_order, "allow-list lookup");

    Ok(Json(CheckResponse::new(time_order, request.check_string)))
}
