use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use dns_test_server_application::use_cases::PutOutcome;
use tracing::debug;

use crate::{dto::PutRecordParams, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/v1/{record_type}/{name}",
        get(get_records).put(put_record).delete(delete_records),
    )
}

async fn get_records(
    State(state): State<AppState>,
    Path((record_type, name)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let records = state.get_records.execute(&record_type, &name)?;

    debug!(record_type = %record_type, name = %name, count = records.len(), "Records listed");
    Ok(records.iter().map(|r| format!("{}\n", r)).collect())
}

async fn put_record(
    State(state): State<AppState>,
    Path((record_type, name)): Path<(String, String)>,
    Query(params): Query<PutRecordParams>,
) -> Result<StatusCode, ApiError> {
    let (_, outcome) =
        state
            .put_record
            .execute(&record_type, &name, params.v.as_deref(), params.ttl)?;

    Ok(match outcome {
        PutOutcome::Created => StatusCode::CREATED,
        PutOutcome::Appended => StatusCode::NO_CONTENT,
    })
}

async fn delete_records(
    State(state): State<AppState>,
    Path((record_type, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.delete_record.execute(&record_type, &name)?;
    Ok(StatusCode::NO_CONTENT)
}
