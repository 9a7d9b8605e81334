use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use log_store::Record;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct WriteRequest {
    #[serde(default)]
    pub record: Record,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResponse {
    pub offset: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadRequest {
    #[serde(default)]
    pub offset: u64,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadResponse {
    pub record: Record,
}

/// Decode a JSON body whatever its `Content-Type`. Absent fields take
/// their zero value.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// ═══════════════════════════════════════════════════════════════
//  REST: POST /  {"record": {"value": "<base64>"}}
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_write(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WriteResponse>, ApiError> {
    let req: WriteRequest = decode_body(&body)?;
    let len = req.record.value.len();
    let offset = state.log.append(req.record)?;
    tracing::debug!(offset, bytes = len, "appended record");
    Ok(Json(WriteResponse { offset }))
}

// ═══════════════════════════════════════════════════════════════
//  REST: GET /  {"offset": N}
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_read(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReadResponse>, ApiError> {
    let req: ReadRequest = decode_body(&body)?;
    match state.log.read(req.offset) {
        Ok(record) => Ok(Json(ReadResponse { record })),
        Err(e) => {
            tracing::debug!(offset = req.offset, error = %e, "read failed");
            Err(e.into())
        }
    }
}
