//! Axum route handlers for the résumé analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::{Bytes, BytesMut};

use crate::analysis::AnalysisError;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// POST /resume/upload
///
/// Accepts a multipart form with a `file` part (PDF, max 5 MB by default) and
/// returns detected skills, experience and up to 10 interview questions.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let limit = state.analyzer.settings().max_upload_bytes;
    let (filename, bytes) = read_file_field(&mut multipart, limit).await?;

    let result = state
        .analyzer
        .analyze_upload(state.extractor.as_ref(), &filename, bytes)
        .await?;

    Ok(Json(result))
}

/// Streams the `file` part, giving up as soon as it grows past `limit`.
/// At most `limit + 1` bytes are buffered.
async fn read_file_field(
    multipart: &mut Multipart,
    limit: usize,
) -> Result<(String, Bytes), AppError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, 0, limit, "Malformed multipart body"))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();

        let mut buf = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, buf.len(), limit, "Could not read uploaded file"))?
        {
            buf.extend_from_slice(&chunk);
            if buf.len() > limit {
                return Err(AnalysisError::FileTooLarge {
                    size: buf.len(),
                    limit,
                }
                .into());
            }
        }
        return Ok((filename, buf.freeze()));
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in multipart body"
    )))
}

/// The transport body limit surfaces as a multipart error; report it as an
/// oversized file rather than a malformed request.
fn multipart_error(e: MultipartError, read: usize, limit: usize, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AnalysisError::FileTooLarge {
            size: read.max(limit.saturating_add(1)),
            limit,
        }
        .into();
    }
    AppError::Validation(format!("{context}: {e}"))
}
