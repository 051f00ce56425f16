use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::intake::IntakeError;
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub response: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Accept a video upload from the multipart `video` field.
/// Route: POST /upload
///
/// A disallowed extension is a normal 200 response with a fixed message;
/// a missing `video` field is a client error.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut file_data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        match field.name() {
            Some("video") => {
                file_name = field.file_name().map(|s| s.to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

                if data.len() as u64 > state.config.max_upload_size {
                    return Err(ApiError::payload_too_large(format!(
                        "File exceeds maximum upload size of {} bytes",
                        state.config.max_upload_size
                    )));
                }

                file_data = Some(data);
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let file_data = file_data.ok_or_else(|| ApiError::bad_request("video field is required"))?;
    let file_name = file_name.unwrap_or_default();

    match state.intake.accept(&file_name, file_data).await {
        Ok(asset) => {
            tracing::debug!(filename = %asset.stored_filename, "Accepted upload");
            Ok(Json(UploadResponse {
                response: format!(
                    "Video uploaded successfully! You can play it at {}.",
                    asset.retrieval_path
                ),
            }))
        }
        Err(IntakeError::InvalidFileType(_)) => Ok(Json(UploadResponse {
            response: "Invalid file type. Please upload a video file.".to_string(),
        })),
        Err(IntakeError::UnsafeFilename(name)) => Err(ApiError::bad_request(format!(
            "Filename {name:?} is not allowed"
        ))),
        Err(e) => Err(ApiError::internal(format!("Failed to store file: {e}"))),
    }
}

/// Serve a previously uploaded asset verbatim.
/// Route: GET /uploads/:filename
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let data = state
        .intake
        .retrieve(&filename)
        .await
        .map_err(|e| match e {
            IntakeError::NotFound(_) => ApiError::not_found("File not found"),
            IntakeError::UnsafeFilename(name) => {
                ApiError::bad_request(format!("Filename {name:?} is not allowed"))
            }
            _ => ApiError::internal(format!("Failed to retrieve file: {e}")),
        })?;

    let mime_type = mime_guess::from_path(&filename)
        .first_raw()
        .unwrap_or("application/octet-stream");
    let byte_size = data.len() as u64;

    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        mime_type
            .parse()
            .unwrap_or(header::HeaderValue::from_static("application/octet-stream")),
    );

    headers.insert(header::CONTENT_LENGTH, header::HeaderValue::from(byte_size));

    if let Ok(value) = format!("inline; filename=\"{filename}\"").parse() {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok(response)
}
