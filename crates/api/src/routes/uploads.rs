//! Upload URL issuing routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use photodrop_core::upload::{UploadContext, UploadError};

/// Query parameters for requesting an upload URL.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Declared MIME type of the upcoming upload.
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
}

/// Response for an issued upload ticket.
#[derive(Debug, Serialize)]
pub struct UploadTicketResponse {
    /// Presigned upload URL.
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
    /// Generated object key.
    #[serde(rename = "photoFilename")]
    pub photo_filename: String,
}

/// Uniform opaque failure response.
///
/// Internal detail is deliberately kept out of the body; diagnostics go to
/// the log only.
fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

/// GET `/upload`
/// Issue a presigned upload URL for one direct PUT.
async fn request_upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
) -> impl IntoResponse {
    let Some(uploads) = &state.uploads else {
        let err = UploadError::not_configured("no upload bucket");
        error!(error = %err, "Failed to issue upload URL");
        return internal_error();
    };

    let context = UploadContext {
        content_type: params.content_type,
    };

    match uploads.issue_ticket(context).await {
        Ok(ticket) => {
            info!(photo_filename = %ticket.photo_filename, "Upload URL issued");

            let response = UploadTicketResponse {
                upload_url: ticket.upload_url,
                photo_filename: ticket.photo_filename,
            };

            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to issue upload URL");
            internal_error()
        }
    }
}

/// Creates the upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/upload", get(request_upload))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::create_router;
    use photodrop_core::storage::{StorageConfig, StorageProvider, StorageService};
    use photodrop_core::upload::UploadService;

    /// State backed by a real S3-signed storage service.
    ///
    /// Presigning is pure signature computation; no network is involved.
    fn state_with_storage() -> AppState {
        let config = StorageConfig::new(StorageProvider::s3(
            "http://localhost:9000",
            "test-bucket",
            "test-access-key",
            "test-secret-key",
            "us-east-1",
        ));
        let storage = StorageService::from_config(config).expect("should create service");

        AppState {
            uploads: Some(Arc::new(UploadService::new(Arc::new(storage)))),
        }
    }

    /// State without bucket configuration.
    fn state_without_storage() -> AppState {
        AppState { uploads: None }
    }

    async fn get_json(
        state: AppState,
        uri: &str,
    ) -> (axum::http::response::Parts, serde_json::Value) {
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .header("Origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (parts, json)
    }

    #[tokio::test]
    async fn test_request_upload_success() {
        let (parts, json) = get_json(state_with_storage(), "/upload").await;

        assert_eq!(parts.status, StatusCode::OK);

        let filename = json["photoFilename"].as_str().expect("photoFilename");
        assert!(filename.ends_with(".jpg"));
        assert!(Uuid::parse_str(filename.trim_end_matches(".jpg")).is_ok());

        let url = json["uploadURL"].as_str().expect("uploadURL");
        assert!(url.contains(filename));
        assert!(url.contains("X-Amz-Expires=300"));
    }

    #[tokio::test]
    async fn test_request_upload_filenames_unique_across_calls() {
        let state = state_with_storage();

        let (_, first) = get_json(state.clone(), "/upload").await;
        let (_, second) = get_json(state, "/upload").await;

        assert_ne!(first["photoFilename"], second["photoFilename"]);
    }

    #[tokio::test]
    async fn test_request_upload_binds_declared_content_type() {
        let (parts, json) =
            get_json(state_with_storage(), "/upload?contentType=image/png").await;

        assert_eq!(parts.status, StatusCode::OK);

        // Fixed .jpg extension even for a png declaration.
        let filename = json["photoFilename"].as_str().expect("photoFilename");
        assert!(filename.ends_with(".jpg"));

        // Content type is covered by the signature.
        let url = json["uploadURL"].as_str().expect("uploadURL");
        assert!(url.to_lowercase().contains("content-type"));
    }

    #[tokio::test]
    async fn test_request_upload_missing_bucket_returns_500() {
        let (parts, json) = get_json(state_without_storage(), "/upload").await;

        assert_eq!(parts.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_cors_header_on_success_and_failure() {
        let (ok_parts, _) = get_json(state_with_storage(), "/upload").await;
        assert_eq!(
            ok_parts
                .headers
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );

        let (err_parts, _) = get_json(state_without_storage(), "/upload").await;
        assert_eq!(
            err_parts
                .headers
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (parts, json) = get_json(state_without_storage(), "/health").await;

        assert_eq!(parts.status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }
}
