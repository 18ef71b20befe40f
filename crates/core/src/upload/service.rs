//! Upload ticket service implementation.

use std::sync::Arc;

use uuid::Uuid;

use super::error::UploadError;
use super::types::{DEFAULT_CONTENT_TYPE, PHOTO_EXTENSION, UploadContext, UploadTicket};
use crate::storage::{PresignedUpload, StorageError, StorageService};

/// Signing capability required by the issuer.
///
/// Implemented by the OpenDAL-backed [`StorageService`]; tests substitute a
/// mock signer.
pub trait UploadSigner: Send + Sync {
    /// Generate a presigned PUT URL for `key` with `content_type` bound in.
    fn sign_upload(
        &self,
        key: &str,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<PresignedUpload, StorageError>> + Send;
}

impl UploadSigner for StorageService {
    fn sign_upload(
        &self,
        key: &str,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<PresignedUpload, StorageError>> + Send {
        self.presign_put(key, content_type)
    }
}

/// Service issuing one-shot upload tickets.
pub struct UploadService<S: UploadSigner> {
    signer: Arc<S>,
}

impl<S: UploadSigner> UploadService<S> {
    /// Create a new upload service.
    #[must_use]
    pub fn new(signer: Arc<S>) -> Self {
        Self { signer }
    }

    /// Issue an upload ticket for one direct PUT.
    ///
    /// Generates a random v4 UUID key with the fixed `.jpg` extension, binds
    /// the declared content type (or `application/octet-stream`) into the
    /// signature, and returns the signed URL plus the generated key. Each
    /// invocation is independent; uniqueness rests on the random identifier
    /// alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider rejects the signing request.
    /// Failures are never retried.
    pub async fn issue_ticket(&self, context: UploadContext) -> Result<UploadTicket, UploadError> {
        let photo_filename = format!("{}{}", Uuid::new_v4(), PHOTO_EXTENSION);

        let content_type = context
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let presigned = self
            .signer
            .sign_upload(&photo_filename, &content_type)
            .await?;

        Ok(UploadTicket {
            upload_url: presigned.url,
            photo_filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;

    use super::*;

    /// Mock signer that reflects key and content type back in the URL.
    struct MockSigner;

    impl UploadSigner for MockSigner {
        fn sign_upload(
            &self,
            key: &str,
            content_type: &str,
        ) -> impl std::future::Future<Output = Result<PresignedUpload, StorageError>> + Send
        {
            let url = format!("http://mock-storage/upload/{key}?X-Amz-Expires=300&ct={content_type}");
            async move {
                Ok(PresignedUpload {
                    url,
                    method: "PUT".to_string(),
                    expires_at: Utc::now() + chrono::Duration::seconds(300),
                    headers: HashMap::new(),
                })
            }
        }
    }

    /// Mock signer that always fails, as a provider rejection would.
    struct FailingSigner;

    impl UploadSigner for FailingSigner {
        fn sign_upload(
            &self,
            _key: &str,
            _content_type: &str,
        ) -> impl std::future::Future<Output = Result<PresignedUpload, StorageError>> + Send
        {
            async { Err(StorageError::signing("access denied")) }
        }
    }

    fn mock_service() -> UploadService<MockSigner> {
        UploadService::new(Arc::new(MockSigner))
    }

    #[tokio::test]
    async fn test_issue_ticket_filename_pattern() {
        let ticket = mock_service()
            .issue_ticket(UploadContext::default())
            .await
            .expect("should issue");

        assert!(ticket.photo_filename.ends_with(".jpg"));
        assert_eq!(ticket.photo_filename.len(), 36 + ".jpg".len());

        let stem = ticket.photo_filename.trim_end_matches(".jpg");
        assert!(Uuid::parse_str(stem).is_ok(), "stem is not a UUID: {stem}");
    }

    #[tokio::test]
    async fn test_issue_ticket_filenames_are_unique() {
        let service = mock_service();

        let first = service
            .issue_ticket(UploadContext::default())
            .await
            .expect("should issue");
        let second = service
            .issue_ticket(UploadContext::default())
            .await
            .expect("should issue");

        assert_ne!(first.photo_filename, second.photo_filename);
    }

    #[tokio::test]
    async fn test_issue_ticket_defaults_content_type() {
        let ticket = mock_service()
            .issue_ticket(UploadContext { content_type: None })
            .await
            .expect("should issue");

        assert!(ticket.upload_url.contains("ct=application/octet-stream"));
    }

    #[tokio::test]
    async fn test_issue_ticket_binds_declared_content_type() {
        let ticket = mock_service()
            .issue_ticket(UploadContext {
                content_type: Some("image/png".to_string()),
            })
            .await
            .expect("should issue");

        // Declared type is bound verbatim while the key keeps the fixed
        // extension.
        assert!(ticket.upload_url.contains("ct=image/png"));
        assert!(ticket.photo_filename.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn test_issue_ticket_url_matches_filename() {
        let ticket = mock_service()
            .issue_ticket(UploadContext::default())
            .await
            .expect("should issue");

        assert!(ticket.upload_url.contains(&ticket.photo_filename));
    }

    #[tokio::test]
    async fn test_issue_ticket_propagates_signing_failure() {
        let service = UploadService::new(Arc::new(FailingSigner));

        let err = service
            .issue_ticket(UploadContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Storage(StorageError::Signing(_))));
    }
}
