//! Upload ticket types and data structures.

/// MIME type bound into the signature when the caller declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Fixed extension appended to every generated object key, regardless of the
/// declared content type.
pub const PHOTO_EXTENSION: &str = ".jpg";

/// Per-invocation context for issuing an upload ticket.
#[derive(Debug, Clone, Default)]
pub struct UploadContext {
    /// Declared MIME type of the upcoming upload, used verbatim when present.
    pub content_type: Option<String>,
}

/// A one-shot ticket authorizing a single direct upload.
#[derive(Debug, Clone)]
pub struct UploadTicket {
    /// Presigned PUT URL, valid for a fixed window after issuance.
    pub upload_url: String,
    /// Generated object key (`<uuid>.jpg`).
    pub photo_filename: String,
}
