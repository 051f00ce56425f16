//! Upload intake: extension validation, persistence, and retrieval of assets.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;

use crate::store::{AssetStore, StoreError};

#[derive(Debug, Error)]
pub enum IntakeError {
    /// Filename is empty, has no extension, or the extension is not allowed.
    #[error("Invalid file type: {0:?}")]
    InvalidFileType(String),
    /// Filename contains path separators or parent-directory components.
    #[error("Unsafe filename: {0:?}")]
    UnsafeFilename(String),
    #[error("Asset not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(StoreError),
}

/// An accepted upload, keyed by the filename the client supplied.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    pub stored_filename: String,
    pub extension: String,
    /// Path a client can fetch the stored bytes back from.
    pub retrieval_path: String,
}

/// Validates incoming files against the extension allow-list and persists
/// them to the asset store under the client-supplied filename.
///
/// Uploads with the same filename silently overwrite each other; concurrent
/// same-name uploads race last-writer-wins with no locking.
pub struct UploadIntake {
    store: Arc<dyn AssetStore>,
    allowed_extensions: Vec<String>,
}

impl UploadIntake {
    /// `allowed_extensions` are matched lowercase, without a leading dot.
    pub fn new(store: Arc<dyn AssetStore>, allowed_extensions: Vec<String>) -> Self {
        Self {
            store,
            allowed_extensions,
        }
    }

    /// Validate and persist an upload. Nothing is written on rejection.
    pub async fn accept(&self, filename: &str, data: Bytes) -> Result<UploadedAsset, IntakeError> {
        screen_filename(filename)?;

        let extension = self
            .allowed_extension(filename)
            .ok_or_else(|| IntakeError::InvalidFileType(filename.to_string()))?;

        self.store
            .put(filename, data)
            .await
            .map_err(IntakeError::Store)?;

        tracing::debug!(filename = %filename, extension = %extension, "Stored upload");

        Ok(UploadedAsset {
            stored_filename: filename.to_string(),
            retrieval_path: format!("/uploads/{filename}"),
            extension,
        })
    }

    /// Read a previously accepted asset back, verbatim.
    pub async fn retrieve(&self, filename: &str) -> Result<Bytes, IntakeError> {
        screen_filename(filename)?;

        match self.store.get(filename).await {
            Ok(data) => Ok(data),
            Err(StoreError::NotFound(_)) => Err(IntakeError::NotFound(filename.to_string())),
            Err(e) => Err(IntakeError::Store(e)),
        }
    }

    /// Returns the lowercase extension when the filename carries one from the
    /// allow-list, following the original rule: everything after the last dot.
    fn allowed_extension(&self, filename: &str) -> Option<String> {
        let (_, extension) = filename.rsplit_once('.')?;
        let extension = extension.to_lowercase();
        self.allowed_extensions
            .contains(&extension)
            .then_some(extension)
    }
}

/// Reject filenames that could escape the storage root.
///
/// The system this replaces stored client-supplied names verbatim, which
/// permitted path traversal. Names with separators or `..` components are
/// refused here before any filesystem access.
fn screen_filename(filename: &str) -> Result<(), IntakeError> {
    if filename.is_empty() {
        return Err(IntakeError::InvalidFileType(String::new()));
    }

    if filename.contains('/') || filename.contains('\\') || filename == "." || filename == ".." {
        return Err(IntakeError::UnsafeFilename(filename.to_string()));
    }

    Ok(())
}
