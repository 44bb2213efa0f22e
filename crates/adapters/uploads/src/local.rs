//! Local-filesystem file store.

use std::future::Future;
use std::path::PathBuf;

use hobbyhub_app::ports::{FileStore, UploadedFile};
use hobbyhub_domain::error::HobbyHubError;

use crate::error::UploadError;

/// Stores uploads under a local directory, keyed by the original filename.
///
/// A second upload with the same filename overwrites the first; no
/// uniqueness is enforced. No size limit applies in this backend.
pub struct LocalDiskStore {
    dir: PathBuf,
}

impl LocalDiskStore {
    /// Create the store, creating the upload directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Io`] when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, UploadError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl FileStore for LocalDiskStore {
    fn store(
        &self,
        file: UploadedFile,
    ) -> impl Future<Output = Result<String, HobbyHubError>> + Send {
        let path = self.dir.join(&file.name);
        let reference = format!("/images/uploads/{}", file.name);
        async move {
            tokio::fs::write(&path, &file.bytes)
                .await
                .map_err(UploadError::from)?;

            Ok(reference)
        }
    }
}
