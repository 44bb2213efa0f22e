//! Upload port — the file-store capability handlers use for profile images.

use std::future::Future;
use std::path::Path;

use hobbyhub_domain::error::HobbyHubError;

/// An uploaded file buffered in memory, as received from the HTTP layer.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename, without directory components.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// The filename extension including its dot, or an empty string.
    #[must_use]
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Persist an uploaded file somewhere retrievable and return an opaque
/// reference string (a local path or an absolute URL) to store on the user.
pub trait FileStore {
    fn store(
        &self,
        file: UploadedFile,
    ) -> impl Future<Output = Result<String, HobbyHubError>> + Send;
}
