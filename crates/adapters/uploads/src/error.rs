//! Upload-specific error type.

use hobbyhub_domain::error::HobbyHubError;

/// Errors originating from the file-store backends.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Writing to the local upload directory failed.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// The object-storage request failed.
    #[error("object storage error: {0}")]
    S3(#[from] aws_sdk_s3::Error),

    /// The file exceeds the object-storage size limit.
    #[error("file of {size} bytes exceeds the 5 MiB upload limit")]
    TooLarge { size: usize },
}

impl From<UploadError> for HobbyHubError {
    fn from(err: UploadError) -> Self {
        Self::Storage(Box::new(err))
    }
}
