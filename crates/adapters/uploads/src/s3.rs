//! S3-backed file store.

use std::future::Future;

use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use hobbyhub_app::ports::{FileStore, UploadedFile};
use hobbyhub_domain::error::HobbyHubError;

use crate::error::UploadError;

/// Largest file accepted by the object-storage backend, in bytes (5 MiB).
/// The local backend applies no such limit.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Stores uploads under an `uploads/` prefix in an S3 bucket.
///
/// Object keys combine a millisecond timestamp, a random suffix, and the
/// original file extension; the original filename is not reused.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    region: String,
}

impl S3ObjectStore {
    /// Build a store using the ambient AWS credential and region provider
    /// chain. Credentials are never read from application configuration.
    pub async fn from_env(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&config),
            bucket: bucket.into(),
            region,
        }
    }

    /// Build a store around an existing client.
    #[must_use]
    pub fn with_client(
        client: Client,
        bucket: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    fn object_key(file: &UploadedFile) -> String {
        format!(
            "uploads/{}-{}{}",
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4().simple(),
            file.extension()
        )
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

impl FileStore for S3ObjectStore {
    fn store(
        &self,
        file: UploadedFile,
    ) -> impl Future<Output = Result<String, HobbyHubError>> + Send {
        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let key = Self::object_key(&file);
        let url = self.object_url(&key);
        async move {
            if file.bytes.len() > MAX_UPLOAD_BYTES {
                return Err(UploadError::TooLarge {
                    size: file.bytes.len(),
                }
                .into());
            }

            client
                .put_object()
                .bucket(&bucket)
                .key(&key)
                .body(ByteStream::from(file.bytes))
                .send()
                .await
                .map_err(|err| UploadError::from(aws_sdk_s3::Error::from(err)))?;

            Ok(url)
        }
    }
}
