//! # hobbyhub-adapter-uploads
//!
//! File-store adapters implementing the `FileStore` port from `hobbyhub-app`.
//!
//! Two backends:
//! - [`LocalDiskStore`] — writes under a local upload directory and returns
//!   a `/images/uploads/...` path.
//! - [`S3ObjectStore`] — writes under an `uploads/` prefix in an S3 bucket
//!   and returns the object's absolute URL.
//!
//! The backend is selected once at startup from configuration and injected
//! into the HTTP layer as a capability; handlers never pick a backend per
//! request.

mod error;
mod local;
mod s3;

pub use error::UploadError;
pub use local::LocalDiskStore;
pub use s3::{MAX_UPLOAD_BYTES, S3ObjectStore};
