//! # hobbyhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve **server-side-rendered HTML pages** (askama templates, zero
//!   JavaScript: plain forms and the POST/redirect/GET pattern)
//! - Gate every non-exempt route on the session's login flag
//! - Parse multipart uploads and hand files to the configured `FileStore`
//! - Map application results into HTTP responses: HTML, redirects, and the
//!   one JSON error payload on user deletion
//!
//! ## Dependency rule
//! Depends on `hobbyhub-app` (for port traits and services) and
//! `hobbyhub-domain` (for domain types used in rendering). Never leaks axum
//! types into the domain.

pub mod error;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod upload;
