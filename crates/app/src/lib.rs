//! # hobbyhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — CRUD plus credential lookup for users
//!   - `HobbyRepository` — insert, per-user listing, pair-scoped delete
//!   - `FileStore` — persist an uploaded file, returning a reference string
//! - Define use-case services: `UserService`, `HobbyService`, `AuthService`
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `hobbyhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
