//! # hobbyhub-domain
//!
//! Pure domain model for the hobbyhub user/hobby tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (accounts with credentials and an optional profile image)
//! - Define **Hobbies** (dated, per-user records of learned hobbies)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod hobby;
pub mod id;
pub mod user;
