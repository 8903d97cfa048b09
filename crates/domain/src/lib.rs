//! # homelist-domain
//!
//! Pure domain model for the homelist listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Home** listing and its table/column keys
//! - Decode request bodies into a full [`home::Home`] or a sparse
//!   [`home::HomePatch`], and encode listings back to JSON
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod home;
