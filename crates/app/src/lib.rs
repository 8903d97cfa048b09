//! # homelist-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `HomeRepository` — CRUD plus bulk clear for homes
//! - Define the **driving port** as a use-case struct:
//!   - `HomeService` — list, create, show, update, replace, delete, clear
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `homelist-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
