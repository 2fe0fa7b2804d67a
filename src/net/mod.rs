//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and response interpretation, `types`
//! defines the serde DTOs shared with the backend.

pub mod api;
pub mod types;
