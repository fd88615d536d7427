//! Networking modules for the auth/API helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the call contract (401 redirect, result normalization),
//! `transport` is the seam to the browser's fetch, and `types` defines the
//! server payloads the helpers understand.

pub mod api;
pub mod transport;
pub mod types;
