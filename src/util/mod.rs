//! Utility helpers for page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `message` writes inline form feedback through the `Dom` seam; `date`
//! renders server timestamps for display.

pub mod date;
pub mod message;
