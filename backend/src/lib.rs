//! Server-side handlers for lead capture.

pub mod api;
pub mod lead_utils;
pub mod server_extra;
