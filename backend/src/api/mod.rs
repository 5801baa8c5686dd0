//! API handlers called from server functions and extra routes.

pub mod leads;
