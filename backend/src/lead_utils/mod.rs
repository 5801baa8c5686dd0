pub mod lead_reference;
pub mod webhook_utils;
