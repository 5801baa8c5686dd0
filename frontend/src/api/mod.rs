pub mod lead_api;
