//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod course;
pub mod course_catalog;
pub mod filter_criteria;
pub mod catalog_filter;
pub mod url_state;
pub mod lead_capture;
pub mod testimonials;
