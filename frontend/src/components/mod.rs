pub mod error_boundary;
pub mod navbar;
pub mod course_components;
pub mod lead_components;
