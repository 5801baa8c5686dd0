//! Lead capture handlers and module exports.

mod submit_enrollment;
pub use submit_enrollment::submit_enrollment;

mod submit_contact_inquiry;
pub use submit_contact_inquiry::submit_contact_inquiry;
