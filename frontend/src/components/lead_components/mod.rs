pub mod contact_form;
pub mod enroll_modal;
