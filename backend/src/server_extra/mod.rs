pub mod enroll_endpoint;
