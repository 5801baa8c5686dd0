//! Short, human-quotable references for received leads.

use chrono::{DateTime, Utc};

const REFERENCE_PREFIX: &str = "CSG-";
const REFERENCE_HEX_LEN: usize = 10;

pub fn make_lead_reference(email: &str, received_at: &DateTime<Utc>) -> String {
    let digest = sha256::digest(format!("{}|{}", email.to_lowercase(), received_at.to_rfc3339()));
    format!("{}{}", REFERENCE_PREFIX, digest[..REFERENCE_HEX_LEN].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reference_is_stable_for_same_input() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let a = make_lead_reference("Priya@Example.com", &at);
        let b = make_lead_reference("priya@example.com", &at);
        assert_eq!(a, b);
        assert!(a.starts_with("CSG-"));
        assert_eq!(a.len(), REFERENCE_PREFIX.len() + REFERENCE_HEX_LEN);

        let later = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 1).unwrap();
        assert_ne!(a, make_lead_reference("priya@example.com", &later));
    }
}
