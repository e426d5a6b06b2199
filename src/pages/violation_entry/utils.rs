use crate::api::NewViolation;
use std::collections::HashMap;

/// Violation catalog: machine code, display label, statutory fine in DZD.
pub const VIOLATION_TYPES: &[(&str, &str, f64)] = &[
    ("speeding", "Speeding", 5000.0),
    ("red_light", "Running a red light", 7500.0),
    ("illegal_parking", "Illegal parking", 3000.0),
    ("no_seatbelt", "No seatbelt", 2000.0),
    ("no_license", "Driving without a license", 10000.0),
    ("drunk_driving", "Drunk driving", 20000.0),
];

pub fn fine_for(violation_type: &str) -> Option<f64> {
    VIOLATION_TYPES
        .iter()
        .find(|(code, _, _)| *code == violation_type)
        .map(|(_, _, fine)| *fine)
}

pub fn label_for(violation_type: &str) -> Option<&'static str> {
    VIOLATION_TYPES
        .iter()
        .find(|(code, _, _)| *code == violation_type)
        .map(|(_, label, _)| *label)
}

/// Local time of entry, formatted the way the backend stores violation
/// dates. The officer can still edit it before submitting.
pub fn default_violation_date() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M").to_string()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationEntryForm {
    pub license_plate: String,
    pub violation_type: String,
    pub location: String,
    pub violation_date: String,
    pub fine_amount: f64,
    pub insurance_policy: String,
    pub notes: String,
}

impl ViolationEntryForm {
    pub fn validate(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();

        if self.license_plate.trim().is_empty() {
            errors.insert("license_plate".into(), "License plate is required".into());
        }
        if label_for(&self.violation_type).is_none() {
            errors.insert("violation_type".into(), "Choose a violation type".into());
        }
        if self.location.trim().is_empty() {
            errors.insert("location".into(), "Location is required".into());
        }
        if self.violation_date.trim().is_empty() {
            errors.insert("violation_date".into(), "Date is required".into());
        }
        if self.fine_amount <= 0.0 {
            errors.insert("fine_amount".into(), "Fine must be positive".into());
        }
        if self.insurance_policy.trim().is_empty() {
            errors.insert(
                "insurance_policy".into(),
                "Insurance policy is required".into(),
            );
        }

        errors
    }

    pub fn build_payload(&self, officer_id: &str) -> NewViolation {
        let notes = self.notes.trim();
        NewViolation {
            license_plate: self.license_plate.trim().to_string(),
            violation_type: self.violation_type.clone(),
            violation_label: label_for(&self.violation_type).unwrap_or_default().to_string(),
            location: self.location.trim().to_string(),
            violation_date: self.violation_date.clone(),
            fine_amount: self.fine_amount,
            insurance_policy: self.insurance_policy.trim().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            officer_id: officer_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ViolationEntryForm {
        ViolationEntryForm {
            license_plate: "01234-116-16".into(),
            violation_type: "speeding".into(),
            location: "RN5, Alger".into(),
            violation_date: "2025-03-14T09:30".into(),
            fine_amount: 5000.0,
            insurance_policy: "INS-88".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn catalog_fines_match_the_statute() {
        assert_eq!(fine_for("speeding"), Some(5000.0));
        assert_eq!(fine_for("red_light"), Some(7500.0));
        assert_eq!(fine_for("illegal_parking"), Some(3000.0));
        assert_eq!(fine_for("no_seatbelt"), Some(2000.0));
        assert_eq!(fine_for("no_license"), Some(10000.0));
        assert_eq!(fine_for("drunk_driving"), Some(20000.0));
        assert_eq!(fine_for("jaywalking"), None);
    }

    #[test]
    fn valid_form_produces_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let form = ViolationEntryForm::default();
        let errors = form.validate();
        assert!(errors.contains_key("license_plate"));
        assert!(errors.contains_key("violation_type"));
        assert!(errors.contains_key("location"));
        assert!(errors.contains_key("violation_date"));
        assert!(errors.contains_key("fine_amount"));
        assert!(errors.contains_key("insurance_policy"));
    }

    #[test]
    fn blank_insurance_policy_is_rejected() {
        let mut form = valid_form();
        form.insurance_policy = "   ".into();
        let errors = form.validate();
        assert_eq!(
            errors.get("insurance_policy").map(String::as_str),
            Some("Insurance policy is required")
        );
    }

    #[test]
    fn zero_or_negative_fine_is_rejected() {
        let mut form = valid_form();
        form.fine_amount = 0.0;
        assert!(form.validate().contains_key("fine_amount"));
        form.fine_amount = -100.0;
        assert!(form.validate().contains_key("fine_amount"));
    }

    #[test]
    fn payload_carries_officer_id_and_label() {
        let payload = valid_form().build_payload("u1");
        assert_eq!(payload.officer_id, "u1");
        assert_eq!(payload.violation_label, "Speeding");
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn payload_keeps_nonempty_notes() {
        let mut form = valid_form();
        form.notes = "  repeat offender ".into();
        let payload = form.build_payload("u1");
        assert_eq!(payload.notes.as_deref(), Some("repeat offender"));
    }

    #[test]
    fn default_date_uses_the_backend_format() {
        let date = default_violation_date();
        assert!(chrono::NaiveDateTime::parse_from_str(&date, "%Y-%m-%dT%H:%M").is_ok());
    }
}
