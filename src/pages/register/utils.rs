use crate::api::RegisterRequest;
use std::collections::HashMap;

pub const VEHICLE_TYPES: &[&str] = &["Voiture", "Camion", "Moto", "Bus", "Autre"];

/// Raw form state. Validation runs over this before anything is sent, so a
/// password mismatch never reaches the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cin: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Field-keyed validation errors; an empty map means the form may be
    /// submitted. Keys match the backend's field names so server-side
    /// errors can be merged into the same map.
    pub fn validate(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name".into(), "Full name is required".into());
        }
        if self.email.trim().is_empty() {
            errors.insert("email".into(), "Email is required".into());
        } else if !self.email.contains('@') {
            errors.insert("email".into(), "Email is not valid".into());
        }
        if self.phone.len() != 9 || !self.phone.chars().all(|c| c.is_ascii_digit()) {
            errors.insert("phone".into(), "Phone must be 9 digits".into());
        }
        if self.cin.trim().is_empty() {
            errors.insert("cin".into(), "National ID is required".into());
        }
        if self.license_plate.trim().is_empty() {
            errors.insert("license_plate".into(), "License plate is required".into());
        }
        if !VEHICLE_TYPES.contains(&self.vehicle_type.as_str()) {
            errors.insert("vehicle_type".into(), "Choose a vehicle type".into());
        }
        if self.password.len() < 6 {
            errors.insert(
                "password".into(),
                "Password must be at least 6 characters".into(),
            );
        } else if self.password != self.confirm_password {
            errors.insert(
                "confirm_password".into(),
                "Passwords do not match".into(),
            );
        }

        errors
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            cin: self.cin.trim().to_string(),
            license_plate: self.license_plate.trim().to_string(),
            vehicle_type: self.vehicle_type.clone(),
            password: self.password.clone(),
        }
    }
}
