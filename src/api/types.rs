use serde::{Deserialize, Serialize};

/// Coarse-grained permission class deciding which views and endpoints a
/// signed-in user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Police,
    Civil,
}

impl Role {
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Police => "/police",
            Role::Civil => "/civil",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Badge number or e-mail address.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cin: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cin: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub badge_number: Option<String>,
}

impl UserProfile {
    /// Profile for a freshly registered account. Registration always creates
    /// a civil account; the backend only returns the new id.
    pub fn from_registration(request: &RegisterRequest, user_id: String) -> Self {
        Self {
            id: user_id,
            name: request.name.clone(),
            email: request.email.clone(),
            role: Role::Civil,
            phone: Some(request.phone.clone()),
            cin: Some(request.cin.clone()),
            license_plate: Some(request.license_plate.clone()),
            vehicle_type: Some(request.vehicle_type.clone()),
            badge_number: None,
        }
    }
}

/// Violation records are owned by the backend; this layer reads them and
/// requests state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: String,
    pub license_plate: String,
    pub violation_type: String,
    pub location: String,
    pub violation_date: String,
    pub fine_amount: f64,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub insurance_policy: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub officer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewViolation {
    pub license_plate: String,
    pub violation_type: String,
    pub violation_label: String,
    pub location: String,
    pub violation_date: String,
    pub fine_amount: f64,
    pub insurance_policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub officer_id: String,
}
