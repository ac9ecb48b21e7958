//! Wire DTOs for the REST backend boundary.
//!
//! DESIGN
//! ======
//! The account role is decoded into a closed enum exactly once, here at the
//! profile-fetch boundary; everything downstream (guards, dashboards) works
//! with the variant instead of re-comparing raw strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role governing which dashboard and forms a user may access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Individual,
    OrganizationAdmin,
    CenterAdmin,
    Donor,
    /// Absent or unrecognized role string — never granted access anywhere.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Decode a backend role string, mapping unrecognized values to `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "individual" => Self::Individual,
            "organization_admin" => Self::OrganizationAdmin,
            "center_admin" => Self::CenterAdmin,
            "donor" => Self::Donor,
            _ => Self::Unknown,
        }
    }

    /// The backend's string form, as sent in registration payloads.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::OrganizationAdmin => "organization_admin",
            Self::CenterAdmin => "center_admin",
            Self::Donor => "donor",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for role pickers and dashboards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::OrganizationAdmin => "Organization Admin",
            Self::CenterAdmin => "Center Admin",
            Self::Donor => "Donor",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_individual(self) -> bool {
        self == Self::Individual
    }

    pub fn is_org_admin(self) -> bool {
        self == Self::OrganizationAdmin
    }

    pub fn is_center_admin(self) -> bool {
        self == Self::CenterAdmin
    }

    pub fn is_donor(self) -> bool {
        self == Self::Donor
    }
}

/// Roles offered during self-service registration.
pub const REGISTRATION_ROLES: &[Role] = &[
    Role::Individual,
    Role::OrganizationAdmin,
    Role::CenterAdmin,
    Role::Donor,
];

fn role_from_wire<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    // The profile serializer may emit null when no profile row exists yet.
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map_or(Role::Unknown, Role::from_wire))
}

/// An authenticated user as returned by `GET /auth/user/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default, deserialize_with = "role_from_wire")]
    pub role: Role,
    /// Organization this user administers, when role is `OrganizationAdmin`.
    #[serde(default)]
    pub linked_organization_id: Option<i64>,
    /// Distribution center this user administers, when role is `CenterAdmin`.
    #[serde(default)]
    pub linked_center_id: Option<i64>,
    #[serde(default)]
    pub profile_id: Option<i64>,
}

impl User {
    /// Staff/superuser accounts bypass role restrictions entirely.
    pub fn is_system_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// Credentials for `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/registration/`.
///
/// The backend expects the confirmation field under `password2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
}

/// Token envelope returned by `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub key: String,
}

/// Response from `POST /auth/registration/` — `key` is present only when the
/// backend is configured to auto-login new accounts.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub key: Option<String>,
}

/// A product kind offered through the platform, from `GET /product-types/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for `POST /product-requests/` — the server infers the requester
/// from the auth token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProductRequest {
    pub product_type: i64,
    pub quantity: u32,
}

/// Created request as echoed back by `POST /product-requests/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductRequestReceipt {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub product_type: Option<i64>,
    #[serde(default)]
    pub quantity: Option<u32>,
}
