//! Wire DTOs for the panel's REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (including its mixed
//! casing) via serde renames, so the Rust side can use conventional names.
//! Everything except the login exchange and the role claim is a read-only
//! snapshot for rendering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Capability tier carried in the token's `role` claim and on user records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::SuperAdmin];

    /// Parse the wire form. Unknown tiers are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "email")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

/// Successful `POST /api/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Failure body shared by every endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Administrative user account owned by the users service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Raw tier string; unknown tiers still render.
    pub role: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Dashboard counters from `GET /api/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(rename = "cuentasActivas", default)]
    pub active_accounts: u32,
    #[serde(rename = "etiquetasHoy", default)]
    pub labels_today: u32,
    #[serde(rename = "erroresRecientes", default)]
    pub recent_errors: u32,
}

/// Marketplace account linked to the integration, from `GET /api/accounts`.
///
/// The endpoint lists stored accounts only; every row is a linked account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LinkedAccount {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nombre_tienda", default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub ml_user_id: Option<serde_json::Value>,
}

/// Store reference embedded in an order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoreRef {
    #[serde(rename = "nombre_tienda")]
    pub store_name: Option<String>,
}

/// Processed order from `GET /api/orders`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Order {
    pub id: i64,
    pub ml_order_id: serde_json::Value,
    #[serde(rename = "cliente_nombre", default)]
    pub customer_name: String,
    #[serde(rename = "TiendaML", default)]
    pub store: Option<StoreRef>,
    #[serde(rename = "andreani_tracking", default)]
    pub tracking: Option<String>,
    #[serde(rename = "status_proceso", default)]
    pub status: String,
}

/// Integration error record from `GET /api/errors`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorLog {
    pub id: i64,
    #[serde(rename = "error_mensaje", default)]
    pub message: String,
    /// Raw JSON text of the payload that failed processing.
    #[serde(rename = "payload_recibido", default)]
    pub payload: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Render an id the backend sends as either a JSON number or a string.
pub fn display_id(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
