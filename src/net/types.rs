//! Serde DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON serializers field for field so
//! deserialization stays lossless. Dates travel as ISO 8601 strings and are
//! not interpreted client-side beyond ordering checks.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /auth/me`.
///
/// Only `is_admin` is consulted by the navigation guard; the remaining
/// fields are display data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// Login form payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A rentable asset as serialized by the `/objects/` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    /// Asset category; the wire field is `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    /// Lifecycle status string owned by the backend (`"Доступно"`,
    /// `"На обслуговуванні"`, ...).
    pub status: String,
    pub price_per_day: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl Asset {
    /// Whether the backend considers this asset rentable right now.
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }

    /// Whether the asset is parked in maintenance.
    pub fn in_maintenance(&self) -> bool {
        self.status == STATUS_MAINTENANCE
    }
}

/// Backend status literal for a rentable asset.
pub const STATUS_AVAILABLE: &str = "Доступно";

/// Backend status literal for an asset under maintenance.
pub const STATUS_MAINTENANCE: &str = "На обслуговуванні";

/// A rental row as serialized by `GET /rentals/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: i64,
    pub asset_id: i64,
    pub asset_name: String,
    pub user_id: i64,
    pub username: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub total_cost: Option<f64>,
    /// Lifecycle status string owned by the backend (`"Активний"`,
    /// `"Скасована"`, ...).
    pub status: String,
}

impl Rental {
    /// Whether this rental can still be cancelled.
    pub fn is_active(&self) -> bool {
        self.status == RENTAL_ACTIVE
    }
}

/// Backend status literal for an active rental.
pub const RENTAL_ACTIVE: &str = "Активний";

/// Payload for `POST /rentals/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRental {
    pub asset_id: i64,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
}

/// Payload for the admin `POST /objects/` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAsset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub price_per_day: f64,
}

/// A monthly financial summary row from `GET /financial_summary/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub id: i64,
    pub user_id: i64,
    pub period_start: String,
    pub period_end: String,
    pub total_rentals: i64,
    pub total_cost: f64,
    pub created_at: String,
}

/// Aggregate payload of `GET /dashboard/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub user: DashboardUser,
    pub active_rentals_count: i64,
    pub monthly_expenses: f64,
    pub completed_rentals_count: i64,
    pub active_rentals: Vec<Rental>,
    pub available_assets: Vec<Asset>,
}

/// The trimmed user record embedded in the dashboard payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardUser {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}
