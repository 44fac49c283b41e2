//! Mosque entity models and DTOs.

use minaret_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `mosques` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mosque {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub contact_phone: Option<String>,
    pub contact_website: Option<String>,
    pub verified: bool,
    pub added_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A mosque row joined with its distance (metres) from a query point.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MosqueWithDistance {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub contact_phone: Option<String>,
    pub contact_website: Option<String>,
    pub verified: bool,
    pub added_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub distance_m: f64,
}

/// Input for inserting a mosque. Fields are expected to be validated
/// (and name/address trimmed) by the caller before insertion.
#[derive(Debug, Clone)]
pub struct CreateMosque {
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub contact_phone: Option<String>,
    pub contact_website: Option<String>,
    pub added_by: DbId,
}
