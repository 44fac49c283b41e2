//! Repository for the `mosques` table.
//!
//! Proximity queries use the `cube`/`earthdistance` extensions
//! (`ll_to_earth` GiST index); text search uses the GIN index over
//! `to_tsvector('simple', name || ' ' || address)`. Both indexes are
//! declared in the migrations.

use sqlx::PgPool;

use minaret_core::types::DbId;

use crate::models::mosque::{CreateMosque, Mosque, MosqueWithDistance};

/// Column list for mosque queries.
const MOSQUE_COLUMNS: &str = "id, name, address, longitude, latitude, \
    contact_phone, contact_website, verified, added_by, created_at, updated_at";

/// Provides CRUD and geospatial queries for mosques.
pub struct MosqueRepo;

impl MosqueRepo {
    /// Insert a new mosque, returning the created row.
    ///
    /// New mosques always start unverified.
    pub async fn create(pool: &PgPool, input: &CreateMosque) -> Result<Mosque, sqlx::Error> {
        let query = format!(
            "INSERT INTO mosques
                (name, address, longitude, latitude, contact_phone, contact_website, added_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {MOSQUE_COLUMNS}"
        );
        sqlx::query_as::<_, Mosque>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(input.longitude)
            .bind(input.latitude)
            .bind(&input.contact_phone)
            .bind(&input.contact_website)
            .bind(input.added_by)
            .fetch_one(pool)
            .await
    }

    /// Find a mosque by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mosque>, sqlx::Error> {
        let query = format!("SELECT {MOSQUE_COLUMNS} FROM mosques WHERE id = $1");
        sqlx::query_as::<_, Mosque>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List mosques, optionally filtered by verified status, newest first.
    pub async fn list(
        pool: &PgPool,
        verified: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Mosque>, sqlx::Error> {
        let query = format!(
            "SELECT {MOSQUE_COLUMNS} FROM mosques
             WHERE ($1::boolean IS NULL OR verified = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Mosque>(&query)
            .bind(verified)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find mosques within `radius_m` metres of a point, nearest first.
    ///
    /// The `earth_box` predicate narrows candidates via the GiST index; the
    /// `earth_distance` check removes the box's corner overshoot.
    pub async fn find_nearby(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        radius_m: f64,
        limit: i64,
    ) -> Result<Vec<MosqueWithDistance>, sqlx::Error> {
        let query = format!(
            "SELECT {MOSQUE_COLUMNS},
                earth_distance(ll_to_earth($1, $2), ll_to_earth(latitude, longitude)) AS distance_m
             FROM mosques
             WHERE earth_box(ll_to_earth($1, $2), $3) @> ll_to_earth(latitude, longitude)
               AND earth_distance(ll_to_earth($1, $2), ll_to_earth(latitude, longitude)) <= $3
             ORDER BY distance_m ASC
             LIMIT $4"
        );
        sqlx::query_as::<_, MosqueWithDistance>(&query)
            .bind(latitude)
            .bind(longitude)
            .bind(radius_m)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Full-text search over name and address.
    pub async fn search(
        pool: &PgPool,
        text: &str,
        limit: i64,
    ) -> Result<Vec<Mosque>, sqlx::Error> {
        let query = format!(
            "SELECT {MOSQUE_COLUMNS} FROM mosques
             WHERE to_tsvector('simple', name || ' ' || address)
                   @@ plainto_tsquery('simple', $1)
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Mosque>(&query)
            .bind(text)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark a mosque as verified. Returns `None` if the mosque does not exist.
    pub async fn set_verified(pool: &PgPool, id: DbId) -> Result<Option<Mosque>, sqlx::Error> {
        let query = format!(
            "UPDATE mosques
             SET verified = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {MOSQUE_COLUMNS}"
        );
        sqlx::query_as::<_, Mosque>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
