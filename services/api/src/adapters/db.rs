//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `LeadStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lead_manager_core::domain::{Lead, NewLead};
use lead_manager_core::ports::{LeadStore, StoreError, StoreResult};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `LeadStore` port.
#[derive(Clone)]
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    /// Creates a new `PgLeadStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

//=========================================================================================
// "Impure" Database Record Struct
//=========================================================================================

#[derive(FromRow)]
struct LeadRecord {
    lead_id: Uuid,
    name: String,
    phone: String,
    alt_phone: Option<String>,
    email: String,
    alt_email: Option<String>,
    status: String,
    qualification: String,
    interest_field: String,
    source: String,
    assigned_to: String,
    job_interest: String,
    state: String,
    city: String,
    passout_year: i32,
    heard_from: String,
    created_at: DateTime<Utc>,
}

impl LeadRecord {
    fn to_domain(self) -> Lead {
        Lead {
            lead_id: self.lead_id,
            name: self.name,
            phone: self.phone,
            alt_phone: self.alt_phone,
            email: self.email,
            alt_email: self.alt_email,
            status: self.status,
            qualification: self.qualification,
            interest_field: self.interest_field,
            source: self.source,
            assigned_to: self.assigned_to,
            job_interest: self.job_interest,
            state: self.state,
            city: self.city,
            passout_year: self.passout_year,
            heard_from: self.heard_from,
            created_at: self.created_at,
        }
    }
}

/// Maps a sqlx error onto the port's two failure kinds. A unique-constraint
/// violation means the generated identifier collided, which the contract
/// treats as a validation failure.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::Validation(db_err.to_string());
        }
    }
    StoreError::Infrastructure(e.to_string())
}

//=========================================================================================
// `LeadStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert(&self, candidate: NewLead) -> StoreResult<Lead> {
        candidate
            .validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        let lead = Lead::create(candidate);

        let record = sqlx::query_as::<_, LeadRecord>(
            r#"
            INSERT INTO leads (
                lead_id, name, phone, alt_phone, email, alt_email, status,
                qualification, interest_field, source, assigned_to, job_interest,
                state, city, passout_year, heard_from, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING lead_id, name, phone, alt_phone, email, alt_email, status,
                qualification, interest_field, source, assigned_to, job_interest,
                state, city, passout_year, heard_from, created_at
            "#,
        )
        .bind(lead.lead_id)
        .bind(&lead.name)
        .bind(&lead.phone)
        .bind(&lead.alt_phone)
        .bind(&lead.email)
        .bind(&lead.alt_email)
        .bind(&lead.status)
        .bind(&lead.qualification)
        .bind(&lead.interest_field)
        .bind(&lead.source)
        .bind(&lead.assigned_to)
        .bind(&lead.job_interest)
        .bind(&lead.state)
        .bind(&lead.city)
        .bind(lead.passout_year)
        .bind(&lead.heard_from)
        .bind(lead.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record.to_domain())
    }

    async fn list_all(&self) -> StoreResult<Vec<Lead>> {
        let records = sqlx::query_as::<_, LeadRecord>(
            r#"
            SELECT lead_id, name, phone, alt_phone, email, alt_email, status,
                qualification, interest_field, source, assigned_to, job_interest,
                state, city, passout_year, heard_from, created_at
            FROM leads
            ORDER BY created_at DESC, lead_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }
}
