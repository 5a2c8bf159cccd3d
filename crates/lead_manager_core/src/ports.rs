//! crates/lead_manager_core/src/ports.rs
//!
//! Defines the service contract (trait) for lead persistence. The trait
//! forms the boundary of the hexagonal architecture, allowing the core to
//! be independent of the concrete database adapter.

use async_trait::async_trait;

use crate::domain::{Lead, NewLead};

//=========================================================================================
// Store Error and Result Types
//=========================================================================================

/// The two observable failure kinds of the lead store. Callers receive the
/// raw message either way; the split only matters for mapping database
/// errors at the adapter boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required field was missing, or a uniqueness constraint was violated.
    #[error("{0}")]
    Validation(String),
    /// The store was unreachable or failed for any other reason.
    #[error("{0}")]
    Infrastructure(String),
}

/// A convenience type alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

//=========================================================================================
// Store Port (Trait)
//=========================================================================================

/// The persistence port for leads. Implementations must validate the
/// candidate before writing, persist atomically, and guarantee identifier
/// uniqueness through their own constraint mechanism.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Validates and persists a candidate, returning the stored record
    /// including the generated `lead_id` and `created_at`.
    async fn insert(&self, candidate: NewLead) -> StoreResult<Lead>;

    /// Returns every stored lead ordered by `created_at` descending.
    async fn list_all(&self) -> StoreResult<Vec<Lead>>;
}
