//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use lead_manager_core::ports::LeadStore;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers. The store handle is constructed explicitly at startup and
/// injected here rather than living in a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LeadStore>,
    pub config: Arc<Config>,
}
