pub mod domain;
pub mod filter;
pub mod ports;
pub mod stats;

pub use domain::{status_label, Lead, LeadStatus, NewLead, ValidationError};
pub use filter::{filter_leads, MatchMode};
pub use ports::{LeadStore, StoreError, StoreResult};
pub use stats::{latest_leads, LeadStats};
