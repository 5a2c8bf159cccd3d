//! crates/lead_manager_core/src/stats.rs
//!
//! Dashboard aggregation: status bucket counts and the "latest N" view.
//! Pure functions over the in-memory lead list; callers re-run them
//! whenever the list changes.

use crate::domain::{Lead, LeadStatus};

/// The dashboard's aggregate counts: the full total plus one bucket per
/// recognized status. Leads with an unrecognized status count toward
/// `total` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeadStats {
    pub total: usize,
    pub new: usize,
    pub qualified: usize,
    pub follow_up: usize,
    pub converted: usize,
    pub lost: usize,
}

impl LeadStats {
    pub fn compute(leads: &[Lead]) -> Self {
        let mut stats = Self {
            total: leads.len(),
            ..Self::default()
        };
        for lead in leads {
            match LeadStatus::parse(&lead.status) {
                Some(LeadStatus::New) => stats.new += 1,
                Some(LeadStatus::Qualified) => stats.qualified += 1,
                Some(LeadStatus::FollowUp) => stats.follow_up += 1,
                Some(LeadStatus::Converted) => stats.converted += 1,
                Some(LeadStatus::Lost) => stats.lost += 1,
                None => {}
            }
        }
        stats
    }
}

/// Returns the `n` most recently created leads, newest first. Sorts a
/// copy, so the caller's list keeps its order.
pub fn latest_leads(leads: &[Lead], n: usize) -> Vec<Lead> {
    let mut sorted = leads.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}
