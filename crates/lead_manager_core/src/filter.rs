//! crates/lead_manager_core/src/filter.rs
//!
//! The lead filter engine: a pure function from (leads, search term,
//! status filter, match mode) to the visible subset. The UI re-invokes it
//! on every input change; it holds no state of its own.

use crate::domain::Lead;

/// How multiple filter criteria combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every non-empty criterion must pass. Empty criteria are skipped.
    #[default]
    And,
    /// At least one criterion must pass. Empty criteria count as failing,
    /// so OR with a single non-empty criterion behaves like that criterion
    /// alone.
    Or,
}

/// True when the search term appears in the lead's name or email
/// (case-insensitive) or in its phone number (case-sensitive).
fn matches_search(lead: &Lead, term: &str) -> bool {
    let term_lower = term.to_lowercase();
    lead.name.to_lowercase().contains(&term_lower)
        || lead.email.to_lowercase().contains(&term_lower)
        || lead.phone.contains(term)
}

/// True when the status filter equals the lead's status, ignoring case.
fn matches_status(lead: &Lead, status_filter: &str) -> bool {
    lead.status.eq_ignore_ascii_case(status_filter)
}

/// Derives the visible subset of `leads` for the given search term, status
/// filter and match mode. Input order is preserved and the input list is
/// never mutated; with both criteria empty the full list is returned
/// unchanged.
pub fn filter_leads(
    leads: &[Lead],
    search_term: &str,
    status_filter: &str,
    mode: MatchMode,
) -> Vec<Lead> {
    if search_term.is_empty() && status_filter.is_empty() {
        return leads.to_vec();
    }

    match mode {
        MatchMode::Or => leads
            .iter()
            .filter(|lead| {
                let search_hit = !search_term.is_empty() && matches_search(lead, search_term);
                let status_hit = !status_filter.is_empty() && matches_status(lead, status_filter);
                search_hit || status_hit
            })
            .cloned()
            .collect(),
        MatchMode::And => {
            let mut visible: Vec<Lead> = leads.to_vec();
            if !search_term.is_empty() {
                visible.retain(|lead| matches_search(lead, search_term));
            }
            if !status_filter.is_empty() {
                visible.retain(|lead| matches_status(lead, status_filter));
            }
            visible
        }
    }
}
