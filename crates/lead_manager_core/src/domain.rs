//! crates/lead_manager_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored lead record, including the server-generated fields.
#[derive(Debug, Clone)]
pub struct Lead {
    pub lead_id: Uuid,
    pub name: String,
    pub phone: String,
    pub alt_phone: Option<String>,
    pub email: String,
    pub alt_email: Option<String>,
    pub status: String,
    pub qualification: String,
    pub interest_field: String,
    pub source: String,
    pub assigned_to: String,
    pub job_interest: String,
    pub state: String,
    pub city: String,
    pub passout_year: i32,
    pub heard_from: String,
    pub created_at: DateTime<Utc>,
}

/// A candidate lead as submitted by a caller, before the server has
/// assigned an identifier or a creation timestamp.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub alt_phone: Option<String>,
    pub email: String,
    pub alt_email: Option<String>,
    pub status: String,
    pub qualification: String,
    pub interest_field: String,
    pub source: String,
    pub assigned_to: String,
    pub job_interest: String,
    pub state: String,
    pub city: String,
    pub passout_year: i32,
    pub heard_from: String,
}

/// Raised when a candidate lead is missing one of its required fields.
#[derive(Debug, Clone, thiserror::Error)]
#[error("`{0}` is required")]
pub struct ValidationError(pub &'static str);

impl NewLead {
    /// Checks that every required field is present and non-empty.
    ///
    /// This runs before any persistence call, so an invalid candidate is
    /// never handed to a store. The optional fields (`alt_phone`,
    /// `alt_email`) are not checked; `passout_year` is required at the
    /// type level and carries no range constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, &str); 12] = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("status", &self.status),
            ("qualification", &self.qualification),
            ("interestfield", &self.interest_field),
            ("source", &self.source),
            ("assignedto", &self.assigned_to),
            ("jobinterest", &self.job_interest),
            ("state", &self.state),
            ("city", &self.city),
            ("heardfrom", &self.heard_from),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError(field));
            }
        }
        Ok(())
    }
}

impl Lead {
    /// Builds a full `Lead` from a candidate by stamping a fresh identifier
    /// and the current UTC time. Pure aside from the clock and RNG, so it
    /// can be called without any I/O.
    pub fn create(candidate: NewLead) -> Self {
        Self {
            lead_id: Uuid::new_v4(),
            name: candidate.name,
            phone: candidate.phone,
            alt_phone: candidate.alt_phone,
            email: candidate.email,
            alt_email: candidate.alt_email,
            status: candidate.status,
            qualification: candidate.qualification,
            interest_field: candidate.interest_field,
            source: candidate.source,
            assigned_to: candidate.assigned_to,
            job_interest: candidate.job_interest,
            state: candidate.state,
            city: candidate.city,
            passout_year: candidate.passout_year,
            heard_from: candidate.heard_from,
            created_at: Utc::now(),
        }
    }

    /// The canonical display label for this lead's status.
    pub fn status_label(&self) -> &'static str {
        status_label(&self.status)
    }
}

/// The recognized lead status values. A lead's stored status is free-form
/// text; this enum only models the five values the dashboard and the
/// status badge know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadStatus {
    New,
    Qualified,
    FollowUp,
    Converted,
    Lost,
}

impl LeadStatus {
    /// Parses a raw status string, matching case-insensitively.
    /// Returns `None` for anything outside the five recognized values.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("new") {
            Some(Self::New)
        } else if raw.eq_ignore_ascii_case("qualified") {
            Some(Self::Qualified)
        } else if raw.eq_ignore_ascii_case("follow-up") {
            Some(Self::FollowUp)
        } else if raw.eq_ignore_ascii_case("converted") {
            Some(Self::Converted)
        } else if raw.eq_ignore_ascii_case("lost") {
            Some(Self::Lost)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Qualified => "Qualified",
            Self::FollowUp => "Follow-Up",
            Self::Converted => "Converted",
            Self::Lost => "Lost",
        }
    }
}

/// Maps a raw status string onto its display label, falling back to
/// "Unknown" for unrecognized values.
pub fn status_label(raw: &str) -> &'static str {
    match LeadStatus::parse(raw) {
        Some(status) => status.label(),
        None => "Unknown",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn candidate() -> NewLead {
        NewLead {
            name: "Alice".to_string(),
            phone: "111".to_string(),
            alt_phone: None,
            email: "a@x.com".to_string(),
            alt_email: None,
            status: "New".to_string(),
            qualification: "B.Tech".to_string(),
            interest_field: "Web Development".to_string(),
            source: "Website".to_string(),
            assigned_to: "John Doe".to_string(),
            job_interest: "Developer".to_string(),
            state: "Karnataka".to_string(),
            city: "Bengaluru".to_string(),
            passout_year: 2024,
            heard_from: "Friend".to_string(),
        }
    }

    #[test]
    fn valid_candidate_passes_validation() {
        assert!(candidate().validate().is_ok());
    }

    #[test]
    fn empty_required_field_fails_validation() {
        let mut lead = candidate();
        lead.name = String::new();
        let err = lead.validate().unwrap_err();
        assert_eq!(err.to_string(), "`name` is required");
    }

    #[test]
    fn whitespace_only_required_field_fails_validation() {
        let mut lead = candidate();
        lead.city = "   ".to_string();
        assert!(lead.validate().is_err());
    }

    #[test]
    fn missing_optional_fields_are_fine() {
        let mut lead = candidate();
        lead.alt_phone = None;
        lead.alt_email = None;
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn create_stamps_id_and_timestamp() {
        let before = Utc::now();
        let lead = Lead::create(candidate());
        assert_eq!(lead.name, "Alice");
        assert!(lead.created_at >= before);
        assert!(lead.created_at <= Utc::now());
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let a = Lead::create(candidate());
        let b = Lead::create(candidate());
        assert_ne!(a.lead_id, b.lead_id);
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(LeadStatus::parse("new"), Some(LeadStatus::New));
        assert_eq!(LeadStatus::parse("FOLLOW-UP"), Some(LeadStatus::FollowUp));
        assert_eq!(LeadStatus::parse("Converted"), Some(LeadStatus::Converted));
        assert_eq!(LeadStatus::parse("archived"), None);
    }

    #[test]
    fn status_label_falls_back_to_unknown() {
        assert_eq!(status_label("qualified"), "Qualified");
        assert_eq!(status_label("lost"), "Lost");
        assert_eq!(status_label("something else"), "Unknown");
        assert_eq!(status_label(""), "Unknown");
    }
}
