//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use lead_manager_core::domain::{Lead, NewLead};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        create_lead_handler,
        list_leads_handler,
    ),
    components(
        schemas(CreateLeadRequest, LeadResponse, ErrorResponse)
    ),
    tags(
        (name = "Lead Manager API", description = "API endpoints for creating and listing leads.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// A candidate lead as submitted by the frontend. Field names match the
/// original wire format. String fields default to empty when absent so a
/// missing required field surfaces as a validation failure from the store
/// rather than a deserialization error.
#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct CreateLeadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub altphone: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub altemail: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub interestfield: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub assignedto: String,
    #[serde(default)]
    pub jobinterest: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    pub passoutyear: i32,
    #[serde(default)]
    pub heardfrom: String,
}

impl CreateLeadRequest {
    fn into_candidate(self) -> NewLead {
        NewLead {
            name: self.name,
            phone: self.phone,
            alt_phone: self.altphone,
            email: self.email,
            alt_email: self.altemail,
            status: self.status,
            qualification: self.qualification,
            interest_field: self.interestfield,
            source: self.source,
            assigned_to: self.assignedto,
            job_interest: self.jobinterest,
            state: self.state,
            city: self.city,
            passout_year: self.passoutyear,
            heard_from: self.heardfrom,
        }
    }
}

/// A stored lead as returned to the frontend, including the
/// server-generated identifier and creation timestamp.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct LeadResponse {
    #[serde(rename = "leadId")]
    pub lead_id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altphone: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altemail: Option<String>,
    pub status: String,
    pub qualification: String,
    pub interestfield: String,
    pub source: String,
    pub assignedto: String,
    pub jobinterest: String,
    pub state: String,
    pub city: String,
    pub passoutyear: i32,
    pub heardfrom: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl LeadResponse {
    fn from_domain(lead: Lead) -> Self {
        Self {
            lead_id: lead.lead_id,
            name: lead.name,
            phone: lead.phone,
            altphone: lead.alt_phone,
            email: lead.email,
            altemail: lead.alt_email,
            status: lead.status,
            qualification: lead.qualification,
            interestfield: lead.interest_field,
            source: lead.source,
            assignedto: lead.assigned_to,
            jobinterest: lead.job_interest,
            state: lead.state,
            city: lead.city,
            passoutyear: lead.passout_year,
            heardfrom: lead.heard_from,
            created_at: lead.created_at,
        }
    }
}

/// The generic failure payload: the raw store error message, nothing more.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Create a new lead.
///
/// Validates and persists the candidate, returning the stored record with
/// its generated identifier and creation timestamp.
#[utoipa::path(
    post,
    path = "/api/leads",
    request_body = CreateLeadRequest,
    responses(
        (status = 201, description = "Lead created successfully", body = LeadResponse),
        (status = 500, description = "Validation or store failure", body = ErrorResponse)
    )
)]
pub async fn create_lead_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<LeadResponse>), (StatusCode, Json<ErrorResponse>)> {
    match app_state.store.insert(payload.into_candidate()).await {
        Ok(lead) => Ok((StatusCode::CREATED, Json(LeadResponse::from_domain(lead)))),
        Err(e) => {
            error!("Failed to create lead: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            ))
        }
    }
}

/// List all leads, most recently created first.
#[utoipa::path(
    get,
    path = "/api/leads",
    responses(
        (status = 200, description = "All leads, newest first", body = [LeadResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_leads_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<LeadResponse>>), (StatusCode, Json<ErrorResponse>)> {
    match app_state.store.list_all().await {
        Ok(leads) => {
            let body = leads.into_iter().map(LeadResponse::from_domain).collect();
            Ok((StatusCode::OK, Json(body)))
        }
        Err(e) => {
            error!("Failed to list leads: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use async_trait::async_trait;
    use lead_manager_core::ports::{LeadStore, StoreError, StoreResult};
    use std::sync::Mutex;

    /// An in-memory store double mirroring the database adapter's contract.
    #[derive(Default)]
    struct MemLeadStore {
        leads: Mutex<Vec<Lead>>,
        fail_listing: bool,
    }

    #[async_trait]
    impl LeadStore for MemLeadStore {
        async fn insert(&self, candidate: NewLead) -> StoreResult<Lead> {
            candidate
                .validate()
                .map_err(|e| StoreError::Validation(e.to_string()))?;
            let lead = Lead::create(candidate);
            self.leads.lock().unwrap().push(lead.clone());
            Ok(lead)
        }

        async fn list_all(&self) -> StoreResult<Vec<Lead>> {
            if self.fail_listing {
                return Err(StoreError::Infrastructure(
                    "connection refused".to_string(),
                ));
            }
            let mut leads = self.leads.lock().unwrap().clone();
            leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(leads)
        }
    }

    fn test_state(store: MemLeadStore) -> State<Arc<AppState>> {
        let config = Config {
            bind_address: "127.0.0.1:5000".parse().unwrap(),
            database_url: "postgres://unused".to_string(),
            log_level: tracing::Level::INFO,
            frontend_url: None,
        };
        State(Arc::new(AppState {
            store: Arc::new(store),
            config: Arc::new(config),
        }))
    }

    fn request_json(name: &str) -> CreateLeadRequest {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "phone": "111",
            "email": "a@x.com",
            "status": "New",
            "qualification": "B.Tech",
            "interestfield": "Web Development",
            "source": "Website",
            "assignedto": "John Doe",
            "jobinterest": "Developer",
            "state": "Karnataka",
            "city": "Bengaluru",
            "passoutyear": 2024,
            "heardfrom": "Friend"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_generated_fields() {
        let state = test_state(MemLeadStore::default());
        let (status, Json(body)) = create_lead_handler(state, Json(request_json("Alice")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.name, "Alice");
        assert!(body.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn create_with_empty_required_field_returns_500_message() {
        let state = test_state(MemLeadStore::default());
        let (status, Json(body)) = create_lead_handler(state, Json(request_json("")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "`name` is required");
    }

    #[tokio::test]
    async fn invalid_create_does_not_change_list_count() {
        let state = test_state(MemLeadStore::default());
        create_lead_handler(state.clone(), Json(request_json("Alice")))
            .await
            .unwrap();
        create_lead_handler(state.clone(), Json(request_json("")))
            .await
            .unwrap_err();

        let (_, Json(leads)) = list_leads_handler(state).await.unwrap();
        assert_eq!(leads.len(), 1);
    }

    #[tokio::test]
    async fn list_returns_200_newest_first() {
        let state = test_state(MemLeadStore::default());
        for name in ["first", "second"] {
            create_lead_handler(state.clone(), Json(request_json(name)))
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let (status, Json(leads)) = list_leads_handler(state).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = leads.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn list_failure_surfaces_raw_message() {
        let state = test_state(MemLeadStore {
            fail_listing: true,
            ..Default::default()
        });
        let (status, Json(body)) = list_leads_handler(state).await.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "connection refused");
    }

    #[test]
    fn request_accepts_original_wire_format_with_missing_strings() {
        // Absent string fields deserialize to empty and fail validation
        // later; absent optional fields stay None.
        let req: CreateLeadRequest =
            serde_json::from_value(serde_json::json!({ "passoutyear": 2024 })).unwrap();
        assert_eq!(req.name, "");
        assert!(req.altphone.is_none());
    }

    #[test]
    fn response_uses_original_wire_field_names() {
        let lead = Lead::create(request_json("Alice").into_candidate());
        let value = serde_json::to_value(LeadResponse::from_domain(lead)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("leadId"));
        assert!(obj.contains_key("createdAt"));
        assert!(obj.contains_key("passoutyear"));
        assert!(obj.contains_key("assignedto"));
        // Unset optional fields are omitted, matching the document store's
        // behavior of not materializing absent fields.
        assert!(!obj.contains_key("altphone"));
    }
}
