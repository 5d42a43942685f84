//! The save coordinator: the ordered write pipeline for admin forms.
//!
//! Every doctor write follows the same ordering:
//!
//!   Merge selection → Validate → Build backend payload → Dispatch → Invalidate
//!
//! The ordering invariant: the API client is never called with a payload
//! that failed validation, and cache tags are only invalidated after the
//! backend confirmed the write. A declined response (`success: false`)
//! returns normally with no invalidation — the form re-renders with the
//! backend's message.

use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use medibook_contracts::doctor::DoctorId;
use medibook_contracts::error::MedibookResult;
use medibook_forms::{schemas, FormSchema, FormValidator, ValidationReport};
use medibook_selection::SelectionSession;

use crate::request::{ApiRequest, ApiResponse, HttpMethod};
use crate::tags::{doctor_write_tags, CacheTag};
use crate::traits::{ApiClient, CacheInvalidator};

/// The outcome of one save attempt.
///
/// Validation failure is an expected outcome, not an error — the form
/// surfaces the report to the user. `Err` is reserved for transport and
/// invalidation failures.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The request was dispatched. `invalidated` is empty when the backend
    /// declined the write (`response.success == false`).
    Saved {
        response: ApiResponse,
        invalidated: Vec<CacheTag>,
    },

    /// The payload failed schema validation; the backend was never called.
    Rejected { report: ValidationReport },
}

/// Drives doctor create/update/delete through the write pipeline.
///
/// Owns the boundary components — the API client and the cache
/// invalidator — plus the parsed form schemas.
pub struct SaveCoordinator {
    client: Box<dyn ApiClient>,
    cache: Box<dyn CacheInvalidator>,
    validator: FormValidator,
    doctor_create: FormSchema,
    doctor_update: FormSchema,
}

/// The fields the backend accepts inside the nested `doctor` object on
/// create. Address and experience are collected by the form but not part
/// of the create endpoint's contract.
const DOCTOR_CREATE_FIELDS: &[&str] = &[
    "name",
    "email",
    "contactNumber",
    "registrationNumber",
    "gender",
    "qualification",
    "currentWorkingPlace",
    "designation",
];

impl SaveCoordinator {
    /// Build a coordinator around the given boundary components.
    ///
    /// Returns `MedibookError::ConfigError` if a bundled schema document
    /// fails to parse.
    pub fn new(
        client: Box<dyn ApiClient>,
        cache: Box<dyn CacheInvalidator>,
    ) -> MedibookResult<Self> {
        Ok(Self {
            client,
            cache,
            validator: FormValidator::new(),
            doctor_create: schemas::doctor_create()?,
            doctor_update: schemas::doctor_update()?,
        })
    }

    /// Create a new doctor from a form payload and its selection session.
    ///
    /// The session's selected specialties are merged into the payload
    /// before validation (in create mode every selected id is net-new).
    /// On a confirmed write, all doctor read tags are invalidated.
    pub fn create_doctor(
        &self,
        form: &Value,
        selection: &SelectionSession,
    ) -> MedibookResult<SaveOutcome> {
        let mut payload = as_object(form);

        let specialties = id_strings(selection.net_new_specialties());
        if !specialties.is_empty() {
            payload.insert("specialties".to_string(), json!(specialties));
        }
        let payload = Value::Object(payload);

        debug!(specialty_count = specialties.len(), "validating doctor create payload");
        let report = self.validator.validate(&self.doctor_create, &payload);
        if !report.passed {
            warn!(errors = %report.summary(), "doctor create rejected by validation");
            return Ok(SaveOutcome::Rejected { report });
        }

        // The backend expects the account password beside a nested doctor
        // object holding only the contract fields.
        let mut doctor = Map::new();
        for key in DOCTOR_CREATE_FIELDS {
            if let Some(value) = payload.get(*key) {
                doctor.insert((*key).to_string(), value.clone());
            }
        }
        doctor.insert(
            "appointmentFee".to_string(),
            payload.get("appointmentFee").cloned().unwrap_or(json!(0)),
        );
        if !specialties.is_empty() {
            doctor.insert("specialties".to_string(), json!(specialties));
        }

        let request = ApiRequest {
            method: HttpMethod::Post,
            path: "/user/create-doctor".to_string(),
            body: json!({
                "password": payload.get("password").cloned().unwrap_or(Value::Null),
                "doctor": doctor,
            }),
        };

        self.dispatch(request, doctor_write_tags(None))
    }

    /// Patch an existing doctor with a sparse form payload.
    ///
    /// The selection session contributes `specialties` (net-new ids to
    /// attach) and `removeSpecialties` (deselected original ids); either
    /// list is omitted entirely when empty. On a confirmed write the
    /// doctor's detail tag is invalidated along with the list tags.
    pub fn update_doctor(
        &self,
        id: &DoctorId,
        form: &Value,
        selection: &SelectionSession,
    ) -> MedibookResult<SaveOutcome> {
        let mut payload = as_object(form);

        let attach = id_strings(selection.net_new_specialties());
        if !attach.is_empty() {
            payload.insert("specialties".to_string(), json!(attach));
        }
        let detach = id_strings(selection.removed().to_vec());
        if !detach.is_empty() {
            payload.insert("removeSpecialties".to_string(), json!(detach));
        }
        let payload = Value::Object(payload);

        debug!(
            doctor_id = %id,
            attach_count = attach.len(),
            detach_count = detach.len(),
            "validating doctor update payload"
        );
        let report = self.validator.validate(&self.doctor_update, &payload);
        if !report.passed {
            warn!(doctor_id = %id, errors = %report.summary(), "doctor update rejected by validation");
            return Ok(SaveOutcome::Rejected { report });
        }

        let request = ApiRequest {
            method: HttpMethod::Patch,
            path: format!("/doctor/{id}"),
            body: payload,
        };

        self.dispatch(request, doctor_write_tags(Some(id)))
    }

    /// Delete a doctor. `soft` marks the record deleted instead of
    /// removing it.
    pub fn delete_doctor(&self, id: &DoctorId, soft: bool) -> MedibookResult<SaveOutcome> {
        let path = if soft {
            format!("/doctor/soft/{id}")
        } else {
            format!("/doctor/{id}")
        };
        let request = ApiRequest {
            method: HttpMethod::Delete,
            path,
            body: Value::Null,
        };

        self.dispatch(request, doctor_write_tags(Some(id)))
    }

    // ── Shared tail of the pipeline ───────────────────────────────────────────

    /// Dispatch a validated request and invalidate `tags` if the backend
    /// confirms the write.
    fn dispatch(&self, request: ApiRequest, tags: Vec<CacheTag>) -> MedibookResult<SaveOutcome> {
        debug!(method = %request.method, path = %request.path, "dispatching backend request");
        let response = self.client.send(&request)?;

        if !response.success {
            warn!(
                path = %request.path,
                message = %response.message,
                "backend declined the write, skipping invalidation"
            );
            return Ok(SaveOutcome::Saved {
                response,
                invalidated: Vec::new(),
            });
        }

        for tag in &tags {
            self.cache.invalidate(tag)?;
        }
        info!(
            path = %request.path,
            tag_count = tags.len(),
            "write confirmed, cache tags invalidated"
        );

        Ok(SaveOutcome::Saved {
            response,
            invalidated: tags,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn as_object(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        // A non-object form payload carries no fields; validation of the
        // resulting empty object reports every required field as missing.
        _ => Map::new(),
    }
}

fn id_strings(ids: Vec<medibook_contracts::specialty::SpecialtyId>) -> Vec<String> {
    ids.into_iter().map(|id| id.0).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::{json, Value};

    use medibook_contracts::doctor::{DoctorId, DoctorRecord, SpecialtyAssignment};
    use medibook_contracts::error::{MedibookError, MedibookResult};
    use medibook_contracts::specialty::SpecialtyId;
    use medibook_selection::SelectionSession;

    use crate::request::{ApiRequest, ApiResponse, HttpMethod};
    use crate::tags::CacheTag;
    use crate::traits::{ApiClient, CacheInvalidator};

    use super::{SaveCoordinator, SaveOutcome};

    // ── Mock helpers ──────────────────────────────────────────────────────────

    /// An API client that records every request and returns a canned result.
    struct MockClient {
        requests: Arc<Mutex<Vec<ApiRequest>>>,
        result: fn() -> MedibookResult<ApiResponse>,
    }

    impl MockClient {
        fn succeeding() -> Self {
            Self {
                requests: Arc::new(Mutex::new(vec![])),
                result: || Ok(ApiResponse::ok("created")),
            }
        }

        fn declining() -> Self {
            Self {
                requests: Arc::new(Mutex::new(vec![])),
                result: || Ok(ApiResponse::declined("duplicate registration number")),
            }
        }

        fn failing() -> Self {
            Self {
                requests: Arc::new(Mutex::new(vec![])),
                result: || {
                    Err(MedibookError::RequestFailed {
                        reason: "connection refused".to_string(),
                    })
                },
            }
        }
    }

    impl ApiClient for MockClient {
        fn send(&self, request: &ApiRequest) -> MedibookResult<ApiResponse> {
            self.requests.lock().unwrap().push(request.clone());
            (self.result)()
        }
    }

    /// An invalidator that records every tag it is asked to invalidate.
    struct MockCache {
        tags: Arc<Mutex<Vec<CacheTag>>>,
    }

    impl MockCache {
        fn new() -> Self {
            Self {
                tags: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    impl CacheInvalidator for MockCache {
        fn invalidate(&self, tag: &CacheTag) -> MedibookResult<()> {
            self.tags.lock().unwrap().push(tag.clone());
            Ok(())
        }
    }

    fn valid_create_form() -> Value {
        json!({
            "password": "s3cret-pass",
            "name": "Dr. Ayesha Rahman",
            "email": "ayesha@clinic.example",
            "contactNumber": "01711112222",
            "address": "12 Green Road",
            "registrationNumber": "REG-4521",
            "experience": 8,
            "gender": "FEMALE",
            "appointmentFee": 1500,
            "qualification": "MBBS, FCPS",
            "currentWorkingPlace": "City Medical College",
            "designation": "Consultant"
        })
    }

    fn doctor_with(specialties: &[&str]) -> DoctorRecord {
        DoctorRecord::new("d-9", "Dr. Ayesha Rahman", "ayesha@clinic.example").with_specialties(
            specialties.iter().map(|s| SpecialtyAssignment::of(*s)).collect(),
        )
    }

    const UUID_A: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";
    const UUID_B: &str = "91f6c2aa-33d0-4b2e-8f0d-2a5f1f8f3b11";

    // ── Test cases ────────────────────────────────────────────────────────────

    /// Core pipeline invariant: a payload that fails validation never
    /// reaches the API client and never touches the cache.
    #[test]
    fn rejected_payload_never_reaches_the_backend() {
        let client = MockClient::succeeding();
        let requests = client.requests.clone();
        let cache = MockCache::new();
        let tags = cache.tags.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(cache)).unwrap();

        let outcome = coordinator
            .create_doctor(&json!({ "name": "Al" }), &SelectionSession::for_create())
            .unwrap();

        match outcome {
            SaveOutcome::Rejected { report } => {
                assert!(!report.passed);
                assert!(report.summary().contains("Password is required"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
        assert!(requests.lock().unwrap().is_empty(), "no request may be sent");
        assert!(tags.lock().unwrap().is_empty(), "no tag may be invalidated");
    }

    /// A valid create builds the nested backend payload and invalidates
    /// the doctor read tags.
    #[test]
    fn create_builds_nested_payload_and_invalidates() {
        let client = MockClient::succeeding();
        let requests = client.requests.clone();
        let cache = MockCache::new();
        let tags = cache.tags.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(cache)).unwrap();

        let mut selection = SelectionSession::for_create();
        selection.set_pending_choice(SpecialtyId::new(UUID_A));
        selection.confirm_add();

        let outcome = coordinator
            .create_doctor(&valid_create_form(), &selection)
            .unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/user/create-doctor");

        // Password sits beside the nested doctor object.
        assert_eq!(request.body["password"], "s3cret-pass");
        let doctor = &request.body["doctor"];
        assert_eq!(doctor["name"], "Dr. Ayesha Rahman");
        assert_eq!(doctor["appointmentFee"], 1500);
        assert_eq!(doctor["specialties"], json!([UUID_A]));
        // Address and experience are form-only fields.
        assert!(doctor.get("address").is_none());
        assert!(doctor.get("experience").is_none());

        match outcome {
            SaveOutcome::Saved { invalidated, .. } => {
                assert!(!invalidated.is_empty());
            }
            other => panic!("expected Saved, got {:?}", other),
        }
        let tags = tags.lock().unwrap();
        assert!(tags.iter().any(|t| t.as_str() == "doctors-list"));
        assert!(tags.iter().any(|t| t.as_str() == "admin-dashboard-meta"));
        assert!(tags.iter().any(|t| t.as_str() == "doctor-dashboard-meta"));
        assert_eq!(
            tags.len(),
            5,
            "create invalidates the list and meta tags only, no detail tag"
        );
    }

    /// With nothing selected, the create payload omits the specialties key
    /// entirely rather than sending an empty array.
    #[test]
    fn create_omits_empty_specialties() {
        let client = MockClient::succeeding();
        let requests = client.requests.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(MockCache::new())).unwrap();

        coordinator
            .create_doctor(&valid_create_form(), &SelectionSession::for_create())
            .unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0].body["doctor"].get("specialties").is_none());
    }

    /// An update merges the reconciler's two output lists into the patch
    /// and invalidates the doctor's detail tag.
    #[test]
    fn update_carries_attach_and_detach_lists() {
        let client = MockClient::succeeding();
        let requests = client.requests.clone();
        let cache = MockCache::new();
        let tags = cache.tags.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(cache)).unwrap();

        // Original {A}; user removes A and adds B.
        let record = doctor_with(&[UUID_A]);
        let mut selection = SelectionSession::for_edit(&record);
        selection.remove(&SpecialtyId::new(UUID_A));
        selection.set_pending_choice(SpecialtyId::new(UUID_B));
        selection.confirm_add();

        let id = DoctorId::new("d-9");
        coordinator
            .update_doctor(&id, &json!({ "appointmentFee": 2000 }), &selection)
            .unwrap();

        let requests = requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path, "/doctor/d-9");
        assert_eq!(request.body["specialties"], json!([UUID_B]));
        assert_eq!(request.body["removeSpecialties"], json!([UUID_A]));
        assert_eq!(request.body["appointmentFee"], 2000);

        let tags = tags.lock().unwrap();
        assert!(tags.iter().any(|t| t.as_str() == "doctor-d-9"));
    }

    /// When the reconciler reports no net change, neither specialty list
    /// appears in the patch.
    #[test]
    fn update_with_no_specialty_changes_omits_both_lists() {
        let client = MockClient::succeeding();
        let requests = client.requests.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(MockCache::new())).unwrap();

        // Remove then re-add: net effect is zero.
        let record = doctor_with(&[UUID_A]);
        let mut selection = SelectionSession::for_edit(&record);
        selection.remove(&SpecialtyId::new(UUID_A));
        selection.set_pending_choice(SpecialtyId::new(UUID_A));
        selection.confirm_add();

        coordinator
            .update_doctor(&DoctorId::new("d-9"), &json!({ "name": "Dr. A. Rahman" }), &selection)
            .unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0].body.get("specialties").is_none());
        assert!(requests[0].body.get("removeSpecialties").is_none());
    }

    /// A declined backend response returns normally but must not
    /// invalidate anything — the cached reads are still correct.
    #[test]
    fn declined_write_skips_invalidation() {
        let client = MockClient::declining();
        let cache = MockCache::new();
        let tags = cache.tags.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(cache)).unwrap();

        let outcome = coordinator
            .create_doctor(&valid_create_form(), &SelectionSession::for_create())
            .unwrap();

        match outcome {
            SaveOutcome::Saved { response, invalidated } => {
                assert!(!response.success);
                assert!(response.message.contains("duplicate"));
                assert!(invalidated.is_empty());
            }
            other => panic!("expected Saved with declined response, got {:?}", other),
        }
        assert!(tags.lock().unwrap().is_empty());
    }

    /// A transport failure propagates and skips invalidation.
    #[test]
    fn transport_failure_propagates() {
        let client = MockClient::failing();
        let cache = MockCache::new();
        let tags = cache.tags.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(cache)).unwrap();

        let result =
            coordinator.create_doctor(&valid_create_form(), &SelectionSession::for_create());

        match result {
            Err(MedibookError::RequestFailed { reason }) => {
                assert!(reason.contains("connection refused"));
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
        assert!(tags.lock().unwrap().is_empty());
    }

    /// Delete goes to the soft or hard endpoint and invalidates the
    /// doctor's tags either way.
    #[test]
    fn delete_selects_endpoint_by_mode() {
        let client = MockClient::succeeding();
        let requests = client.requests.clone();

        let coordinator =
            SaveCoordinator::new(Box::new(client), Box::new(MockCache::new())).unwrap();

        let id = DoctorId::new("d-9");
        coordinator.delete_doctor(&id, true).unwrap();
        coordinator.delete_doctor(&id, false).unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].path, "/doctor/soft/d-9");
        assert_eq!(requests[1].path, "/doctor/d-9");
        assert!(requests.iter().all(|r| r.method == HttpMethod::Delete));
    }
}
