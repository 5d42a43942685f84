//! Cache tag vocabulary.
//!
//! Cached backend reads are registered under string tags; writes must
//! invalidate the right tag set or the dashboard keeps serving stale data.
//! The builders here are the single source of truth for which tags each
//! entity's reads use and which tags each write must touch.

use serde::{Deserialize, Serialize};

use medibook_contracts::doctor::DoctorId;

use crate::query::ListQuery;

/// A cache tag as registered with the hosting framework's cache store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheTag(pub String);

impl CacheTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Doctor tags ───────────────────────────────────────────────────────────────

/// Tags a doctor list read registers under, derived from its query.
pub fn doctor_list_tags(query: &ListQuery) -> Vec<CacheTag> {
    vec![
        CacheTag::new("doctors-list"),
        CacheTag::new(format!("doctors-page-{}", query.page)),
        CacheTag::new(format!("doctors-search-{}", query.search_term)),
    ]
}

/// Tags a doctor detail read registers under.
pub fn doctor_detail_tags(id: &DoctorId) -> Vec<CacheTag> {
    vec![CacheTag::new(format!("doctor-{id}")), CacheTag::new("doctors-list")]
}

/// Tags to invalidate after any doctor write.
///
/// Pass the doctor id for updates/deletes so the detail view refetches;
/// creates have no id yet. Both dashboards surface doctor counts, so their
/// meta tags are always included.
pub fn doctor_write_tags(id: Option<&DoctorId>) -> Vec<CacheTag> {
    let mut tags = vec![CacheTag::new("doctors-list")];
    if let Some(id) = id {
        tags.push(CacheTag::new(format!("doctor-{id}")));
    }
    tags.extend([
        CacheTag::new("doctors-page-1"),
        CacheTag::new("doctors-search-all"),
        CacheTag::new("admin-dashboard-meta"),
        CacheTag::new("doctor-dashboard-meta"),
    ]);
    tags
}

// ── Other entity tags ─────────────────────────────────────────────────────────

/// Tags to invalidate after a specialty write.
pub fn specialty_write_tags() -> Vec<CacheTag> {
    vec![
        CacheTag::new("specialities-list"),
        CacheTag::new("admin-specialities"),
    ]
}

/// Tags to invalidate after a schedule write.
pub fn schedule_write_tags() -> Vec<CacheTag> {
    vec![CacheTag::new("schedules-list"), CacheTag::new("admin-schedules")]
}

/// Tags to invalidate after an admin-account write.
pub fn admin_write_tags() -> Vec<CacheTag> {
    vec![CacheTag::new("admins-list")]
}

/// Tags to invalidate after a patient write.
pub fn patient_write_tags() -> Vec<CacheTag> {
    vec![CacheTag::new("patients-list")]
}

/// Tags to invalidate after an appointment status change.
pub fn appointment_write_tags() -> Vec<CacheTag> {
    vec![CacheTag::new("appointments-list")]
}
