//! Trait seams to the external collaborators.
//!
//! The two traits mark the boundary of this workspace: everything behind
//! them (HTTP transport, the rendering framework's cache store) belongs to
//! the hosting application. The save coordinator only ever talks to these
//! traits, so the whole pipeline is testable with in-memory mocks.

use medibook_contracts::error::MedibookResult;

use crate::request::{ApiRequest, ApiResponse};
use crate::tags::CacheTag;

/// Transport to the backend REST API.
///
/// Implementations are expected to return `Ok` with a `success: false`
/// envelope when the backend rejects the operation, and `Err` only for
/// transport-level failures (the request never reached the backend or the
/// response could not be read).
pub trait ApiClient: Send + Sync {
    /// Deliver one request and return the backend's response envelope.
    fn send(&self, request: &ApiRequest) -> MedibookResult<ApiResponse>;
}

/// The hosting framework's cache-tag invalidation hook.
///
/// After a successful save the coordinator invalidates every tag the
/// affected entity's cached reads were registered under, so stale lists
/// and detail views are refetched.
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate all cache entries registered under `tag`.
    fn invalidate(&self, tag: &CacheTag) -> MedibookResult<()>;
}
