//! # medibook-core
//!
//! The admin dashboard's write pipeline. `SaveCoordinator` drives every
//! doctor save through the same ordered stages — merge the specialty
//! selection, validate against the bundled form schema, build the backend
//! payload, dispatch, invalidate cache tags — behind the `ApiClient` and
//! `CacheInvalidator` trait seams.
//!
//! The `tags` module is the single source of truth for the cache-tag
//! vocabulary shared by reads and writes.

pub mod coordinator;
pub mod query;
pub mod request;
pub mod tags;
pub mod traits;

pub use coordinator::{SaveCoordinator, SaveOutcome};
pub use query::ListQuery;
pub use request::{ApiRequest, ApiResponse, HttpMethod};
pub use tags::CacheTag;
pub use traits::{ApiClient, CacheInvalidator};
