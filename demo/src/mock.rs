//! In-memory stand-ins for the hosting application's boundary components.
//!
//! The demo scenarios run the real save pipeline; only the HTTP transport
//! and the cache store are replaced with printing mocks so every dispatch
//! and invalidation is visible on the console.

use medibook_contracts::error::MedibookResult;
use medibook_core::{ApiClient, ApiRequest, ApiResponse, CacheInvalidator, CacheTag};

/// An API client that prints each request and accepts every write.
pub struct ConsoleClient;

impl ApiClient for ConsoleClient {
    fn send(&self, request: &ApiRequest) -> MedibookResult<ApiResponse> {
        println!("  → {} {}", request.method, request.path);
        if !request.body.is_null() {
            println!(
                "    body: {}",
                serde_json::to_string_pretty(&request.body)
                    .unwrap_or_else(|_| request.body.to_string())
            );
        }
        Ok(ApiResponse::ok("accepted"))
    }
}

/// A cache invalidator that prints each tag it is asked to drop.
pub struct ConsoleCache;

impl CacheInvalidator for ConsoleCache {
    fn invalidate(&self, tag: &CacheTag) -> MedibookResult<()> {
        println!("  ✗ cache tag invalidated: {tag}");
        Ok(())
    }
}
