//! Shared fixtures for the integration tests.
//!
//! [`FakeAdminApi`] is a small in-memory admin backend speaking the same
//! URLs as the real one, so controllers can be exercised end to end
//! without a network.

pub mod fake_api;

pub use fake_api::FakeAdminApi;

use std::sync::Arc;

use abd_admin::auth::AdminCredentials;
use abd_admin::resource::{Resource, ResourceApi, ResourceController};

pub const FAKE_BASE: &str = "http://fake.test/admin";

pub fn test_credentials() -> AdminCredentials {
    AdminCredentials::new("admin", "abcd-1234")
}

/// A controller for `R` talking to `api`.
pub fn controller<R: Resource>(
    api: &Arc<FakeAdminApi>,
    page_size: u32,
) -> ResourceController<R, FakeAdminApi> {
    let resource_api = ResourceApi::with_base(Arc::clone(api), FAKE_BASE, test_credentials());
    ResourceController::new(resource_api).with_page_size(page_size)
}
