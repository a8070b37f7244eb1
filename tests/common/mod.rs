//! Common test utilities shared between the mock-backed and the live tests.
//! This module is accessible in both tests/api and tests/live.

#[allow(dead_code)]
pub mod test_data;

// Re-export commonly used items for convenience
pub use helpers::*;
// MockStoryApi is only used by tests/api, but still exported for convenience.
#[allow(unused_imports)]
pub use mock_api::MockStoryApi;
#[allow(unused_imports)]
pub use test_data::*;
