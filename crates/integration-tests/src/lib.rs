//! Integration test support for the Miola catalog backend.
//!
//! The actual tests live in `tests/` and run against a live server.
//! They are `#[ignore]`d by default; run them with a server up:
//!
//! ```bash
//! cargo run -p miola-server &
//! cargo test -p miola-integration-tests -- --ignored
//! ```

/// Base URL for the backend API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("MIOLA_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}
