//! Integration tests for the Sonaverse site and admin panel.
//!
//! The tests in `tests/` drive the running servers over HTTP and are ignored
//! by default because they need live services and a seeded database.
//!
//! # Running
//!
//! ```bash
//! # Terminal 1: start the admin panel
//! cargo run --bin sonaverse-admin
//!
//! # Terminal 2: start the public site
//! cargo run --bin sonaverse-site
//!
//! # Terminal 3: run the tests
//! ADMIN_TEST_EMAIL=ceo@sonaverse.kr ADMIN_TEST_PASSWORD=... \
//!     cargo test -p sonaverse-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_BASE_URL` - admin panel base URL (default: `http://localhost:3001`)
//! - `SITE_BASE_URL` - public site base URL (default: `http://localhost:3000`)
//! - `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD` - credentials of an existing
//!   admin account used by the authenticated tests
