//! # aex-suite -- Automation Exercise API contract suite
//!
//! The fourteen documented cases (API 1–14) as reusable async
//! [`scenarios`], plus what they share:
//!
//! - [`fixtures`]: login credentials and the account template from
//!   `data/test_data.json`.
//! - [`expect`]: status, key, message and listing-length expectations.
//! - [`setup`]: global setup (base URL log and health probe).
//! - [`telemetry`]: `tracing` subscriber installation.
//!
//! Offline tests run the scenarios against `wiremock` doubles serving the
//! documented bodies. Live tests are ignored by default:
//!
//! ```text
//! AEX_BASE_URL=https://automationexercise.com/api cargo test -p aex-suite -- --ignored
//! ```

pub mod error;
pub mod expect;
pub mod fixtures;
pub mod scenarios;
pub mod setup;
pub mod telemetry;

pub use error::SuiteError;
pub use fixtures::{FixtureError, TestData};
