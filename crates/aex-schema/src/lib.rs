//! # aex-schema -- Automation Exercise API contracts
//!
//! Structural contracts for every request and response the Automation
//! Exercise API (`https://automationexercise.com/api`) exchanges.
//!
//! ## Schema Registry (`registry`)
//!
//! JSON Schema documents under `schemas/` are embedded at compile time and
//! compiled once into [`SchemaRegistry`]. Each shape is named by a
//! [`SchemaId`]; literal fields (`responseCode`, fixed error messages),
//! closed enumerations (account titles) and minimum array lengths are part
//! of the schema, not of the calling code.
//!
//! ## Validation Facade (`facade`)
//!
//! One function per endpoint outcome, e.g.
//! [`facade::validate_products_list`] or
//! [`facade::validate_login_missing_parameter`]. Each returns the typed
//! value or a [`SchemaValidationError`] listing every violated field by
//! dotted path.
//!
//! ## Outcomes (`outcome`)
//!
//! [`ApiOutcome::classify`] maps an `(Endpoint, status, body)` triple onto
//! the closed union of documented responses.
//!
//! ## Crate Policy
//!
//! - No I/O. Bodies arrive already parsed and are never modified.
//! - A body either satisfies its schema completely or is rejected with
//!   every violation; there is no partial acceptance.

pub mod brands;
pub mod facade;
pub mod login;
mod number;
pub mod outcome;
pub mod products;
pub mod registry;
pub mod search;
pub mod status;
pub mod user;
pub mod validate;

pub use brands::{Brand, BrandsListResponse};
pub use login::LoginRequest;
pub use outcome::{ApiOutcome, Endpoint, OutcomeError};
pub use products::{Category, Product, ProductsListResponse, SearchProductResponse, UserType};
pub use registry::{SchemaId, SchemaRegistry};
pub use search::SearchProductRequest;
pub use status::{
    FieldError, StatusMessage, ValidationErrorResponse, METHOD_NOT_SUPPORTED_MESSAGE,
    MISSING_PARAMETER_MESSAGE,
};
pub use user::{
    CreateUserRequest, DeleteUserRequest, GetUserAccountResponse, Title, UpdateUserRequest,
    UserAccount,
};
pub use validate::{SchemaValidationError, ValidationViolations, Violation};
