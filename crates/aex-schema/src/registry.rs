//! # Schema Registry
//!
//! Every request and response shape the Automation Exercise API exchanges is
//! described by a JSON Schema (Draft 2020-12) document under `schemas/` at
//! the repository root. The documents are embedded at compile time and
//! identified by the closed [`SchemaId`] enum, so a shape can never be
//! looked up by a misspelled name at runtime.
//!
//! ## Reference Resolution
//!
//! Every document carries an `$id` of the form
//! `https://schemas.aex.invalid/aex/<file>`. Relative `$ref`s such as
//! `product.schema.json` or `defs.schema.json#/$defs/title` resolve against
//! that base and are served from the embedded set by a local retriever.
//! The `.invalid` TLD guarantees that an unknown reference fails the build
//! of the validator instead of reaching the network.
//!
//! ## Lifetime
//!
//! [`SchemaRegistry::global`] compiles all validators once per process.
//! The registry is immutable afterwards and shared freely across threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use jsonschema::{Retrieve, Uri, Validator};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::validate::{validate_document, SchemaValidationError};

/// Base URI shared by every embedded schema `$id`.
pub const SCHEMA_URI_PREFIX: &str = "https://schemas.aex.invalid/aex/";

macro_rules! schema_ids {
    ($($(#[$doc:meta])* $variant:ident => $file:literal),+ $(,)?) => {
        /// Identifier of one embedded request or response shape.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SchemaId {
            $($(#[$doc])* $variant,)+
        }

        impl SchemaId {
            /// Every shape known to the registry.
            pub const ALL: &'static [SchemaId] = &[$(SchemaId::$variant,)+];

            /// File name of the schema document under `schemas/`.
            pub fn file_name(self) -> &'static str {
                match self {
                    $(SchemaId::$variant => $file,)+
                }
            }

            fn source(self) -> &'static str {
                match self {
                    $(SchemaId::$variant => include_str!(concat!("../../../schemas/", $file)),)+
                }
            }
        }
    };
}

schema_ids! {
    /// A single product with its nested category.
    Product => "product.schema.json",
    /// `GET /productsList` success (API 1).
    ProductsList => "products-list.schema.json",
    /// 405 with the fixed "not supported" message (API 2, 4, 9).
    MethodNotSupported => "method-not-supported.schema.json",
    /// A single brand.
    Brand => "brand.schema.json",
    /// `GET /brandsList` success (API 3).
    BrandsList => "brands-list.schema.json",
    /// `POST /searchProduct` success (API 5).
    SearchProduct => "search-product.schema.json",
    /// `POST /searchProduct` form body.
    SearchRequest => "search-request.schema.json",
    /// `POST /searchProduct` without `search_product` (API 6).
    SearchMissingParameter => "search-missing-parameter.schema.json",
    /// `POST /verifyLogin` with valid details (API 7).
    LoginSuccess => "login-success.schema.json",
    /// `POST /verifyLogin` form body.
    LoginRequest => "login-request.schema.json",
    /// `POST /verifyLogin` without email (API 8).
    LoginMissingParameter => "login-missing-parameter.schema.json",
    /// `DELETE /verifyLogin` (API 9).
    LoginMethodNotSupported => "login-method-not-supported.schema.json",
    /// `POST /verifyLogin` with invalid details (API 10).
    LoginFailed => "login-failed.schema.json",
    /// `POST /createAccount` success (API 11).
    CreateUserSuccess => "create-user-success.schema.json",
    /// `POST /createAccount` for an email already registered.
    UserExists => "user-exists.schema.json",
    /// `POST /createAccount` form body.
    CreateUserRequest => "create-user-request.schema.json",
    /// `DELETE /deleteAccount` success (API 12).
    DeleteUserSuccess => "delete-user-success.schema.json",
    /// `DELETE /deleteAccount` form body.
    DeleteUserRequest => "delete-user-request.schema.json",
    /// `PUT /updateAccount` success (API 13).
    UpdateUserSuccess => "update-user-success.schema.json",
    /// `PUT /updateAccount` form body.
    UpdateUserRequest => "update-user-request.schema.json",
    /// `GET /getUserDetailByEmail` success (API 14).
    GetUserAccount => "get-user-account.schema.json",
    /// Account lookup miss (API 12, 13, 14).
    UserNotFound => "user-not-found.schema.json",
    /// A user account record.
    UserAccount => "user-account.schema.json",
    /// 400 with the fixed "parameter is missing" message.
    BadRequest => "bad-request.schema.json",
    /// Any 4xx/5xx code with a free-text message.
    GenericError => "generic-error.schema.json",
    /// 404 with a free-text message.
    NotFound => "not-found.schema.json",
    /// 400/422 with an optional per-field error list.
    ValidationError => "validation-error.schema.json",
}

/// Documents referenced by other schemas but never validated against
/// directly.
const SHARED_DOCUMENTS: &[(&str, &str)] = &[(
    "defs.schema.json",
    include_str!("../../../schemas/defs.schema.json"),
)];

impl SchemaId {
    /// Canonical `$id` URI of the schema document.
    pub fn uri(self) -> String {
        format!("{SCHEMA_URI_PREFIX}{}", self.file_name())
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.file_name();
        f.write_str(name.strip_suffix(".schema.json").unwrap_or(name))
    }
}

/// Resolves `$ref` URIs against the embedded documents.
#[derive(Clone)]
struct LocalSchemaRetriever {
    schemas_by_uri: Arc<HashMap<String, Value>>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let document = uri_str.split('#').next().unwrap_or(uri_str);
        self.schemas_by_uri
            .get(document)
            .cloned()
            .ok_or_else(|| format!("no embedded schema for {uri_str}").into())
    }
}

/// Compiled validators for every [`SchemaId`].
pub struct SchemaRegistry {
    validators: HashMap<SchemaId, Validator>,
}

static GLOBAL: OnceLock<Result<SchemaRegistry, SchemaValidationError>> = OnceLock::new();

impl SchemaRegistry {
    /// Parse every embedded document and compile one validator per shape.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError` if an embedded document is not valid JSON
    /// and `ValidatorBuildError` if a schema does not compile.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let mut schemas_by_uri = HashMap::new();
        for (file_name, source) in SHARED_DOCUMENTS {
            schemas_by_uri.insert(format!("{SCHEMA_URI_PREFIX}{file_name}"), parse(file_name, source)?);
        }
        let mut documents = Vec::with_capacity(SchemaId::ALL.len());
        for &id in SchemaId::ALL {
            let value = parse(id.file_name(), id.source())?;
            schemas_by_uri.insert(id.uri(), value.clone());
            documents.push((id, value));
        }

        let retriever = LocalSchemaRetriever {
            schemas_by_uri: Arc::new(schemas_by_uri),
        };

        let mut validators = HashMap::with_capacity(documents.len());
        for (id, document) in documents {
            let mut opts = jsonschema::options();
            opts.with_draft(jsonschema::Draft::Draft202012);
            opts.with_retriever(retriever.clone());
            let validator = opts
                .build(&document)
                .map_err(|e| SchemaValidationError::ValidatorBuildError {
                    schema: id,
                    reason: e.to_string(),
                })?;
            validators.insert(id, validator);
        }

        Ok(Self { validators })
    }

    /// The process-wide registry, compiled on first use.
    ///
    /// # Errors
    ///
    /// Returns the construction error of [`SchemaRegistry::new`]; the same
    /// error is returned on every call if the first construction failed.
    pub fn global() -> Result<&'static SchemaRegistry, SchemaValidationError> {
        GLOBAL
            .get_or_init(SchemaRegistry::new)
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Number of compiled shapes.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no shape is registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Validate `instance` against the shape `id`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` carrying every violation if the document
    /// does not conform.
    pub fn validate(&self, instance: &Value, id: SchemaId) -> Result<(), SchemaValidationError> {
        let validator =
            self.validators
                .get(&id)
                .ok_or_else(|| SchemaValidationError::ValidatorBuildError {
                    schema: id,
                    reason: "validator not registered".to_string(),
                })?;
        validate_document(validator, instance, id)
    }

    /// Validate `instance` against `id`, then decode it into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on structural violations and `Decode` if
    /// the accepted document does not fit `T`.
    pub fn decode<T: DeserializeOwned>(
        &self,
        instance: &Value,
        id: SchemaId,
    ) -> Result<T, SchemaValidationError> {
        self.validate(instance, id)?;
        T::deserialize(instance).map_err(|e| SchemaValidationError::Decode {
            schema: id,
            source: Arc::new(e),
        })
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<SchemaId> = self.validators.keys().copied().collect();
        ids.sort();
        f.debug_struct("SchemaRegistry").field("schemas", &ids).finish()
    }
}

fn parse(file_name: &str, source: &str) -> Result<Value, SchemaValidationError> {
    serde_json::from_str(source).map_err(|e| SchemaValidationError::SchemaLoadError {
        schema_name: file_name.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}
