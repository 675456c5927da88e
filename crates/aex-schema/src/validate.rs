//! # Structural Validation
//!
//! Runs a compiled JSON Schema validator over a response or request body
//! and aggregates every violation into a single error.
//!
//! ## Reporting
//!
//! Each [`Violation`] carries the dotted path from the document root to the
//! offending field (`products.0.category.usertype.usertype`), the schema
//! keyword location that rejected it, and a human-readable reason. For a
//! missing required property the path names the missing property itself,
//! not its parent object.
//!
//! A document either satisfies its schema completely or fails with
//! [`SchemaValidationError::ValidationFailed`] listing all violations.
//! There is no partial success.

use std::fmt;
use std::sync::Arc;

use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::registry::SchemaId;

/// Error raised by the schema layer.
#[derive(Error, Debug, Clone)]
pub enum SchemaValidationError {
    /// At least one constraint was violated.
    #[error("schema validation failed for '{schema}': {violations}")]
    ValidationFailed {
        /// Shape the document was validated against.
        schema: SchemaId,
        /// Every violation found, in document order.
        violations: ValidationViolations,
    },

    /// The document passed structural validation but could not be decoded
    /// into its typed model.
    #[error("decoding '{schema}' failed after validation: {source}")]
    Decode {
        /// Shape the document was decoded as.
        schema: SchemaId,
        /// Underlying deserialization error.
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// An embedded schema document could not be parsed.
    #[error("embedded schema '{schema_name}' could not be loaded: {reason}")]
    SchemaLoadError {
        /// File name of the embedded document, e.g. `product.schema.json`.
        schema_name: String,
        /// Parser message.
        reason: String,
    },

    /// The compiled validator could not be built (invalid schema or an
    /// unresolvable `$ref`).
    #[error("validator build error for schema '{schema}': {reason}")]
    ValidatorBuildError {
        /// Shape whose validator failed to build.
        schema: SchemaId,
        /// Compiler message, including the failing reference if any.
        reason: String,
    },
}

impl SchemaValidationError {
    /// Violations carried by a [`SchemaValidationError::ValidationFailed`],
    /// or an empty slice for every other variant.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SchemaValidationError::ValidationFailed { violations, .. } => violations.violations(),
            _ => &[],
        }
    }

    /// Dotted field paths of every violation.
    pub fn paths(&self) -> Vec<&str> {
        self.violations().iter().map(|v| v.path.as_str()).collect()
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path from the document root. Empty for the root itself.
    pub path: String,
    /// JSON Pointer into the schema of the keyword that rejected the value.
    pub schema_path: String,
    /// Validator message, e.g. `"Dr" is not one of ["Mr","Mrs","Miss","Ms"]`.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Every violation of one validation run, in the order the validator
/// reported them. Never empty when carried by an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True only for a run that found nothing.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Borrow the violations in reported order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Take ownership of the violations.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.violations.iter();
        if let Some(first) = entries.next() {
            write!(f, "{first}")?;
        }
        entries.try_for_each(|v| write!(f, ", {v}"))
    }
}

/// Run `validator` over `instance`, collecting every violation.
pub(crate) fn validate_document(
    validator: &Validator,
    instance: &Value,
    schema: SchemaId,
) -> Result<(), SchemaValidationError> {
    let violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|e| {
            let mut path = pointer_to_dotted(&e.instance_path.to_string());
            if let ValidationErrorKind::Required {
                property: Value::String(property),
            } = &e.kind
            {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(property);
            }
            Violation {
                path,
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            }
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed {
            schema,
            violations: ValidationViolations { violations },
        })
    }
}

/// Convert a JSON Pointer (`/products/0/id`) into a dotted path
/// (`products.0.id`), undoing the `~1` and `~0` escapes.
fn pointer_to_dotted(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
