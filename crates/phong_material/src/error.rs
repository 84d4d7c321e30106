//! Material errors

use thiserror::Error;

use crate::material::{AttributeType, MaterialAttribute};

/// Errors raised while building or querying material data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// A required attribute is not present in the material
    #[error("Attribute {0} not found")]
    AttributeMissing(MaterialAttribute),

    /// An accessor was called without the attribute it depends on
    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),

    /// Stored value has a different type than requested
    #[error("Attribute {attribute} is {actual:?} but {expected:?} was requested")]
    TypeMismatch {
        /// Queried attribute
        attribute: MaterialAttribute,
        /// Type the caller asked for
        expected: AttributeType,
        /// Type actually stored
        actual: AttributeType,
    },

    /// The same attribute was supplied twice
    #[error("Duplicate attribute {0}")]
    DuplicateAttribute(MaterialAttribute),

    /// Legacy Phong parameters are inconsistent with their flags
    #[error("Invalid legacy Phong parameters: {0}")]
    InvalidLegacyParameters(String),
}

/// Result alias for material operations
pub type Result<T> = std::result::Result<T, MaterialError>;
