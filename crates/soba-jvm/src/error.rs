//! Naming errors

use soba_classfile::JvmType;
use thiserror::Error;

/// Errors from class-name construction
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    /// Only object-category type tags carry a class name; primitives and
    /// arrays are rejected
    #[error("type is not convertible to a class name: {0}")]
    NotAnObjectType(JvmType),
}
