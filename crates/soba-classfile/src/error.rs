//! Descriptor codec errors

use thiserror::Error;

/// Errors that can occur while decoding a type descriptor
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// Descriptor ended before a complete type was read
    #[error("Unexpected end of descriptor at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset at which more input was expected
        offset: usize,
    },

    /// Unknown type tag character
    #[error("Invalid type tag '{tag}' at offset {offset}")]
    InvalidTag {
        /// The offending character
        tag: char,
        /// Byte offset of the character
        offset: usize,
    },

    /// Object descriptor missing its `;` terminator
    #[error("Unterminated object descriptor starting at offset {offset}")]
    UnterminatedObject {
        /// Byte offset of the opening `L`
        offset: usize,
    },

    /// Extra characters after a complete descriptor
    #[error("Trailing input after descriptor at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first extra character
        offset: usize,
    },

    /// Method descriptor does not start with `(`
    #[error("Method descriptor is missing its parameter list")]
    MissingParameterList,
}
