//! Soba Class-File Type System
//!
//! This crate provides the JVM type tags and descriptor-string codec used by
//! the Soba class-file emitter. Types are immutable values keyed by their
//! descriptor form.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod ty;

pub use error::TypeError;
pub use ty::{JvmType, MethodDescriptor, PrimitiveType};
