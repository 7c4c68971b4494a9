//! Narrow views of the declaration graph consumed by name construction

use crate::fq_name::FqName;

/// The facts the nested-class walk needs from a declaration node
///
/// Implemented by the resolver's declaration graph; the naming layer never
/// depends on the concrete node hierarchy.
pub trait Declaration {
    /// Simple (unqualified) name of this declaration
    fn name(&self) -> &str;

    /// The declaration lexically containing this one, if any
    fn container(&self) -> Option<&dyn Declaration>;

    /// Whether this declaration introduces a class scope, i.e. anything that
    /// is compiled to its own class file
    fn is_class_like(&self) -> bool;

    /// Dotted fully-qualified name of this declaration
    fn fq_name(&self) -> FqName;
}

/// A host-side class handle that can report its canonical dotted name
pub trait CanonicalClass {
    /// Canonical dotted name, e.g. `java.lang.Thread`
    fn canonical_name(&self) -> FqName;
}
