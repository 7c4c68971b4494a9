//! Names the compiler synthesizes when lowering declarations to class files
//!
//! These simple names are part of the emitted ABI: other compilation units
//! and the runtime look classes up under them. Both contain `$`, so the
//! separator translation in fq-name derivation must leave them untouched.

/// Simple name of the synthesized class-object (companion singleton) class
pub const CLASS_OBJECT_CLASS_NAME: &str = "$ClassObj";

/// Simple name of the synthesized trait-implementation class carrying
/// default method bodies
pub const TRAIT_IMPL_CLASS_NAME: &str = "$TImpl";

/// Stand-in for [`CLASS_OBJECT_CLASS_NAME`] while separators are translated
pub(crate) const CLASS_OBJECT_REPLACE_GUARD: &str = "<class_object>";

/// Stand-in for [`TRAIT_IMPL_CLASS_NAME`] while separators are translated
pub(crate) const TRAIT_IMPL_REPLACE_GUARD: &str = "<trait_impl>";
