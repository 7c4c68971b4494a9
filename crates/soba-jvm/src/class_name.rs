//! Class identity and the encodings derived from it
//!
//! A [`ClassName`] is keyed by its binary internal name and computes the
//! other encodings on first use:
//!
//! ```text
//! Internal name:  jet/Map$Entry
//! FqName:         jet.Map.Entry
//! Descriptor:     Ljet/Map$Entry;
//! ```
//!
//! The internal-name-to-fq-name direction is lossy: `$` and `/` both become
//! `.`, so a fully-qualified name alone cannot be mapped back to a unique
//! binary name.

use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::unsync::OnceCell;
use soba_classfile::JvmType;

use crate::abi;
use crate::declarations::{CanonicalClass, Declaration};
use crate::error::NameError;
use crate::fq_name::FqName;

/// Identity of a compiled class
///
/// Equality and hashing consider only the internal name; the derived
/// encodings are cached projections of it and never part of identity.
#[derive(Debug, Clone)]
pub struct ClassName {
    internal_name: String,
    fq_name: OnceCell<FqName>,
    descriptor: OnceCell<String>,
    ty: OnceCell<JvmType>,
}

impl ClassName {
    fn new(internal_name: String) -> Self {
        Self {
            internal_name,
            fq_name: OnceCell::new(),
            descriptor: OnceCell::new(),
            ty: OnceCell::new(),
        }
    }

    /// Wrap a binary internal name verbatim
    ///
    /// No validation is performed. A name that contains one of the guard
    /// placeholder literals used during separator translation will have its
    /// [`fq_name`](Self::fq_name) silently corrupted; class files cannot
    /// contain `<` or `>` in a class name, so this is a documented
    /// limitation rather than a checked precondition.
    pub fn by_internal_name(internal_name: impl Into<String>) -> Self {
        Self::new(internal_name.into())
    }

    /// Extract the class name carried by an object-category type tag
    ///
    /// Primitive, void, and array tags are rejected: arrays have descriptors
    /// but no internal name of their own.
    pub fn by_type(ty: &JvmType) -> Result<Self, NameError> {
        match ty.internal_name() {
            Some(internal_name) => Ok(Self::by_internal_name(internal_name)),
            None => Err(NameError::NotAnObjectType(ty.clone())),
        }
    }

    /// Build a name from a dotted fully-qualified name by replacing `.`
    /// with `/`
    ///
    /// A fully-qualified name does not uniquely determine a binary name once
    /// nested classes are involved (`jet.Map.Entry` could be `jet/Map$Entry`
    /// or `jet/Map/Entry`), so this entry point must not be used for nested
    /// classifiers; use [`by_class_descriptor`](Self::by_class_descriptor).
    /// The input is kept as the cached fq name; the forward mapping here is
    /// exact and the lossy reverse derivation is never taken for it.
    pub fn by_fq_name_without_inner_classes(fq_name: impl Into<FqName>) -> Self {
        let fq_name = fq_name.into();
        Self {
            internal_name: fq_name_to_internal_name(&fq_name),
            fq_name: OnceCell::with_value(fq_name),
            descriptor: OnceCell::new(),
            ty: OnceCell::new(),
        }
    }

    /// Build a name from a host class handle via its canonical dotted name
    pub fn by_class<C: CanonicalClass + ?Sized>(class: &C) -> Self {
        Self::by_fq_name_without_inner_classes(class.canonical_name())
    }

    /// Build a name for a classifier node in the declaration graph
    ///
    /// Walks outward from the classifier while its container is still
    /// class-like, then joins the outermost class's fully-qualified name
    /// with the collected simple names using `$`, outermost nested class
    /// first.
    pub fn by_class_descriptor(classifier: &dyn Declaration) -> Self {
        let mut node = classifier;
        let mut inner_names = Vec::new();
        while let Some(container) = node.container() {
            if !container.is_class_like() {
                break;
            }
            inner_names.push(node.name().to_string());
            node = container;
        }

        let mut internal_name = fq_name_to_internal_name(&node.fq_name());
        for name in inner_names.iter().rev() {
            internal_name.push('$');
            internal_name.push_str(name);
        }
        Self::new(internal_name)
    }

    /// The binary internal name, e.g. `jet/Map$Entry`
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// The dotted fully-qualified form, e.g. `jet.Map.Entry`
    ///
    /// Derived by turning both separators into dots, with the synthesized
    /// marker names from [`abi`](crate::abi) passing through untouched.
    /// Intended for diagnostics and source-level display, not for mapping
    /// back to a binary name.
    pub fn fq_name(&self) -> &FqName {
        self.fq_name
            .get_or_init(|| FqName::new(internal_name_to_fq_name(&self.internal_name)))
    }

    /// The field/parameter descriptor, e.g. `Ljet/Map$Entry;`
    pub fn descriptor(&self) -> &str {
        self.descriptor
            .get_or_init(|| format!("L{};", self.internal_name))
    }

    /// The emitter type tag for this class
    ///
    /// # Panics
    ///
    /// Panics if the internal name does not form a well-formed object
    /// descriptor, which requires a `;` in the name. No name a class file
    /// can reference contains one, so such a call is a bug at the
    /// construction site, not a runtime condition.
    pub fn ty(&self) -> &JvmType {
        self.ty.get_or_init(|| {
            JvmType::from_descriptor(self.descriptor()).unwrap_or_else(|e| {
                panic!(
                    "internal name {:?} does not form an object descriptor: {}",
                    self.internal_name, e
                )
            })
        })
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.internal_name)
    }
}

impl PartialEq for ClassName {
    fn eq(&self, other: &Self) -> bool {
        self.internal_name == other.internal_name
    }
}

impl Eq for ClassName {}

impl Hash for ClassName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.internal_name.hash(state);
    }
}

fn fq_name_to_internal_name(fq_name: &FqName) -> String {
    fq_name.as_str().replace('.', "/")
}

/// Lossy: `$` and `/` both map to `.`, except inside the synthesized marker
/// names, which must survive the translation literally
fn internal_name_to_fq_name(internal_name: &str) -> String {
    let translated = encode_special_names(internal_name)
        .replace('$', ".")
        .replace('/', ".");
    decode_special_names(&translated)
}

fn encode_special_names(name: &str) -> String {
    name.replace(abi::CLASS_OBJECT_CLASS_NAME, abi::CLASS_OBJECT_REPLACE_GUARD)
        .replace(abi::TRAIT_IMPL_CLASS_NAME, abi::TRAIT_IMPL_REPLACE_GUARD)
}

fn decode_special_names(name: &str) -> String {
    name.replace(abi::CLASS_OBJECT_REPLACE_GUARD, abi::CLASS_OBJECT_CLASS_NAME)
        .replace(abi::TRAIT_IMPL_REPLACE_GUARD, abi::TRAIT_IMPL_CLASS_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fq_name_to_internal_name() {
        assert_eq!(
            fq_name_to_internal_name(&FqName::new("jet.Map.Entry")),
            "jet/Map/Entry"
        );
        assert_eq!(fq_name_to_internal_name(&FqName::new("TopLevel")), "TopLevel");
    }

    #[test]
    fn test_internal_name_to_fq_name() {
        assert_eq!(internal_name_to_fq_name("jet/Map$Entry"), "jet.Map.Entry");
        assert_eq!(internal_name_to_fq_name("TopLevel"), "TopLevel");
    }

    #[test]
    fn test_markers_survive_translation() {
        // the marker's own '$' must not become a '.'
        assert_eq!(
            internal_name_to_fq_name("jet/Foo$$ClassObj"),
            "jet.Foo.$ClassObj"
        );
        assert_eq!(
            internal_name_to_fq_name("jet/Foo$$TImpl"),
            "jet.Foo.$TImpl"
        );
        // both markers in one name
        assert_eq!(
            internal_name_to_fq_name("p/A$$ClassObj$B$$TImpl"),
            "p.A.$ClassObj.B.$TImpl"
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let name = "jet/Foo$$ClassObj";
        assert_eq!(decode_special_names(&encode_special_names(name)), name);
    }

    #[test]
    fn test_fq_factory_caches_input_exactly() {
        // "jet.Map.Entry" would lossily derive from "jet/Map/Entry", but the
        // factory seeds the cache with the exact input instead
        let name = ClassName::by_fq_name_without_inner_classes("jet.Map.Entry");
        assert_eq!(name.internal_name(), "jet/Map/Entry");
        assert_eq!(name.fq_name().as_str(), "jet.Map.Entry");
    }

    #[test]
    fn test_equality_ignores_caches() {
        let warm = ClassName::by_internal_name("jet/Map$Entry");
        warm.fq_name();
        warm.descriptor();
        warm.ty();
        let cold = ClassName::by_internal_name("jet/Map$Entry");
        assert_eq!(warm, cold);
    }

    #[test]
    fn test_display_is_internal_name() {
        let name = ClassName::by_internal_name("jet/Map$Entry");
        assert_eq!(format!("{}", name), "jet/Map$Entry");
    }
}
