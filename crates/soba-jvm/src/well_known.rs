//! Platform classes the emitter refers to by name

use crate::class_name::ClassName;
use crate::declarations::CanonicalClass;
use crate::fq_name::FqName;

/// A platform class known to the emitter ahead of time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WellKnownClass {
    canonical_name: &'static str,
}

impl WellKnownClass {
    /// `java.lang.Object`, the implicit supertype of every emitted class
    pub const OBJECT: WellKnownClass = WellKnownClass {
        canonical_name: "java.lang.Object",
    };

    /// `java.lang.String`
    pub const STRING: WellKnownClass = WellKnownClass {
        canonical_name: "java.lang.String",
    };

    /// `java.lang.Class`
    pub const CLASS: WellKnownClass = WellKnownClass {
        canonical_name: "java.lang.Class",
    };

    /// The class name for this platform class
    pub fn class_name(&self) -> ClassName {
        ClassName::by_class(self)
    }
}

impl CanonicalClass for WellKnownClass {
    fn canonical_name(&self) -> FqName {
        FqName::new(self.canonical_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_internal_names() {
        assert_eq!(
            WellKnownClass::OBJECT.class_name().internal_name(),
            "java/lang/Object"
        );
        assert_eq!(
            WellKnownClass::STRING.class_name().internal_name(),
            "java/lang/String"
        );
        assert_eq!(
            WellKnownClass::CLASS.class_name().descriptor(),
            "Ljava/lang/Class;"
        );
    }
}
