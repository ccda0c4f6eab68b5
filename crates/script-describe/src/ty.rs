//! Type references
//!
//! A [`TypeRef`] points at the metadata of a class or interface and records,
//! once, where that type came from: the host platform or the scripting
//! engine's class generator. Absent references (`None`) stand for untyped
//! slots and display as `Object`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::modifiers::ModifierSet;

/// Display name used for absent type references
pub const DEFAULT_TYPE_NAME: &str = "Object";

/// Metadata of a class or interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Simple (unqualified) name
    pub name: String,
    /// Package the type lives in, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Whether the type is an interface
    #[serde(default)]
    pub is_interface: bool,
    /// Class modifiers
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// Declared supertype (absent for interfaces and root types)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeRef>,
    /// Directly implemented (or, for interfaces, extended) interfaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
}

impl TypeInfo {
    /// Create class metadata with no modifiers or supertypes
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            is_interface: false,
            modifiers: ModifierSet::empty(),
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    /// Create interface metadata with no modifiers or super-interfaces
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            is_interface: true,
            ..Self::class(name)
        }
    }

    /// Set the package
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the class modifiers
    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the supertype
    pub fn extends(mut self, superclass: TypeRef) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Append a directly implemented interface
    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }
}

/// Reference to a type, tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum TypeRef {
    /// Type supplied by the host platform
    Native(Arc<TypeInfo>),
    /// Type synthesized at runtime by the scripting engine
    Generated(Arc<TypeInfo>),
}

impl TypeRef {
    /// Reference a host type
    pub fn native(info: TypeInfo) -> Self {
        TypeRef::Native(Arc::new(info))
    }

    /// Reference a script-generated type
    pub fn generated(info: TypeInfo) -> Self {
        TypeRef::Generated(Arc::new(info))
    }

    /// Metadata behind this reference
    pub fn info(&self) -> &TypeInfo {
        match self {
            TypeRef::Native(info) | TypeRef::Generated(info) => info,
        }
    }

    /// Simple name
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Package-qualified name
    pub fn qualified_name(&self) -> String {
        let info = self.info();
        match &info.package {
            Some(package) if !package.is_empty() => format!("{}.{}", package, info.name),
            _ => info.name.clone(),
        }
    }

    /// Whether the scripting engine generated this type
    pub fn is_generated(&self) -> bool {
        matches!(self, TypeRef::Generated(_))
    }

    /// Whether this type is an interface
    pub fn is_interface(&self) -> bool {
        self.info().is_interface
    }

    /// Declared supertype
    pub fn superclass(&self) -> Option<&TypeRef> {
        self.info().superclass.as_ref()
    }

    /// Directly implemented interfaces
    pub fn interfaces(&self) -> &[TypeRef] {
        &self.info().interfaces
    }

    /// Class modifiers
    pub fn modifiers(&self) -> ModifierSet {
        self.info().modifiers
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name of a possibly absent type
///
/// This is the single place where an absent type becomes `Object`.
pub fn type_name(ty: Option<&TypeRef>) -> &str {
    ty.map_or(DEFAULT_TYPE_NAME, |ty| ty.name())
}

/// Class-name normalization owned by the embedding engine
pub trait ClassNameNormalizer {
    /// Normalized display name for `ty`
    fn normalize_class_name(&self, ty: &TypeRef) -> String;
}

/// Normalize a class name through the engine's normalizer
pub fn normalize_class_name<N>(normalizer: &N, ty: &TypeRef) -> String
where
    N: ClassNameNormalizer + ?Sized,
{
    normalizer.normalize_class_name(ty)
}
