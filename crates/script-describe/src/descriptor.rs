//! Member descriptors
//!
//! Declarations are rendered from two capability traits rather than from
//! concrete types, so host-reflected members and script-defined members go
//! through the same formatting code:
//!
//! - [`MemberDescriptor`]: name, modifiers and declared type (field type or
//!   method return type)
//! - [`CallableDescriptor`]: adds parameter types and, for script methods,
//!   parameter names
//!
//! Host adapters carry raw access flags and always-resolved types, as the
//! reflection layer reports them. Script adapters carry structured modifiers
//! and may leave types out for loosely typed declarations.

use serde::{Deserialize, Serialize};

use crate::modifiers::ModifierSet;
use crate::ty::TypeRef;

/// A named, modified member with a declared type
pub trait MemberDescriptor {
    /// Member name
    fn name(&self) -> &str;

    /// Member modifiers
    fn modifiers(&self) -> ModifierSet;

    /// Field or variable type, or method return type; absent when untyped
    fn declared_type(&self) -> Option<&TypeRef>;
}

/// A member that takes parameters
pub trait CallableDescriptor: MemberDescriptor {
    /// Parameter types in declaration order; absent entries are untyped
    fn parameter_types(&self) -> Vec<Option<&TypeRef>>;

    /// Parameter names, parallel to [`parameter_types`](Self::parameter_types)
    fn parameter_names(&self) -> Option<&[String]> {
        None
    }
}

// ============================================================================
// Host adapters
// ============================================================================

/// Method reported by the host reflection layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMethod {
    /// Method name
    pub name: String,
    /// Raw host access flags
    #[serde(default)]
    pub access_flags: u16,
    /// Return type (`void` included)
    pub return_type: TypeRef,
    /// Parameter types
    #[serde(default)]
    pub parameter_types: Vec<TypeRef>,
}

impl HostMethod {
    /// Create a method with no parameters
    pub fn new(name: impl Into<String>, access_flags: u16, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            access_flags,
            return_type,
            parameter_types: Vec::new(),
        }
    }

    /// Append a parameter type
    pub fn with_parameter(mut self, ty: TypeRef) -> Self {
        self.parameter_types.push(ty);
        self
    }
}

impl MemberDescriptor for HostMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> ModifierSet {
        ModifierSet::from_access_flags(self.access_flags)
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        Some(&self.return_type)
    }
}

impl CallableDescriptor for HostMethod {
    fn parameter_types(&self) -> Vec<Option<&TypeRef>> {
        self.parameter_types.iter().map(Some).collect()
    }
}

/// Field reported by the host reflection layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostField {
    /// Field name
    pub name: String,
    /// Raw host access flags
    #[serde(default)]
    pub access_flags: u16,
    /// Field type
    pub field_type: TypeRef,
}

impl HostField {
    /// Create a field descriptor
    pub fn new(name: impl Into<String>, access_flags: u16, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            access_flags,
            field_type,
        }
    }
}

impl MemberDescriptor for HostField {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> ModifierSet {
        ModifierSet::from_access_flags(self.access_flags)
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        Some(&self.field_type)
    }
}

// ============================================================================
// Script adapters
// ============================================================================

/// Method defined in script code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMethod {
    /// Method name
    pub name: String,
    /// Declared modifiers
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// Declared return type, absent when loosely typed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    /// Parameter types, absent entries are loosely typed
    #[serde(default)]
    pub parameter_types: Vec<Option<TypeRef>>,
    /// Parameter names, parallel to `parameter_types`
    #[serde(default)]
    pub parameter_names: Vec<String>,
}

impl ScriptMethod {
    /// Create an untyped method with no parameters
    pub fn new(name: impl Into<String>, modifiers: ModifierSet) -> Self {
        Self {
            name: name.into(),
            modifiers,
            return_type: None,
            parameter_types: Vec::new(),
            parameter_names: Vec::new(),
        }
    }

    /// Set the declared return type
    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Append a typed parameter
    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameter_names.push(name.into());
        self.parameter_types.push(Some(ty));
        self
    }

    /// Append a loosely typed parameter
    pub fn with_untyped_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameter_names.push(name.into());
        self.parameter_types.push(None);
        self
    }
}

impl MemberDescriptor for ScriptMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> ModifierSet {
        self.modifiers
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }
}

impl CallableDescriptor for ScriptMethod {
    fn parameter_types(&self) -> Vec<Option<&TypeRef>> {
        self.parameter_types.iter().map(Option::as_ref).collect()
    }

    fn parameter_names(&self) -> Option<&[String]> {
        Some(&self.parameter_names)
    }
}

/// Variable declared in script code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptVariable {
    /// Variable name
    pub name: String,
    /// Declared modifiers
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// Declared type, absent when loosely typed
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub var_type: Option<TypeRef>,
}

impl ScriptVariable {
    /// Create a loosely typed variable
    pub fn new(name: impl Into<String>, modifiers: ModifierSet) -> Self {
        Self {
            name: name.into(),
            modifiers,
            var_type: None,
        }
    }

    /// Set the declared type
    pub fn typed(mut self, var_type: TypeRef) -> Self {
        self.var_type = Some(var_type);
        self
    }
}

impl MemberDescriptor for ScriptVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> ModifierSet {
        self.modifiers
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        self.var_type.as_ref()
    }
}
