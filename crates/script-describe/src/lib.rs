//! Script Describe
//!
//! Renders canonical, source-like declaration strings for entities an
//! embedded scripting engine discovers at runtime: host and script-generated
//! classes/interfaces, methods, fields and script variables.
//!
//! The output is meant for introspection, debugging and REPL `describe`
//! commands. Nothing here looks entities up or parses text; descriptors
//! arrive already resolved from the reflection layer or the engine's object
//! model and are only formatted.
//!
//! ```ignore
//! use script_describe::{method_declaration, ModifierSet, PrimitiveKind, ScriptMethod};
//!
//! let int = PrimitiveKind::Int.type_ref();
//! let add = ScriptMethod::new("add", ModifierSet::PUBLIC)
//!     .returning(int.clone())
//!     .with_parameter("a", int.clone())
//!     .with_parameter("b", int);
//!
//! assert_eq!(method_declaration(&add)?, "public int add(int a, int b) {}");
//! ```

#![warn(missing_docs)]

pub mod declaration;
pub mod descriptor;
pub mod error;
pub mod modifiers;
pub mod prefix;
pub mod signature;
pub mod ty;
pub mod value;

pub use declaration::{method_declaration, type_declaration, variable_declaration};
pub use descriptor::{
    CallableDescriptor, HostField, HostMethod, MemberDescriptor, ScriptMethod, ScriptVariable,
};
pub use error::{DescribeError, DescribeResult};
pub use modifiers::ModifierSet;
pub use prefix::max_common_prefix;
pub use signature::{signature, signature_of_types, signature_of_values, signature_with_names};
pub use ty::{normalize_class_name, type_name, ClassNameNormalizer, TypeInfo, TypeRef};
pub use value::{type_string, Primitive, PrimitiveKind, RuntimeValue};
