//! Runtime values
//!
//! The minimal view of a script value needed to name its type: null, a
//! wrapped primitive that carries its own logical type, or an object with a
//! concrete runtime type.

use std::fmt;

use crate::modifiers::ModifierSet;
use crate::ty::{TypeInfo, TypeRef};

/// Logical type of a wrapped primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `char`
    Char,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `void`
    Void,
}

impl PrimitiveKind {
    /// Keyword naming this primitive type
    pub fn type_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    /// Host type reference for this primitive
    ///
    /// Primitive classes are reported by the host as `public abstract final`.
    pub fn type_ref(self) -> TypeRef {
        TypeRef::native(
            TypeInfo::class(self.type_name())
                .with_modifiers(ModifierSet::PUBLIC | ModifierSet::ABSTRACT | ModifierSet::FINAL),
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A wrapped primitive value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Boolean value
    Boolean(bool),
    /// 8-bit integer
    Byte(i8),
    /// Character
    Char(char),
    /// 16-bit integer
    Short(i16),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Result of a void call
    Void,
}

impl Primitive {
    /// Logical type of the wrapped value
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Boolean(_) => PrimitiveKind::Boolean,
            Primitive::Byte(_) => PrimitiveKind::Byte,
            Primitive::Char(_) => PrimitiveKind::Char,
            Primitive::Short(_) => PrimitiveKind::Short,
            Primitive::Int(_) => PrimitiveKind::Int,
            Primitive::Long(_) => PrimitiveKind::Long,
            Primitive::Float(_) => PrimitiveKind::Float,
            Primitive::Double(_) => PrimitiveKind::Double,
            Primitive::Void => PrimitiveKind::Void,
        }
    }
}

/// A script value as seen by the formatter
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// The null value
    Null,
    /// A wrapped primitive
    Primitive(Primitive),
    /// An ordinary object of the given runtime type
    Object(TypeRef),
}

impl RuntimeValue {
    /// Runtime type of this value, absent for null
    pub fn runtime_type(&self) -> Option<TypeRef> {
        match self {
            RuntimeValue::Null => None,
            RuntimeValue::Primitive(primitive) => Some(primitive.kind().type_ref()),
            RuntimeValue::Object(ty) => Some(ty.clone()),
        }
    }

    /// Simple name of this value's type
    pub fn type_string(&self) -> &str {
        match self {
            RuntimeValue::Null => "null",
            RuntimeValue::Primitive(primitive) => primitive.kind().type_name(),
            RuntimeValue::Object(ty) => ty.name(),
        }
    }
}

impl From<Primitive> for RuntimeValue {
    fn from(primitive: Primitive) -> Self {
        RuntimeValue::Primitive(primitive)
    }
}

/// Simple name of a value's type: `null`, the primitive keyword, or the
/// object's runtime type name
pub fn type_string(value: &RuntimeValue) -> &str {
    value.type_string()
}
