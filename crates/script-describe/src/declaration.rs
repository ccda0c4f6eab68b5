//! Declaration assembly
//!
//! Composes modifiers, type names, signatures and inheritance clauses into
//! one source-like declaration line:
//!
//! | Entity            | Shape                                               |
//! |-------------------|-----------------------------------------------------|
//! | method            | `<mods> <return> <name>(<params>)` + `;` or ` {}`   |
//! | class / interface | `<mods> <kind> <name><extends><implements> {`       |
//! | field / variable  | `<mods> <type> <name>;`                             |
//!
//! Method and field lines are composed as-is, so an empty modifier set
//! leaves a leading space. Type lines are trimmed.

use crate::descriptor::{CallableDescriptor, MemberDescriptor};
use crate::error::DescribeResult;
use crate::modifiers::ModifierSet;
use crate::signature::{signature_of_types, signature_with_names};
use crate::ty::{type_name, TypeRef};

/// Render a method declaration
///
/// The body marker is `;` when the rendered modifiers mention `abstract`,
/// ` {}` otherwise. Parameter names are shown when the descriptor has them.
pub fn method_declaration<M: CallableDescriptor + ?Sized>(method: &M) -> DescribeResult<String> {
    tracing::trace!(method = method.name(), "rendering method declaration");

    let mods = method.modifiers().to_string();
    let types = method.parameter_types();
    let signature = match method.parameter_names() {
        Some(names) => signature_with_names(method.name(), &types, names)?,
        None => signature_of_types(method.name(), types),
    };
    let terminator = if mods.contains("abstract") { ";" } else { " {}" };

    Ok(format!(
        "{} {} {}{}",
        mods,
        type_name(method.declared_type()),
        signature,
        terminator
    ))
}

/// Render a class or interface declaration header
///
/// The interface flag decides the keyword on both paths. Host interfaces
/// render `interface` among their modifiers, in canonical order, and host
/// classes never do. Generated types drop the `INTERFACE` bit from their
/// modifiers and get an explicit `class` or `interface` keyword.
pub fn type_declaration(ty: &TypeRef) -> String {
    tracing::trace!(
        name = ty.name(),
        generated = ty.is_generated(),
        "rendering type declaration"
    );

    let (modifiers, kind) = match ty {
        TypeRef::Native(info) if info.is_interface => {
            (info.modifiers.union(ModifierSet::INTERFACE), "")
        }
        TypeRef::Native(info) => (info.modifiers.difference(ModifierSet::INTERFACE), " class"),
        TypeRef::Generated(info) => (
            info.modifiers.difference(ModifierSet::INTERFACE),
            if info.is_interface { " interface" } else { " class" },
        ),
    };

    let mut sb = modifiers.to_string();
    sb.push_str(kind);
    sb.push(' ');
    sb.push_str(ty.name());
    sb.push_str(&extends_clause(ty));
    sb.push_str(&implements_clause(ty));
    sb.push_str(" {");
    sb.trim().to_string()
}

/// Render a field or variable declaration
pub fn variable_declaration<V: MemberDescriptor + ?Sized>(var: &V) -> String {
    format!(
        "{} {} {};",
        var.modifiers(),
        type_name(var.declared_type()),
        var.name()
    )
}

/// ` extends <Super>` for classes, empty for interfaces
fn extends_clause(ty: &TypeRef) -> String {
    if ty.is_interface() {
        String::new()
    } else {
        format!(" extends {}", type_name(ty.superclass()))
    }
}

/// ` implements A, B` for classes, ` extends A, B` for interfaces
fn implements_clause(ty: &TypeRef) -> String {
    let interfaces = ty.interfaces();
    if interfaces.is_empty() {
        return String::new();
    }

    let keyword = if ty.is_interface() { " extends " } else { " implements " };
    let names: Vec<&str> = interfaces.iter().map(TypeRef::name).collect();
    format!("{}{}", keyword, names.join(", "))
}
