//! Signature assembly
//!
//! Renders `name(T1, T2, ...)` from type names, type references, type
//! references with parameter names, or the runtime values of a call.

use crate::error::{DescribeError, DescribeResult};
use crate::ty::{type_name, TypeRef};
use crate::value::RuntimeValue;

/// Parameter separator
const SEPARATOR: &str = ", ";

/// Render `name(T1, T2, ...)` from already formatted parameter strings
pub fn signature<I, S>(name: &str, params: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sb = String::with_capacity(name.len() + 2);
    sb.push_str(name);
    sb.push('(');
    for (i, param) in params.into_iter().enumerate() {
        if i != 0 {
            sb.push_str(SEPARATOR);
        }
        sb.push_str(param.as_ref());
    }
    sb.push(')');
    sb
}

/// Render a signature from parameter types; absent types show as `Object`
pub fn signature_of_types<'a, I>(name: &str, types: I) -> String
where
    I: IntoIterator<Item = Option<&'a TypeRef>>,
{
    signature(name, types.into_iter().map(type_name))
}

/// Render a signature with each parameter as `<type> <name>`
///
/// `names` is consumed positionally alongside `types`; both must have the
/// same length.
pub fn signature_with_names<S: AsRef<str>>(
    name: &str,
    types: &[Option<&TypeRef>],
    names: &[S],
) -> DescribeResult<String> {
    if types.len() != names.len() {
        tracing::debug!(
            method = name,
            types = types.len(),
            names = names.len(),
            "parameter names do not line up with parameter types"
        );
        return Err(DescribeError::ParameterCountMismatch {
            method: name.to_string(),
            types: types.len(),
            names: names.len(),
        });
    }

    let params = types
        .iter()
        .zip(names)
        .map(|(ty, param)| format!("{} {}", type_name(*ty), param.as_ref()));
    Ok(signature(name, params))
}

/// Render a signature from the arguments of a call
///
/// Each argument contributes its runtime type; null arguments carry no type
/// and show as `Object`.
pub fn signature_of_values(name: &str, args: &[RuntimeValue]) -> String {
    let types: Vec<Option<TypeRef>> = args.iter().map(RuntimeValue::runtime_type).collect();
    signature_of_types(name, types.iter().map(Option::as_ref))
}
