//! Declaration formatting errors

use thiserror::Error;

/// Result type for formatting operations that can reject a descriptor
pub type DescribeResult<T> = Result<T, DescribeError>;

/// Errors raised when a descriptor breaks its construction contract
///
/// Formatting itself never fails; these only surface malformed input from
/// the metadata provider or the engine's object model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescribeError {
    /// Parameter names and parameter types do not line up
    #[error("Parameter count mismatch for '{method}': {types} types, {names} names")]
    ParameterCountMismatch {
        /// Method being rendered
        method: String,
        /// Number of parameter types
        types: usize,
        /// Number of parameter names
        names: usize,
    },
}
