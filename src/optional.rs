//! Optional values: checked unwrapping, binding with a fallback, coalescing.

use crate::diagnostics::AbsentValueError;

/// The first shared optional string. Deliberately empty.
pub const OPTIONAL_STRING1: Option<&str> = None;
/// The second shared optional string.
pub const OPTIONAL_STRING2: Option<&str> = Some(" there");

/// Printed whenever a binding fails and the fallback branch runs.
pub const SOMETHING_BAD: &str = "something bad happened";

/// Unwraps without a fallback. An empty value is reported, never defaulted.
pub fn force_unwrap<T>(value: Option<T>, binding: &'static str) -> Result<T, AbsentValueError> {
    value.ok_or(AbsentValueError::new(binding))
}

/// Runs `present` with the contained value, or `absent` when there is none.
pub fn bind_or_else<T, R>(
    value: Option<T>,
    present: impl FnOnce(T) -> R,
    absent: impl FnOnce() -> R,
) -> R {
    match value {
        Some(inner) => present(inner),
        None => absent(),
    }
}

/// Returns the contained value, or `default` when empty.
pub fn coalesce<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Binds both strings and requires the first to read `"hello"`.
pub fn greet_if_hello(first: Option<&str>, second: Option<&str>) -> Option<String> {
    if let (Some(first), Some(second)) = (first, second)
        && first == "hello"
    {
        return Some(format!("{first}{second}"));
    }
    None
}

/// Joins both strings, leaving early as soon as either is missing.
pub fn join_both(first: Option<&str>, second: Option<&str>) -> Option<String> {
    let (Some(first), Some(second)) = (first, second) else {
        return None;
    };
    Some(format!("{first}{second}"))
}

/// A struct whose field has no default: the constructor must supply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labelled {
    pub string: String,
}

impl Labelled {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }
}
