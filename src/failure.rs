//! Propagating failures versus handling them on the spot.

use anyhow::Context;
use thiserror::Error;
use tracing::debug;

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("bad error")]
    Bad,
    #[error("worse error")]
    Worse,
}

pub const BAD_MESSAGE: &str = "we hit a bad error!!";
pub const WORSE_MESSAGE: &str = "this is even worse!!";
pub const UNKNOWN_MESSAGE: &str = "we can't. I don't even";

/// Succeeds only when `parameter` is `true`.
pub fn unreliable_function(parameter: bool) -> Result<String, DemoError> {
    if parameter {
        return Ok("unreliable string".to_string());
    }
    Err(DemoError::Bad)
}

/// Propagates whatever `unreliable_function(false)` raises to its caller.
pub fn do_a_thing() -> anyhow::Result<String> {
    let value = unreliable_function(false).context("do_a_thing")?;
    Ok(value)
}

/// Maps an outcome to the line it prints. Named failures get their own
/// message; anything else falls through to the catch-all arm.
///
/// Leaving out the catch-all does not build:
///
/// ```compile_fail
/// use primer::failure::DemoError;
///
/// fn describe(err: &anyhow::Error) -> &'static str {
///     match err.downcast_ref::<DemoError>() {
///         Some(DemoError::Bad) => "bad",
///         Some(DemoError::Worse) => "worse",
///     }
/// }
/// ```
pub fn handle(outcome: anyhow::Result<String>) -> String {
    let err = match outcome {
        Ok(value) => return value,
        Err(err) => err,
    };
    debug!(error = %err, "handling failure");
    match err.downcast_ref::<DemoError>() {
        Some(DemoError::Bad) => BAD_MESSAGE.to_string(),
        Some(DemoError::Worse) => WORSE_MESSAGE.to_string(),
        None => UNKNOWN_MESSAGE.to_string(),
    }
}

/// The non-fallible caller: it must handle everything `do_a_thing` raises.
pub fn do_another_thing(console: &mut Console) {
    console.println(handle(do_a_thing()));
}

/// Discards the failure's identity, keeping only presence.
pub fn attempt(parameter: bool) -> Option<String> {
    unreliable_function(parameter).ok()
}
