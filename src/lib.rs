//! A runnable playground of small language-feature demonstrations:
//! optional values, safe downcasting, error propagation, visibility,
//! non-owning references, tuples, generics, and a repetition operator.

pub mod access;
pub mod console;
pub mod diagnostics;
pub mod failure;
pub mod generics;
pub mod memory;
pub mod operators;
pub mod optional;
pub mod playground;
pub mod snippets;
pub mod tuples;
pub mod vehicles;

pub use console::Console;
pub use diagnostics::{AbsentValueError, Diagnostic, DiagnosticKind, PrimerError};
pub use playground::{ExecutionContext, Playground, SnippetOutput};
