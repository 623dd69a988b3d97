use std::fmt;

use thiserror::Error;

/// Classification of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Playground,
    Memory,
    Lookup,
}

/// Rich diagnostic information surfaced to end users.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Raised when an optional value is force-unwrapped while empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpectedly found no value while unwrapping `{binding}`")]
pub struct AbsentValueError {
    pub binding: &'static str,
}

impl AbsentValueError {
    pub const fn new(binding: &'static str) -> Self {
        Self { binding }
    }
}

/// Unified error type for the playground.
#[derive(Debug, Error)]
pub enum PrimerError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error(transparent)]
    Absent(#[from] AbsentValueError),
}

pub type Result<T> = std::result::Result<T, PrimerError>;
