use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::{
    console::Console,
    diagnostics::{Diagnostic, DiagnosticKind, PrimerError, Result},
    snippets::{self, Snippet},
};

/// Settings for a single run.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    /// Mirror console lines to stdout as they are printed.
    pub echo: bool,
    /// Restrict the run to these snippets. Empty means all of them.
    pub only: Vec<String>,
}

/// Lines printed by one snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOutput {
    pub name: &'static str,
    pub lines: Vec<String>,
}

pub struct Playground {
    catalogue: IndexMap<&'static str, Snippet>,
    context: ExecutionContext,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    pub fn new() -> Self {
        Self::with_context(ExecutionContext::default())
    }

    pub fn with_context(context: ExecutionContext) -> Self {
        let mut catalogue = IndexMap::new();
        snippets::install(&mut catalogue);
        Self { catalogue, context }
    }

    pub fn snippets(&self) -> impl Iterator<Item = &Snippet> {
        self.catalogue.values()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.catalogue.keys().copied().collect()
    }

    pub fn get(&self, name: &str) -> Result<&Snippet> {
        self.catalogue.get(name).ok_or_else(|| {
            PrimerError::from(
                Diagnostic::new(DiagnosticKind::Lookup, format!("unknown snippet `{name}`"))
                    .with_note(format!("available: {}", self.names().join(", "))),
            )
        })
    }

    /// Runs the selected snippets top to bottom, in catalogue order.
    pub fn run(&self) -> Result<Vec<SnippetOutput>> {
        for name in &self.context.only {
            self.get(name)?;
        }
        let selected: Vec<&Snippet> = self
            .catalogue
            .values()
            .filter(|snippet| {
                self.context.only.is_empty()
                    || self.context.only.iter().any(|name| name == snippet.name)
            })
            .collect();

        let mut outputs = Vec::with_capacity(selected.len());
        for snippet in selected {
            outputs.push(self.execute(snippet)?);
        }
        info!(snippets = outputs.len(), "playground finished");
        Ok(outputs)
    }

    /// Runs one snippet by name, ignoring any selection in the context.
    pub fn run_snippet(&self, name: &str) -> Result<SnippetOutput> {
        let snippet = self.get(name)?;
        self.execute(snippet)
    }

    fn execute(&self, snippet: &Snippet) -> Result<SnippetOutput> {
        debug!(snippet = snippet.name, "running snippet");
        let mut console = if self.context.echo {
            Console::echoing()
        } else {
            Console::new()
        };
        if let Err(err) = snippet.run(&mut console) {
            warn!(snippet = snippet.name, error = %err, "snippet failed");
            return Err(err);
        }
        let lines = console.into_lines();
        debug!(snippet = snippet.name, lines = lines.len(), "snippet finished");
        Ok(SnippetOutput {
            name: snippet.name,
            lines,
        })
    }
}
