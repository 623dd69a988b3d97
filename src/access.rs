//! Visibility: what callers outside this module may and may not touch.

/// Position of a row within a sectioned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub text: Option<String>,
}

pub trait TableViewDataSource {
    fn number_of_rows_in_section(&self, section: usize) -> usize;

    fn cell_for_row_at(&self, index_path: IndexPath) -> TableCell;
}

#[derive(Debug, Clone)]
pub struct TableSource {
    pub property: &'static str,
    another_property: i64,
}

impl Default for TableSource {
    fn default() -> Self {
        Self {
            property: "property",
            another_property: 5,
        }
    }
}

// Private helpers, reachable from this module only.
impl TableSource {
    fn a_function(&self) -> &'static str {
        "hello"
    }
}

impl TableSource {
    /// Public view built from members callers cannot reach directly.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {}",
            self.property,
            self.a_function(),
            self.another_property
        )
    }
}

impl TableViewDataSource for TableSource {
    fn number_of_rows_in_section(&self, _section: usize) -> usize {
        1
    }

    fn cell_for_row_at(&self, _index_path: IndexPath) -> TableCell {
        TableCell::default()
    }
}
