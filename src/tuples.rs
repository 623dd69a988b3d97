use indexmap::IndexMap;

/// The single-entry mapping `{"index": 5}`.
pub fn index_table() -> IndexMap<String, i64> {
    let mut table = IndexMap::new();
    table.insert("index".to_string(), 5);
    table
}

/// Key/value pairs in insertion order.
pub fn pairs(table: &IndexMap<String, i64>) -> Vec<(&str, i64)> {
    table
        .iter()
        .map(|(key, value)| (key.as_str(), *value))
        .collect()
}
