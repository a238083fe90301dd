use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The table used when a schema does not configure its own aggregates.
pub static DEFAULT_AGGREGATES: Lazy<AggregateTable> = Lazy::new(|| {
    AggregateTable::new()
        .with("sum", "SUM")
        .with("count", "COUNT")
        .with("min", "MIN")
        .with("max", "MAX")
        .with("avg", "AVG")
});

/// Maps the short key used in requests (`a__sum`) to the SQL function name (`SUM`).
///
/// Keys are tried in insertion order, the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateTable {
    functions: IndexMap<String, String>,
}

impl AggregateTable {
    pub fn new() -> Self {
        Self { functions: IndexMap::new() }
    }

    pub fn with(mut self, key: &str, function: &str) -> Self {
        self.insert(key, function);
        self
    }

    pub fn insert(&mut self, key: &str, function: &str) {
        self.functions.insert(key.to_string(), function.to_string());
    }

    pub fn function(&self, key: &str) -> Option<&str> {
        self.functions.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.functions.iter().map(|(k, f)| (k.as_str(), f.as_str()))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<K: Into<String>, F: Into<String>> FromIterator<(K, F)> for AggregateTable {
    fn from_iter<T: IntoIterator<Item = (K, F)>>(iter: T) -> Self {
        Self { functions: iter.into_iter().map(|(k, f)| (k.into(), f.into())).collect() }
    }
}
