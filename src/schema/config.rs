use std::{fmt::Debug, sync::Arc};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::schema::{
    AggregateTable, AliasPolicy, Argument, ArgumentKeyStrategy, ColumnKey, ColumnResolver,
    PlaceholderStrategy, PositionalPlaceholder, DEFAULT_AGGREGATES,
};

/// Everything a translation needs to know about the target table.
///
/// Built once and reused across requests; translations only read it.
///
/// - `columns` maps request aliases to real column names.
/// - `force_search` fragments are always applied, `default_search` ones only
///   when the request carries no `q`. Fragments are raw SQL that already
///   contains its placeholder and are trusted as-is.
/// - `force_order_by` / `default_order_by` work the same way for `s` and hold
///   pre-rendered `column DIRECTION` terms.
/// - `aggregates` replaces the default aggregate table when set.
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    pub columns: IndexMap<String, String>,
    pub force_search: IndexMap<String, Argument>,
    pub default_search: IndexMap<String, Argument>,
    pub force_order_by: Vec<String>,
    pub default_order_by: Vec<String>,
    pub aggregates: Option<AggregateTable>,
    pub alias_policy: AliasPolicy,
    #[serde(skip, default = "default_placeholder")]
    placeholder: Arc<dyn PlaceholderStrategy>,
    #[serde(skip, default = "default_argument_key")]
    argument_key: Arc<dyn ArgumentKeyStrategy>,
}

fn default_placeholder() -> Arc<dyn PlaceholderStrategy> {
    Arc::new(PositionalPlaceholder)
}

fn default_argument_key() -> Arc<dyn ArgumentKeyStrategy> {
    Arc::new(ColumnKey)
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            columns: IndexMap::new(),
            force_search: IndexMap::new(),
            default_search: IndexMap::new(),
            force_order_by: vec![],
            default_order_by: vec![],
            aggregates: None,
            alias_policy: AliasPolicy::default(),
            placeholder: default_placeholder(),
            argument_key: default_argument_key(),
        }
    }
}

impl Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("columns", &self.columns)
            .field("force_search", &self.force_search)
            .field("default_search", &self.default_search)
            .field("force_order_by", &self.force_order_by)
            .field("default_order_by", &self.default_order_by)
            .field("aggregates", &self.aggregates)
            .field("alias_policy", &self.alias_policy)
            .finish_non_exhaustive()
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema whose aliases are the column names themselves.
    pub fn identity(columns: &[&str]) -> Self {
        columns.iter().fold(Self::new(), |schema, column| schema.with_column(column, column))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn with_column(mut self, alias: &str, column: &str) -> Self {
        self.columns.insert(alias.to_string(), column.to_string());
        self
    }

    pub fn with_force_search(mut self, fragment: &str, value: impl Into<Argument>) -> Self {
        self.force_search.insert(fragment.to_string(), value.into());
        self
    }

    pub fn with_default_search(mut self, fragment: &str, value: impl Into<Argument>) -> Self {
        self.default_search.insert(fragment.to_string(), value.into());
        self
    }

    pub fn with_force_order_by(mut self, term: &str) -> Self {
        self.force_order_by.push(term.to_string());
        self
    }

    pub fn with_default_order_by(mut self, term: &str) -> Self {
        self.default_order_by.push(term.to_string());
        self
    }

    /// Adds one aggregate. The first call replaces the default table.
    pub fn with_aggregate(mut self, key: &str, function: &str) -> Self {
        self.aggregates.get_or_insert_with(AggregateTable::new).insert(key, function);
        self
    }

    pub fn with_aggregates(mut self, aggregates: AggregateTable) -> Self {
        self.aggregates = Some(aggregates);
        self
    }

    pub fn with_alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    pub fn with_placeholder(mut self, strategy: impl PlaceholderStrategy + 'static) -> Self {
        self.placeholder = Arc::new(strategy);
        self
    }

    pub fn with_argument_key(mut self, strategy: impl ArgumentKeyStrategy + 'static) -> Self {
        self.argument_key = Arc::new(strategy);
        self
    }

    pub fn aggregates(&self) -> &AggregateTable {
        self.aggregates.as_ref().unwrap_or(&*DEFAULT_AGGREGATES)
    }

    pub fn resolver(&self) -> ColumnResolver<'_> {
        ColumnResolver::new(&self.columns, self.alias_policy)
    }

    pub fn placeholder(&self, alias: &str) -> String {
        self.placeholder.placeholder(alias)
    }

    pub fn argument_key(&self, alias: &str) -> String {
        let column = self.columns.get(alias).map(String::as_str);
        self.argument_key.key(alias, column)
    }
}
