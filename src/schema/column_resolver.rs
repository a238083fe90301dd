use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What happens to an alias that has no entry in the column mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AliasPolicy {
    /// The alias is unresolvable and whatever referenced it is dropped.
    #[default]
    Strict,
    /// The alias is used verbatim as the column name.
    PassThrough,
}

/// Alias to column lookup shared by every clause assembler.
///
/// Borrows the schema's mapping until an entry is added, at which point it
/// owns a working copy (HAVING adds synthesized aggregate columns this way).
#[derive(Debug, Clone)]
pub struct ColumnResolver<'a> {
    columns: Cow<'a, IndexMap<String, String>>,
    policy: AliasPolicy,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(columns: &'a IndexMap<String, String>, policy: AliasPolicy) -> Self {
        Self { columns: Cow::Borrowed(columns), policy }
    }

    /// The mapped column, ignoring the policy.
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.columns.get(alias).map(String::as_str)
    }

    /// The mapped column, or under [`AliasPolicy::PassThrough`] the alias itself.
    pub fn resolve<'s>(&'s self, alias: &'s str) -> Option<&'s str> {
        match self.lookup(alias) {
            Some(column) => Some(column),
            None if self.policy == AliasPolicy::PassThrough && !alias.is_empty() => Some(alias),
            None => None,
        }
    }

    pub fn insert(&mut self, alias: String, column: String) {
        self.columns.to_mut().insert(alias, column);
    }

    pub fn policy(&self) -> AliasPolicy {
        self.policy
    }
}
