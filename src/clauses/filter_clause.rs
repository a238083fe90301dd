use indexmap::IndexMap;
use serde::Serialize;

use crate::{grammar::Predicate, schema::Argument};

/// A WHERE or HAVING condition with its bound values.
///
/// `arguments` has one entry per term in `text`, in order. `argument_map` may
/// hold fewer entries: two terms with the same key keep the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterClause {
    pub text: String,
    pub arguments: Vec<Argument>,
    pub argument_map: IndexMap<String, Argument>,
}

impl FilterClause {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Accumulates terms for a [`FilterClause`].
#[derive(Debug, Default)]
pub(crate) struct FilterClauseBuilder {
    terms: Vec<String>,
    arguments: Vec<Argument>,
    argument_map: IndexMap<String, Argument>,
}

impl FilterClauseBuilder {
    /// A raw fragment with no argument map entry.
    pub fn push_raw(&mut self, fragment: &str, value: &Argument) {
        self.terms.push(fragment.to_string());
        self.arguments.push(value.clone());
    }

    pub fn push_keyed(&mut self, fragment: &str, value: &Argument, key: String) {
        self.push_raw(fragment, value);
        self.argument_map.insert(key, value.clone());
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.terms.push(predicate.sql);
        self.arguments.push(predicate.value.clone());
        self.argument_map.insert(predicate.key, predicate.value);
    }

    pub fn finish(self) -> FilterClause {
        FilterClause {
            text: self.terms.join(" AND "),
            arguments: self.arguments,
            argument_map: self.argument_map,
        }
    }
}
