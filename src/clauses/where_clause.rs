use tracing::{debug, trace};

use crate::{
    clauses::{FilterClause, FilterClauseBuilder},
    grammar::PredicateBuilder,
    schema::Schema,
};

pub struct WhereAssembler;

impl WhereAssembler {
    /// Builds the WHERE clause from the `q` parameter.
    ///
    /// Forced fragments always come first. Default fragments replace `q` when
    /// it is missing or empty, never when `q` merely failed to match.
    ///
    /// An explicitly empty `q=` counts as missing and gets the defaults; it does
    /// not suppress them.
    pub fn assemble(q: Option<&str>, schema: &Schema) -> FilterClause {
        let mut clause = FilterClauseBuilder::default();

        for (fragment, value) in &schema.force_search {
            clause.push_raw(fragment, value);
        }

        match q.filter(|q| !q.is_empty()) {
            Some(q) => {
                let builder = PredicateBuilder::new(schema);
                let resolver = schema.resolver();
                for token in q.split('|') {
                    match builder.build(token, &resolver) {
                        Some(predicate) => clause.push(predicate),
                        None => debug!(token, "skipping unresolved filter token"),
                    }
                }
            }
            None => {
                trace!(count = schema.default_search.len(), "applying default search");
                for (fragment, value) in &schema.default_search {
                    clause.push_keyed(fragment, value, schema.argument_key(fragment));
                }
            }
        }

        clause.finish()
    }
}
