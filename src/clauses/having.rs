use tracing::debug;

use crate::{
    clauses::{AggregateExpr, FilterClause, FilterClauseBuilder},
    grammar::PredicateBuilder,
    schema::Schema,
};

pub struct HavingAssembler;

impl HavingAssembler {
    /// Builds the HAVING clause from the `h` parameter.
    ///
    /// Tokens look like WHERE tokens whose alias is an aggregate expression,
    /// `a__sum__lt__1`. Each recognised `a__sum` prefix whose base alias
    /// resolves in the schema's own mapping is added to a working copy of the
    /// mapping as `SUM(<column>)` before the token goes through the predicate
    /// builder. Synthesized entries are never bases themselves, so aggregates
    /// do not nest.
    pub fn assemble(h: Option<&str>, schema: &Schema) -> FilterClause {
        let mut clause = FilterClauseBuilder::default();
        let Some(h) = h.filter(|h| !h.is_empty()) else {
            return clause.finish();
        };

        let builder = PredicateBuilder::new(schema);
        let base_resolver = schema.resolver();
        let mut resolver = schema.resolver();
        for token in h.split('|') {
            for expr in AggregateExpr::scan_prefix(token, schema.aggregates()) {
                let Some(column) = base_resolver.resolve(expr.base) else {
                    continue;
                };
                resolver.insert(expr.alias(), expr.apply(column));
            }

            match builder.build(token, &resolver) {
                Some(predicate) => clause.push(predicate),
                None => debug!(token, "skipping unresolved having token"),
            }
        }

        clause.finish()
    }
}
