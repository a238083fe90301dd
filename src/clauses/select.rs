use tracing::debug;

use crate::{clauses::AggregateExpr, schema::Schema};

pub struct SelectAssembler;

impl SelectAssembler {
    /// Renders one `f` item.
    ///
    /// A mapped alias is emitted as its column. Otherwise `<alias>__<key>` is
    /// tried against the aggregate table and emitted as `FN(<column>) AS <item>`.
    /// Pass-through aliases are only considered after both.
    pub fn parse_single(item: &str, schema: &Schema) -> Option<String> {
        let resolver = schema.resolver();
        if let Some(column) = resolver.lookup(item) {
            return Some(column.to_string());
        }

        if let Some(expr) = AggregateExpr::parse_item(item, schema.aggregates()) {
            if let Some(column) = resolver.resolve(expr.base) {
                return Some(format!("{} AS {}", expr.apply(column), item));
            }
        }

        resolver.resolve(item).map(str::to_string)
    }

    pub fn assemble(f: Option<&str>, schema: &Schema) -> String {
        let Some(f) = f else {
            return String::new();
        };

        let mut projection: Vec<String> = vec![];
        for item in f.split(',') {
            match Self::parse_single(item, schema) {
                Some(rendered) => projection.push(rendered),
                None if item.is_empty() => {}
                None => debug!(item, "skipping unresolved select item"),
            }
        }

        projection.join(",")
    }
}
