use tracing::debug;

use crate::schema::Schema;

pub struct GroupByAssembler;

impl GroupByAssembler {
    /// Resolves the comma separated aliases of `g`, keeping their order.
    pub fn assemble(g: Option<&str>, schema: &Schema) -> String {
        let Some(g) = g else {
            return String::new();
        };

        let resolver = schema.resolver();
        let mut columns: Vec<&str> = vec![];
        for item in g.split(',') {
            match resolver.resolve(item) {
                Some(column) => columns.push(column),
                None if item.is_empty() => {}
                None => debug!(item, "skipping unresolved group by alias"),
            }
        }

        columns.join(",")
    }
}
