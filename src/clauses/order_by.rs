use tracing::{debug, trace};

use crate::schema::Schema;

pub struct OrderByAssembler;

impl OrderByAssembler {
    /// Renders one `s` term, `-age` becomes `<column> DESC`.
    pub fn parse_single(term: &str, schema: &Schema) -> Option<String> {
        let (alias, direction) = match term.strip_prefix('-') {
            Some(alias) => (alias, "DESC"),
            None => (term, "ASC"),
        };

        let resolver = schema.resolver();
        let column = resolver.resolve(alias)?;
        Some(format!("{} {}", column, direction))
    }

    /// Builds the ORDER BY list from the `s` parameter.
    ///
    /// Forced terms always lead. Default terms follow them only when `s` is
    /// missing or empty. An explicitly empty `s=` counts as missing.
    pub fn assemble(s: Option<&str>, schema: &Schema) -> String {
        let mut terms: Vec<String> = schema.force_order_by.clone();

        match s.filter(|s| !s.is_empty()) {
            Some(s) => {
                for term in s.split(',') {
                    match Self::parse_single(term, schema) {
                        Some(rendered) => terms.push(rendered),
                        None => debug!(term, "skipping unresolved sort term"),
                    }
                }
            }
            None => {
                trace!(count = schema.default_order_by.len(), "applying default order");
                terms.extend(schema.default_order_by.iter().cloned());
            }
        }

        terms.join(",")
    }
}
