use crate::{
    grammar::{match_operator, Operator},
    schema::{Argument, ColumnResolver, Schema},
};

/// One SQL condition produced from a filter token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Argument map key chosen by the schema's key strategy.
    pub key: String,
    pub operator: Operator,
    pub sql: String,
    pub value: Argument,
}

/// Turns `<alias>__<op>__<value>` tokens into [`Predicate`]s.
///
/// Shared by WHERE and HAVING; they differ only in the resolver they pass.
pub struct PredicateBuilder<'s> {
    schema: &'s Schema,
}

impl<'s> PredicateBuilder<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// `None` when no operator matches or the alias does not resolve.
    pub fn build(&self, token: &str, resolver: &ColumnResolver) -> Option<Predicate> {
        let found = match_operator(token)?;
        let column = resolver.resolve(found.alias)?;
        let placeholder = self.schema.placeholder(found.alias);

        Some(Predicate {
            key: self.schema.argument_key(found.alias),
            operator: found.operator,
            sql: found.operator.render(column, &placeholder),
            value: found.operator.bind(found.raw_value),
        })
    }
}
