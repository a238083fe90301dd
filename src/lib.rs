//! Translates URL query-string filter expressions into the pieces of a
//! parameterized SQL query.
//!
//! ```
//! use qs2sql::{Schema, Translator};
//!
//! let translator = Translator::new(Schema::new().with_column("a", "age").with_column("n", "name"));
//! let result = translator.translate_query("q=a__gte__18|n__ico__ann&s=-a&f=n,a__avg").unwrap();
//!
//! assert_eq!(result.where_clause.text, "age >= ? AND LOWER(name) LIKE ?");
//! assert_eq!(result.order_by, "age DESC");
//! assert_eq!(result.select, "name,AVG(age) AS a__avg");
//! ```

pub mod schema;
pub use schema::{
    AggregateTable, AliasKey, AliasPolicy, Argument, ArgumentKeyStrategy, ColumnKey, NamedPlaceholder,
    PlaceholderStrategy, PositionalPlaceholder, Schema,
};

pub mod grammar;

pub mod clauses;
pub use clauses::FilterClause;

pub mod translator;
pub use translator::{QueryValues, TranslateError, TranslationResult, Translator};
