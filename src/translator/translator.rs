use tracing::trace;
use url::Url;

use crate::{
    clauses::{GroupByAssembler, HavingAssembler, OrderByAssembler, SelectAssembler, WhereAssembler},
    schema::Schema,
    translator::{QueryValues, TranslateError, TranslationResult},
};

pub const FILTER_PARAM: &str = "q";
pub const SORT_PARAM: &str = "s";
pub const GROUP_PARAM: &str = "g";
pub const SELECT_PARAM: &str = "f";
pub const HAVING_PARAM: &str = "h";

/// Base used to parse origin-form request targets such as `/items?q=...`.
const ORIGIN_BASE: &str = "http://localhost";

/// Translates request parameters into SQL clauses against one [`Schema`].
///
/// Holds no per-request state, so one translator can serve any number of
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    schema: Schema,
}

impl Translator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn translate(&self, params: &QueryValues) -> TranslationResult {
        let schema = &self.schema;
        let result = TranslationResult {
            where_clause: WhereAssembler::assemble(params.first(FILTER_PARAM), schema),
            having: HavingAssembler::assemble(params.first(HAVING_PARAM), schema),
            order_by: OrderByAssembler::assemble(params.first(SORT_PARAM), schema),
            group_by: GroupByAssembler::assemble(params.first(GROUP_PARAM), schema),
            select: SelectAssembler::assemble(params.first(SELECT_PARAM), schema),
        };

        trace!(
            where_clause = %result.where_clause.text,
            having = %result.having.text,
            order_by = %result.order_by,
            group_by = %result.group_by,
            select = %result.select,
            "translated request"
        );
        result
    }

    /// Decodes a raw query string, e.g. `q=a__eq__1&s=-a`, and translates it.
    pub fn translate_query(&self, query: &str) -> Result<TranslationResult, TranslateError> {
        let params = QueryValues::parse(query)?;
        Ok(self.translate(&params))
    }

    /// Parses a request URI and translates its query component.
    ///
    /// Accepts absolute URLs and origin-form targets starting with `/`.
    pub fn translate_uri(&self, uri: &str) -> Result<TranslationResult, TranslateError> {
        let url = match Url::parse(uri) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) if uri.starts_with('/') => {
                Url::parse(ORIGIN_BASE)?.join(uri)?
            }
            Err(err) => return Err(err.into()),
        };

        let params: QueryValues = url.query_pairs().collect();
        Ok(self.translate(&params))
    }
}

impl From<Schema> for Translator {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}
