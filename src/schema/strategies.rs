/// Renders the placeholder text bound to one predicate.
///
/// Receives the alias as written in the request (for aggregate filters the
/// compound `<alias>__<fn>` form).
pub trait PlaceholderStrategy: Send + Sync {
    fn placeholder(&self, alias: &str) -> String;
}

impl<F> PlaceholderStrategy for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn placeholder(&self, alias: &str) -> String {
        self(alias)
    }
}

/// Picks the key a bound value is stored under in the argument map.
///
/// `column` is the entry for `alias` in the schema's own column mapping, `None`
/// when the alias is not configured (pass-through aliases, aggregate
/// expressions, raw default-search fragments).
pub trait ArgumentKeyStrategy: Send + Sync {
    fn key(&self, alias: &str, column: Option<&str>) -> String;
}

impl<F> ArgumentKeyStrategy for F
where
    F: Fn(&str, Option<&str>) -> String + Send + Sync,
{
    fn key(&self, alias: &str, column: Option<&str>) -> String {
        self(alias, column)
    }
}

/// `?` for every predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalPlaceholder;

impl PlaceholderStrategy for PositionalPlaceholder {
    fn placeholder(&self, _alias: &str) -> String {
        "?".to_string()
    }
}

/// `<prefix><alias>`, e.g. `$age` or `:age`.
#[derive(Debug, Clone)]
pub struct NamedPlaceholder {
    pub prefix: String,
}

impl NamedPlaceholder {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string() }
    }
}

impl PlaceholderStrategy for NamedPlaceholder {
    fn placeholder(&self, alias: &str) -> String {
        format!("{}{}", self.prefix, alias)
    }
}

/// Resolved column name, falling back to the alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnKey;

impl ArgumentKeyStrategy for ColumnKey {
    fn key(&self, alias: &str, column: Option<&str>) -> String {
        column.unwrap_or(alias).to_string()
    }
}

/// The alias exactly as the request spelled it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasKey;

impl ArgumentKeyStrategy for AliasKey {
    fn key(&self, alias: &str, _column: Option<&str>) -> String {
        alias.to_string()
    }
}
