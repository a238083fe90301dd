use crate::schema::AggregateTable;

/// `<base>__<key>` where `key` is an aggregate table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateExpr<'t> {
    pub base: &'t str,
    pub key: &'t str,
    pub function: &'t str,
}

impl<'t> AggregateExpr<'t> {
    /// The compound alias, e.g. `a__sum`.
    pub fn alias(&self) -> String {
        format!("{}__{}", self.base, self.key)
    }

    /// `FN(column)`.
    pub fn apply(&self, column: &str) -> String {
        format!("{}({})", self.function, column)
    }

    /// Matches a whole select item, `a__sum`. First table entry wins.
    pub fn parse_item(item: &'t str, table: &'t AggregateTable) -> Option<Self> {
        table.iter().find_map(|(key, function)| {
            let base = item.strip_suffix(key)?.strip_suffix("__")?;
            is_alias(base).then_some(Self { base, key, function })
        })
    }

    /// Every aggregate prefix found at the start of a HAVING token,
    /// `a__sum__lt__1` yields `a__sum`.
    pub fn scan_prefix(token: &'t str, table: &'t AggregateTable) -> Vec<Self> {
        table
            .iter()
            .filter_map(|(key, function)| {
                let marker = format!("__{}__", key);
                let base = &token[..token.find(&marker)?];
                is_alias(base).then_some(Self { base, key, function })
            })
            .collect()
    }
}

fn is_alias(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_alphanumeric() || ch == '_')
}
