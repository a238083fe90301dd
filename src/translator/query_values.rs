use indexmap::IndexMap;
use url::form_urlencoded;

use crate::translator::TranslateError;

/// Decoded, multi-valued query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: IndexMap<String, Vec<String>>,
}

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw query string (no leading `?`).
    ///
    /// `+` decodes to a space and `%XX` to its byte. A `%` that is not followed
    /// by two hex digits, or a `;` used as a separator, is an error.
    pub fn parse(query: &str) -> Result<Self, TranslateError> {
        let mut values = Self::new();
        for segment in query.split('&') {
            if segment.contains(';') {
                return Err(TranslateError::InvalidSemicolon);
            }
            if segment.is_empty() {
                continue;
            }
            check_escapes(segment)?;
            for (key, value) in form_urlencoded::parse(segment.as_bytes()) {
                values.append(key, value);
            }
        }

        Ok(values)
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.append(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// First value for `key`; later values are ignored by every clause.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}

fn check_escapes(segment: &str) -> Result<(), TranslateError> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2 && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                let escape = String::from_utf8_lossy(&bytes[i..end]).into_owned();
                return Err(TranslateError::InvalidEscape(escape));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
