use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A value bound to a placeholder.
///
/// Values are never interpreted: filter values stay the text the caller sent,
/// `in` / `ni` values become a list that binds to a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    Text(String),
    List(Vec<String>),
}

impl Argument {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Argument::Text(text) => Some(text),
            Argument::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Argument::Text(_) => None,
            Argument::List(list) => Some(list),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Argument::List(_))
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(value)
    }
}

impl From<Vec<String>> for Argument {
    fn from(value: Vec<String>) -> Self {
        Argument::List(value)
    }
}

impl From<Vec<&str>> for Argument {
    fn from(value: Vec<&str>) -> Self {
        Argument::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Argument {
    fn from(value: [&str; N]) -> Self {
        Argument::List(value.iter().map(|v| v.to_string()).collect())
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Text(text) => write!(f, "{}", text),
            Argument::List(list) => write!(f, "[{}]", list.join(",")),
        }
    }
}
