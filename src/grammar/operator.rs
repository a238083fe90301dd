use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::Argument;

/// Binary operators a filter token can use, `<alias>__<op>__<value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Contains,
    ContainsIgnoreCase,
    StartsWith,
    EndsWith,
    In,
    NotIn,
}

impl Operator {
    /// Matching order. Tokens are not exclusive at the character level, the
    /// first operator in this list that matches wins.
    pub const ALL: [Operator; 12] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::Contains,
        Operator::ContainsIgnoreCase,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::In,
        Operator::NotIn,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Operator::Equal => "eq",
            Operator::NotEqual => "ne",
            Operator::LessThan => "lt",
            Operator::LessThanOrEqual => "lte",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanOrEqual => "gte",
            Operator::Contains => "co",
            Operator::ContainsIgnoreCase => "ico",
            Operator::StartsWith => "sw",
            Operator::EndsWith => "ew",
            Operator::In => "in",
            Operator::NotIn => "ni",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// SQL condition for `column` bound to `placeholder`.
    pub fn render(self, column: &str, placeholder: &str) -> String {
        match self {
            Operator::Equal => format!("{} = {}", column, placeholder),
            Operator::NotEqual => format!("{} <> {}", column, placeholder),
            Operator::LessThan => format!("{} < {}", column, placeholder),
            Operator::LessThanOrEqual => format!("{} <= {}", column, placeholder),
            Operator::GreaterThan => format!("{} > {}", column, placeholder),
            Operator::GreaterThanOrEqual => format!("{} >= {}", column, placeholder),
            Operator::Contains | Operator::StartsWith | Operator::EndsWith => {
                format!("{} LIKE {}", column, placeholder)
            }
            Operator::ContainsIgnoreCase => format!("LOWER({}) LIKE {}", column, placeholder),
            Operator::In => format!("{} IN ({})", column, placeholder),
            Operator::NotIn => format!("{} NOT IN ({})", column, placeholder),
        }
    }

    /// The bound value for the raw text captured from the token.
    pub fn bind(self, raw: &str) -> Argument {
        match self {
            Operator::Contains => Argument::Text(format!("%{}%", raw)),
            Operator::ContainsIgnoreCase => Argument::Text(format!("%{}%", raw.to_lowercase())),
            Operator::StartsWith => Argument::Text(format!("{}%", raw)),
            Operator::EndsWith => Argument::Text(format!("%{}", raw)),
            Operator::In | Operator::NotIn => {
                Argument::List(raw.split(',').map(str::to_string).collect())
            }
            _ => Argument::Text(raw.to_string()),
        }
    }

    fn pattern(self) -> String {
        // the alias is lazy so a value containing `__` stays part of the value
        if self.is_list() {
            format!(r"(\w+?)__{}__\[(\S+)\]", self.suffix())
        } else {
            format!(r"(\w+?)__{}__(\S+)", self.suffix())
        }
    }
}

/// One compiled entry of the operator table.
#[derive(Debug)]
pub struct OperatorRule {
    pub operator: Operator,
    regex: Regex,
}

/// A token split by an [`OperatorRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorMatch<'t> {
    pub operator: Operator,
    pub alias: &'t str,
    pub raw_value: &'t str,
}

impl OperatorRule {
    fn compile(operator: Operator) -> Self {
        let regex = Regex::new(&operator.pattern()).expect("operator patterns are valid regexes");
        Self { operator, regex }
    }

    pub fn matches<'t>(&self, token: &'t str) -> Option<OperatorMatch<'t>> {
        let captures = self.regex.captures(token)?;
        let alias = captures.get(1)?.as_str();
        let raw_value = captures.get(2)?.as_str();
        Some(OperatorMatch { operator: self.operator, alias, raw_value })
    }
}

pub static OPERATOR_RULES: Lazy<Vec<OperatorRule>> =
    Lazy::new(|| Operator::ALL.into_iter().map(OperatorRule::compile).collect());

/// Runs `token` through the operator table in order and returns the first match.
pub fn match_operator(token: &str) -> Option<OperatorMatch<'_>> {
    OPERATOR_RULES.iter().find_map(|rule| rule.matches(token))
}
