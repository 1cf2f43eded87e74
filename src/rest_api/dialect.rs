//! # Response Dialects
//!
//! The two external shape conventions of the order-status endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::QueryGrammar;

/// Request/response convention of one endpoint version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Embedded-form query; flat object responses, 404 on unknown orders
    #[default]
    #[value(alias = "v1")]
    Legacy,
    /// Structured JSON query; array responses, `[]` on unknown orders
    #[value(alias = "v2")]
    Current,
}

impl Dialect {
    /// Query grammar this dialect accepts
    pub fn grammar(self) -> QueryGrammar {
        match self {
            Dialect::Legacy => QueryGrammar::Embedded,
            Dialect::Current => QueryGrammar::Structured,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Legacy => "legacy",
            Dialect::Current => "current",
        }
    }

    /// Versioned path segment (`v1` / `v2`)
    pub fn version(self) -> &'static str {
        match self {
            Dialect::Legacy => "v1",
            Dialect::Current => "v2",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_binding() {
        assert_eq!(Dialect::Legacy.grammar(), QueryGrammar::Embedded);
        assert_eq!(Dialect::Current.grammar(), QueryGrammar::Structured);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Dialect::Current).unwrap(), "\"current\"");
        let parsed: Dialect = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(parsed, Dialect::Legacy);
    }
}
