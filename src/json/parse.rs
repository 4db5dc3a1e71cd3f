//! Purpose: Provide the runtime JSON decode entrypoint and failure categories.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `categorize_message`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable; they appear in emitted error text.
//! Notes: Error mapping to crate errors is done by callsites so context stays explicit.

use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    NumericRange,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::Eof => "unexpected-end",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        serde_json::error::Category::Syntax => categorize_message(&err.to_string()),
        serde_json::error::Category::Eof => ParseFailureCategory::Eof,
        serde_json::error::Category::Data => ParseFailureCategory::Data,
        serde_json::error::Category::Io => ParseFailureCategory::Io,
    }
}

/// Splits syntax failures by message; serde_json reports out-of-range
/// numbers such as `1e400` as syntax errors.
pub fn categorize_message(message: &str) -> ParseFailureCategory {
    if message.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else {
        ParseFailureCategory::Syntax
    }
}
