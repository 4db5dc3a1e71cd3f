//! Purpose: Read the prediction input record from a JSON payload.
//! Exports: `InputRecord`, default constants.
//! Role: Explicit named-field read with per-field defaults.
//! Invariants: Absent fields take their default independently of other fields.
//! Invariants: A present field must be a JSON number or boolean (`true` is 1, `false` is 0).
//! Invariants: Null, strings, arrays, and objects are rejected as type mismatches.
//! Invariants: Numbers too large for `f64` are input errors, not parse errors.
//! Invariants: Unknown keys are ignored; no range validation is applied.
use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};
use crate::json::parse::{self, ParseFailureCategory};

pub const DEFAULT_COMPLEXITY: f64 = 1.0;
pub const DEFAULT_INFLATION: f64 = 0.0;
pub const DEFAULT_BASE_COST: f64 = 100_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRecord {
    pub complexity: f64,
    /// Percent, so `5` means +5%.
    pub inflation: f64,
    pub base_cost: f64,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            complexity: DEFAULT_COMPLEXITY,
            inflation: DEFAULT_INFLATION,
            base_cost: DEFAULT_BASE_COST,
        }
    }
}

impl InputRecord {
    /// Decodes `text` as JSON and reads the record from the resulting object.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let value: Value = parse::from_str(text).map_err(|err| {
            let category = parse::categorize_error(&err);
            let kind = match category {
                ParseFailureCategory::NumericRange => ErrorKind::Input,
                _ => ErrorKind::Parse,
            };
            Error::new(kind)
                .with_message(format!("invalid JSON input ({})", category.label()))
                .with_source(err)
        })?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let object = value.as_object().ok_or_else(|| {
            Error::new(ErrorKind::Input).with_message(format!(
                "input must be a JSON object, got {}",
                type_name(value)
            ))
        })?;

        Ok(Self {
            complexity: number_field(object, "complexity", DEFAULT_COMPLEXITY)?,
            inflation: number_field(object, "inflation", DEFAULT_INFLATION)?,
            base_cost: number_field(object, "base_cost", DEFAULT_BASE_COST)?,
        })
    }
}

fn number_field(
    object: &Map<String, Value>,
    name: &'static str,
    default: f64,
) -> Result<f64, Error> {
    let Some(value) = object.get(name) else {
        return Ok(default);
    };
    if let Value::Bool(flag) = value {
        return Ok(if *flag { 1.0 } else { 0.0 });
    }
    value.as_f64().ok_or_else(|| {
        Error::new(ErrorKind::Input)
            .with_message(format!("expected a number, got {}", type_name(value)))
            .with_field(name)
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
