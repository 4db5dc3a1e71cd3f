//! Purpose: Mock cost, delay, and risk prediction from an input record.
//! Exports: `predict`, `OutputRecord`, `STATUS_SUCCESS`, `MODEL_VERSION`.
//! Role: Pure computation; no I/O and no hidden state.
//! Invariants: Field order of `OutputRecord` is the serialized order.
//! Invariants: Every emitted number is finite.
use serde::Serialize;

use crate::core::error::{Error, ErrorKind};
use crate::core::input::InputRecord;
use crate::core::round::round_to;

pub const STATUS_SUCCESS: &str = "Success";
pub const MODEL_VERSION: &str = "v1.0-mock";

const DELAY_DAYS_PER_COMPLEXITY: f64 = 2.5;
const RISK_PER_COMPLEXITY: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputRecord {
    pub predicted_cost: f64,
    pub predicted_delay_days: f64,
    pub risk_score: f64,
    pub status: &'static str,
    pub model_version: &'static str,
}

pub fn predict(input: &InputRecord) -> Result<OutputRecord, Error> {
    let predicted_cost = input.base_cost * (1.0 + input.inflation / 100.0);
    let predicted_delay_days = input.complexity * DELAY_DAYS_PER_COMPLEXITY;
    let risk_score = input.complexity * RISK_PER_COMPLEXITY + input.inflation;

    Ok(OutputRecord {
        predicted_cost: finite("predicted_cost", round_to(predicted_cost, 2))?,
        predicted_delay_days: finite("predicted_delay_days", round_to(predicted_delay_days, 0))?,
        risk_score: finite("risk_score", round_to(risk_score, 2))?,
        status: STATUS_SUCCESS,
        model_version: MODEL_VERSION,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(Error::new(ErrorKind::Input)
        .with_message("computed value is not a finite number")
        .with_field(field))
}

#[cfg(test)]
mod tests {
    use super::{MODEL_VERSION, STATUS_SUCCESS, predict};
    use crate::core::error::ErrorKind;
    use crate::core::input::InputRecord;

    fn record(complexity: f64, inflation: f64, base_cost: f64) -> InputRecord {
        InputRecord {
            complexity,
            inflation,
            base_cost,
        }
    }

    #[test]
    fn reference_scenario() {
        let output = predict(&record(3.0, 5.0, 200_000.0)).expect("predict");
        assert_eq!(output.predicted_cost, 210_000.0);
        assert_eq!(output.predicted_delay_days, 8.0);
        assert_eq!(output.risk_score, 35.0);
        assert_eq!(output.status, STATUS_SUCCESS);
        assert_eq!(output.model_version, MODEL_VERSION);
    }

    #[test]
    fn defaults_round_half_delay_to_even() {
        let output = predict(&InputRecord::default()).expect("predict");
        assert_eq!(output.predicted_cost, 100_000.0);
        assert_eq!(output.predicted_delay_days, 2.0);
        assert_eq!(output.risk_score, 10.0);
    }

    #[test]
    fn fractional_inputs_are_rounded() {
        let output = predict(&record(1.3, 2.25, 1000.0)).expect("predict");
        assert_eq!(output.predicted_cost, 1022.5);
        assert_eq!(output.predicted_delay_days, 3.0);
        assert_eq!(output.risk_score, 15.25);
    }

    #[test]
    fn negative_inputs_are_computed_as_is() {
        let output = predict(&record(-2.0, -10.0, 500.0)).expect("predict");
        assert_eq!(output.predicted_cost, 450.0);
        assert_eq!(output.predicted_delay_days, -5.0);
        assert_eq!(output.risk_score, -30.0);
    }

    #[test]
    fn overflow_is_reported_not_emitted() {
        let err = predict(&record(1.0, 100.0, f64::MAX)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(err.field(), Some("predicted_cost"));
    }

    #[test]
    fn serializes_fields_in_record_order() {
        let output = predict(&record(3.0, 5.0, 200_000.0)).expect("predict");
        let line = serde_json::to_string(&output).expect("encode");
        assert_eq!(
            line,
            r#"{"predicted_cost":210000.0,"predicted_delay_days":8.0,"risk_score":35.0,"status":"Success","model_version":"v1.0-mock"}"#
        );
    }
}
