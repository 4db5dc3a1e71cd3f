//! Purpose: Pure prediction core: input records, formulas, rounding, errors.
//! Exports: `error`, `input`, `predict`, `round`.
//! Role: Everything the binary computes; `main.rs` only reads args and emits JSON.
//! Invariants: Core modules do no I/O and hold no global state.
pub mod error;
pub mod input;
pub mod predict;
pub mod round;
