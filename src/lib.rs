//! Purpose: Library crate backing the `predict` binary and its tests.
//! Exports: `core` (input reading, prediction, rounding, errors), `json` (decode seam).
//! Role: Keeps the computation pure and testable; the binary only does I/O.
//! Invariants: Nothing in this crate writes to stdout; emission lives in `main.rs`.
pub mod core;
pub mod json;
