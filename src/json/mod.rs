//! Purpose: Internal JSON parsing boundary for the CLI input payload.
//! Exports: `parse` module with decode and categorization helpers.
//! Role: Single seam for decoding so callsites avoid ad hoc serde_json calls.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
