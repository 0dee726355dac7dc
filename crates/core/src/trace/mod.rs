//! Per-Cycle Pipeline Trace Table.
//!
//! Formats the fixed-width, human-readable trace a five-stage pipeline
//! emits once per simulated clock: one row per cycle, one cell per stage
//! (PC and mnemonic), plus register-writeback and memory-bus columns.
//!
//! The output stream is a scoped resource owned by [`TraceWriter`]:
//! acquired at trace start, written only through its methods, and released
//! deterministically by [`TraceWriter::finish`]. The instruction classifier
//! stays stateless; this module is its only I/O-bearing consumer.

/// Trace table writer and row-cell types.
pub mod writer;

pub use writer::{BusCommand, RegWrite, StageSlot, TraceError, TraceWriter};
