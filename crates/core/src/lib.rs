//! RV32 pipeline-trace decoder library.
//!
//! This crate implements the instruction-naming half of a pipeline trace
//! tool for a five-stage RV32 core:
//! 1. **ISA:** Opcode and function-code tables for RV32I, the multiply/divide
//!    subset of the M extension, and the system (privileged) opcode class.
//! 2. **Classifier:** A pure, total mapping from a raw 32-bit instruction
//!    word to its canonical mnemonic.
//! 3. **Trace:** A scoped writer producing the fixed-width per-cycle pipeline
//!    trace table (stage cells, register writeback, memory-bus activity).

/// Instruction set definitions (field extraction, opcode tables, classifier).
pub mod isa;
/// Per-cycle pipeline trace table writer.
pub mod trace;

/// Classifies a 32-bit instruction word; total over all inputs.
pub use crate::isa::classify::classify;
/// Closed mnemonic vocabulary produced by [`classify`].
pub use crate::isa::mnemonic::Mnemonic;
/// Scoped trace-file writer; acquire at trace start, release with `finish`.
pub use crate::trace::TraceWriter;
