//! # Unit Components
//!
//! Aggregates the unit-test modules for the core library.

/// Unit tests for the ISA classifier and mnemonic vocabulary.
///
/// Covers every dispatch table, the dispatch tie-breaks (funct7 gating,
/// combined-key disambiguation), the sentinels, and totality over the
/// full 32-bit input domain.
pub mod isa;

/// Unit tests for the pipeline trace writer.
///
/// Verifies the fixed-width cell formats byte-for-byte against a real
/// temporary file.
pub mod trace;
