//! # ISA Unit Tests
//!
//! Unit tests for instruction classification and the mnemonic vocabulary.


/// Classifier property tests.
///
/// Totality over random 32-bit words, exhaustiveness of each funct3
/// space, and default-arm behavior for unlisted function codes.
pub mod classify_properties;

/// Mnemonic vocabulary tests.
///
/// Pins the textual identifiers: `as_str`, `Display`, and serde must all
/// agree, and the vocabulary must contain exactly the published names.
pub mod mnemonic;
