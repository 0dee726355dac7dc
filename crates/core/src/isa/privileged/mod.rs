//! Privileged Architecture Definitions.
//!
//! Defines constants for the system opcode class: environment calls,
//! breakpoints, wait-for-interrupt, and CSR access instructions.
//!
//! # Modules
//!
//! - `opcodes`: System instruction opcodes and function codes.

/// System instruction opcodes (ECALL, EBREAK, WFI, CSR access).
pub mod opcodes;
