//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and the instruction
//! classifier, organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit).
//! * `rv32m`: Standard Extension for Integer Multiplication and Division
//!   (named by the classifier; the traced pipeline does not execute the
//!   divide/remainder group).
//! * `privileged`: System opcode class (ECALL, EBREAK, WFI, CSR access).

/// Instruction classifier mapping raw words to mnemonics.
pub mod classify;

/// Instruction field masks and bit extraction utilities.
pub mod instruction;

/// Canonical mnemonic vocabulary.
pub mod mnemonic;

/// Privileged architecture definitions (system instructions, CSR access).
pub mod privileged;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Integer multiply/divide extension (MUL, DIV, REM instructions).
pub mod rv32m;
