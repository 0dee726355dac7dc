//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes operations that share the
//! same opcode and `funct3` (e.g., ADD vs SUB), and gates the
//! shift-immediate encodings (SLLI/SRLI vs SRAI).

/// Default operation (ADD, SRL, SLLI, SRLI).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SRAI).
/// Used to distinguish SUB from ADD, and the arithmetic right shifts from
/// the logical ones.
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;
