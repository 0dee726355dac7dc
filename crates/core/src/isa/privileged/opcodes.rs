//! RISC-V Privileged Architecture Opcodes.
//!
//! Defines the system opcode and the function codes that select among CSR
//! access, environment calls, breakpoints, and wait-for-interrupt.

/// System instruction opcode (0b1110011).
/// Used for CSR instructions, ECALL, EBREAK, WFI, etc.
pub const OP_SYSTEM: u32 = 0b1110011;

/// PRIV funct3 value (0b000).
/// Selects the non-CSR system instructions, which are further distinguished
/// by the funct12 field.
pub const PRIV: u32 = 0b000;

/// Environment Call (ECALL) funct12 value.
/// Traps to a higher privilege level.
pub const ECALL: u32 = 0x000;

/// Environment Break (EBREAK) funct12 value.
/// Used by debuggers to cause a breakpoint trap.
pub const EBREAK: u32 = 0x001;

/// Wait for Interrupt (WFI) funct12 value.
/// Stalls the processor until an interrupt occurs.
pub const WFI: u32 = 0x105;

/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u32 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u32 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u32 = 0b011;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u32 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u32 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u32 = 0b111;
