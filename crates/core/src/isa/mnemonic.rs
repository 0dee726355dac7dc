//! Canonical Mnemonic Vocabulary.
//!
//! A mnemonic is the short name a trace consumer prints for an instruction
//! class (`addi`, `beq`, `lui`, ...). The vocabulary is closed: every
//! 32-bit word classifies to exactly one of these identifiers, including
//! the two sentinels `unknown` (no rule matched) and `system` (system
//! opcode class, but not one of the specifically named system operations).
//!
//! The textual form is stable: `as_str`, `Display`, and serde all produce
//! the same lowercase identifier, so consumers keying on the string see a
//! fixed set of names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical instruction-class name produced by the classifier.
///
/// Pure value type: produced fresh on each classification, with no
/// relationship to the word it was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    /// The canonical `addi x0, x0, 0` encoding, shown under its human name.
    Nop,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Branch if less than (unsigned).
    Bltu,
    /// Branch if greater or equal (unsigned).
    Bgeu,
    /// Load byte (signed).
    Lb,
    /// Load halfword (signed).
    Lh,
    /// Load word.
    Lw,
    /// Load byte (unsigned).
    Lbu,
    /// Load halfword (unsigned).
    Lhu,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
    /// Add immediate.
    Addi,
    /// Set less than immediate (signed).
    Slti,
    /// Set less than immediate (unsigned).
    Sltiu,
    /// XOR immediate.
    Xori,
    /// OR immediate.
    Ori,
    /// AND immediate.
    Andi,
    /// Shift left logical immediate.
    Slli,
    /// Shift right logical immediate.
    Srli,
    /// Shift right arithmetic immediate.
    Srai,
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than (unsigned).
    Sltu,
    /// XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// OR.
    Or,
    /// AND.
    And,
    /// Multiply (low word).
    Mul,
    /// Multiply high (signed x signed).
    Mulh,
    /// Multiply high (signed x unsigned).
    Mulhsu,
    /// Multiply high (unsigned x unsigned).
    Mulhu,
    /// Divide (signed). Named by the classifier; not executed by the
    /// traced pipeline.
    Div,
    /// Divide (unsigned). Decode-only name, as for `Div`.
    Divu,
    /// Remainder (signed). Decode-only name, as for `Div`.
    Rem,
    /// Remainder (unsigned). Decode-only name, as for `Div`.
    Remu,
    /// Memory fence.
    Fence,
    /// Environment call.
    Ecall,
    /// Environment breakpoint.
    Ebreak,
    /// Wait for interrupt.
    Wfi,
    /// CSR atomic read/write.
    Csrrw,
    /// CSR atomic read and set bits.
    Csrrs,
    /// CSR atomic read and clear bits.
    Csrrc,
    /// CSR atomic read/write, immediate form.
    Csrrwi,
    /// CSR atomic read and set bits, immediate form.
    Csrrsi,
    /// CSR atomic read and clear bits, immediate form.
    Csrrci,
    /// Sentinel: system opcode class, but no specifically named operation.
    System,
    /// Sentinel: no classification rule matched.
    Unknown,
}

impl Mnemonic {
    /// Every member of the vocabulary, named mnemonics first, sentinels last.
    pub const ALL: [Self; 58] = [
        Self::Nop,
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bltu,
        Self::Bgeu,
        Self::Lb,
        Self::Lh,
        Self::Lw,
        Self::Lbu,
        Self::Lhu,
        Self::Sb,
        Self::Sh,
        Self::Sw,
        Self::Addi,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Slli,
        Self::Srli,
        Self::Srai,
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
        Self::Mul,
        Self::Mulh,
        Self::Mulhsu,
        Self::Mulhu,
        Self::Div,
        Self::Divu,
        Self::Rem,
        Self::Remu,
        Self::Fence,
        Self::Ecall,
        Self::Ebreak,
        Self::Wfi,
        Self::Csrrw,
        Self::Csrrs,
        Self::Csrrc,
        Self::Csrrwi,
        Self::Csrrsi,
        Self::Csrrci,
        Self::System,
        Self::Unknown,
    ];

    /// Returns the canonical lowercase identifier for this mnemonic.
    ///
    /// This is the exact string a trace consumer prints in the stage cell.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
            Self::Fence => "fence",
            Self::Ecall => "ecall",
            Self::Ebreak => "ebreak",
            Self::Wfi => "wfi",
            Self::Csrrw => "csrrw",
            Self::Csrrs => "csrrs",
            Self::Csrrc => "csrrc",
            Self::Csrrwi => "csrrwi",
            Self::Csrrsi => "csrrsi",
            Self::Csrrci => "csrrci",
            Self::System => "system",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` for the two sentinel values (`unknown`, `system`).
    ///
    /// Sentinels are normal results, not failures; this is a convenience
    /// for consumers that want to count imprecisely named words.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::System | Self::Unknown)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
