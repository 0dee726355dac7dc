//! Instruction Classifier for RV32I + M.
//!
//! Maps a raw 32-bit instruction word to its canonical [`Mnemonic`] using
//! only bit-field extraction and opcode/function-code dispatch. The mapping
//! is total: every 32-bit value classifies to exactly one member of the
//! closed vocabulary, with `unknown` and `system` as ordinary results
//! rather than errors.
//!
//! # Usage
//!
//! ```
//! use pipetrace_core::{classify, Mnemonic};
//! assert_eq!(classify(0x00A0_0513), Mnemonic::Addi); // addi a0, x0, 10
//! assert_eq!(classify(0x0000_0013), Mnemonic::Nop);
//! ```

use crate::isa::instruction::InstructionBits;
use crate::isa::mnemonic::Mnemonic;
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

/// The canonical NOP encoding: `addi x0, x0, 0`.
///
/// Assemblers emit exactly this bit pattern for the `nop` idiom, so the
/// classifier reports the human name instead of `addi`.
pub const NOP: u32 = 0x0000_0013;

/// Classifies a 32-bit instruction word into its canonical mnemonic.
///
/// Pure and total: no input is rejected, no state is read or written, and
/// every path returns a value. Words the tables do not recognise come back
/// as [`Mnemonic::Unknown`]; recognised system-class words without a
/// specific name come back as [`Mnemonic::System`].
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn classify(inst: u32) -> Mnemonic {
    if inst == NOP {
        return Mnemonic::Nop;
    }

    let funct3 = inst.funct3();
    let funct7 = inst.funct7();
    let funct12 = inst.funct12();

    match inst.opcode() {
        // ── U/J/I-type singletons ─────────────────────────
        i_op::OP_LUI => Mnemonic::Lui,
        i_op::OP_AUIPC => Mnemonic::Auipc,
        i_op::OP_JAL => Mnemonic::Jal,
        i_op::OP_JALR => Mnemonic::Jalr,

        // ── Branches ──────────────────────────────────────
        i_op::OP_BRANCH => classify_branch(funct3),

        // ── Loads and stores ──────────────────────────────
        i_op::OP_LOAD => classify_load(funct3),
        i_op::OP_STORE => classify_store(funct3),

        // ── Arithmetic ────────────────────────────────────
        i_op::OP_IMM => classify_op_imm(funct3, funct7),
        i_op::OP_REG => classify_op_reg(funct3, funct7),

        // ── Fence and system ──────────────────────────────
        // The traced pipeline treats every MISC-MEM word as a plain fence.
        i_op::OP_MISC_MEM => Mnemonic::Fence,
        sys_op::OP_SYSTEM => classify_system(funct3, funct12),

        _ => Mnemonic::Unknown,
    }
}

/// Conditional branches: funct3 selects the comparison.
const fn classify_branch(funct3: u32) -> Mnemonic {
    match funct3 {
        i_f3::BEQ => Mnemonic::Beq,
        i_f3::BNE => Mnemonic::Bne,
        i_f3::BLT => Mnemonic::Blt,
        i_f3::BGE => Mnemonic::Bge,
        i_f3::BLTU => Mnemonic::Bltu,
        i_f3::BGEU => Mnemonic::Bgeu,
        _ => Mnemonic::Unknown,
    }
}

/// Loads: funct3 selects width and signedness.
const fn classify_load(funct3: u32) -> Mnemonic {
    match funct3 {
        i_f3::LB => Mnemonic::Lb,
        i_f3::LH => Mnemonic::Lh,
        i_f3::LW => Mnemonic::Lw,
        i_f3::LBU => Mnemonic::Lbu,
        i_f3::LHU => Mnemonic::Lhu,
        _ => Mnemonic::Unknown,
    }
}

/// Stores: funct3 selects width.
const fn classify_store(funct3: u32) -> Mnemonic {
    match funct3 {
        i_f3::SB => Mnemonic::Sb,
        i_f3::SH => Mnemonic::Sh,
        i_f3::SW => Mnemonic::Sw,
        _ => Mnemonic::Unknown,
    }
}

/// Immediate arithmetic: funct3 selects the operation; the shift forms are
/// additionally gated on funct7 (SRLI vs SRAI, and the fixed high bits of
/// SLLI).
const fn classify_op_imm(funct3: u32, funct7: u32) -> Mnemonic {
    match funct3 {
        i_f3::ADD_SUB => Mnemonic::Addi,
        i_f3::SLT => Mnemonic::Slti,
        i_f3::SLTU => Mnemonic::Sltiu,
        i_f3::XOR => Mnemonic::Xori,
        i_f3::OR => Mnemonic::Ori,
        i_f3::AND => Mnemonic::Andi,
        i_f3::SLL => match funct7 {
            i_f7::DEFAULT => Mnemonic::Slli,
            _ => Mnemonic::Unknown,
        },
        i_f3::SRL_SRA => match funct7 {
            i_f7::DEFAULT => Mnemonic::Srli,
            i_f7::SRA => Mnemonic::Srai,
            _ => Mnemonic::Unknown,
        },
        _ => Mnemonic::Unknown,
    }
}

/// Register-register arithmetic: the `(funct7, funct3)` pair forms a single
/// key. `funct7 == DEFAULT` and `funct7 == SUB` select the base integer
/// group; `funct7 == M_EXTENSION` selects the multiply/divide group.
const fn classify_op_reg(funct3: u32, funct7: u32) -> Mnemonic {
    match (funct7, funct3) {
        (i_f7::DEFAULT, i_f3::ADD_SUB) => Mnemonic::Add,
        (i_f7::SUB, i_f3::ADD_SUB) => Mnemonic::Sub,
        (i_f7::DEFAULT, i_f3::SLL) => Mnemonic::Sll,
        (i_f7::DEFAULT, i_f3::SLT) => Mnemonic::Slt,
        (i_f7::DEFAULT, i_f3::SLTU) => Mnemonic::Sltu,
        (i_f7::DEFAULT, i_f3::XOR) => Mnemonic::Xor,
        (i_f7::DEFAULT, i_f3::SRL_SRA) => Mnemonic::Srl,
        (i_f7::SRA, i_f3::SRL_SRA) => Mnemonic::Sra,
        (i_f7::DEFAULT, i_f3::OR) => Mnemonic::Or,
        (i_f7::DEFAULT, i_f3::AND) => Mnemonic::And,
        (m_op::M_EXTENSION, m_f3::MUL) => Mnemonic::Mul,
        (m_op::M_EXTENSION, m_f3::MULH) => Mnemonic::Mulh,
        (m_op::M_EXTENSION, m_f3::MULHSU) => Mnemonic::Mulhsu,
        (m_op::M_EXTENSION, m_f3::MULHU) => Mnemonic::Mulhu,
        (m_op::M_EXTENSION, m_f3::DIV) => Mnemonic::Div,
        (m_op::M_EXTENSION, m_f3::DIVU) => Mnemonic::Divu,
        (m_op::M_EXTENSION, m_f3::REM) => Mnemonic::Rem,
        (m_op::M_EXTENSION, m_f3::REMU) => Mnemonic::Remu,
        _ => Mnemonic::Unknown,
    }
}

/// System class: PRIV (funct3 0) sub-dispatches on funct12; the CSR funct3
/// codes map directly. A recognised PRIV word without a specific name
/// classifies as the generic `system` sentinel.
const fn classify_system(funct3: u32, funct12: u32) -> Mnemonic {
    match funct3 {
        sys_op::PRIV => match funct12 {
            sys_op::ECALL => Mnemonic::Ecall,
            sys_op::EBREAK => Mnemonic::Ebreak,
            sys_op::WFI => Mnemonic::Wfi,
            _ => Mnemonic::System,
        },
        sys_op::CSRRW => Mnemonic::Csrrw,
        sys_op::CSRRS => Mnemonic::Csrrs,
        sys_op::CSRRC => Mnemonic::Csrrc,
        sys_op::CSRRWI => Mnemonic::Csrrwi,
        sys_op::CSRRSI => Mnemonic::Csrrsi,
        sys_op::CSRRCI => Mnemonic::Csrrci,
        _ => Mnemonic::Unknown,
    }
}
