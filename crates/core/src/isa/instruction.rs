//! Instruction field extraction utilities.
//!
//! Provides bit masks and an extraction trait for the fields the classifier
//! reads from a 32-bit RV32 instruction encoding. The field positions are
//! fixed by the base instruction formats; extraction always uses these
//! positions regardless of which fields a given opcode class consumes
//! (`funct12` deliberately subsumes `funct7`).

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct12 field (bits 20-31).
pub const FUNCT12_MASK: u32 = 0xFFF;

/// Trait for extracting classifier-relevant fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode selects the instruction's major class and drives all
    /// further dispatch.
    fn opcode(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Distinguishes instructions sharing a major opcode (e.g. LB vs LH,
    /// BEQ vs BNE, ADD vs SLT).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard from alternate encodings sharing opcode and
    /// funct3 (ADD vs SUB, SRL vs SRA), and gates shift-immediate forms.
    fn funct7(&self) -> u32;

    /// Extracts the funct12 field (bits 20-31).
    ///
    /// Only consulted for the system opcode class, where it selects among
    /// ECALL, EBREAK, and WFI. Overlaps funct7 by design.
    fn funct12(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct12(&self) -> u32 {
        (self >> 20) & FUNCT12_MASK
    }
}
