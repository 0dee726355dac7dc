//! Classifier Property Tests.
//!
//! The classifier's contract is behavioral, not structural: total over the
//! 32-bit domain, pure, and dependent only on the fields it documents.
//! These properties are checked over random words with `proptest`.

use pipetrace_core::{Mnemonic, classify};
use proptest::prelude::*;

/// Mask of the bits the classifier may read: opcode (6:0), funct3 (14:12),
/// and funct12 (31:20), which subsumes funct7 (31:25).
const FIELD_MASK: u32 = 0xFFF0_707F;

/// The one word with semantics beyond its fields: the canonical nop.
const NOP_WORD: u32 = 0x0000_0013;

proptest! {
    /// Totality: every 32-bit value classifies to a vocabulary member
    /// without panicking.
    #[test]
    fn total_over_u32(word in any::<u32>()) {
        let mnemonic = classify(word);
        prop_assert!(Mnemonic::ALL.contains(&mnemonic));
    }

    /// Purity: repeated classification of the same word agrees.
    #[test]
    fn deterministic(word in any::<u32>()) {
        prop_assert_eq!(classify(word), classify(word));
    }

    /// Field dependence: words differing only in register/immediate bits
    /// classify identically, except when one of them is the nop pattern.
    #[test]
    fn ignores_operand_bits(word in any::<u32>(), operand_bits in any::<u32>()) {
        let sibling = (word & FIELD_MASK) | (operand_bits & !FIELD_MASK);
        prop_assume!(word != NOP_WORD && sibling != NOP_WORD);
        prop_assert_eq!(classify(word), classify(sibling));
    }

    /// Named results only come from the defined opcode set; anything else
    /// is the `unknown` sentinel.
    #[test]
    fn undefined_opcodes_are_unknown(word in any::<u32>()) {
        const DEFINED: [u32; 11] = [
            0x37, 0x17, 0x6F, 0x67, 0x63, 0x03, 0x23, 0x13, 0x33, 0x0F, 0x73,
        ];
        if !DEFINED.contains(&(word & 0x7F)) {
            prop_assert_eq!(classify(word), Mnemonic::Unknown);
        }
    }

    /// System words with PRIV funct3 always resolve within the system
    /// class: a specific name or the generic `system` sentinel, never
    /// `unknown`.
    #[test]
    fn priv_words_stay_in_system_class(funct12 in 0u32..0x1000) {
        let word = (funct12 << 20) | 0x73;
        let mnemonic = classify(word);
        let expected_specific = matches!(
            mnemonic,
            Mnemonic::Ecall | Mnemonic::Ebreak | Mnemonic::Wfi
        );
        prop_assert!(expected_specific || mnemonic == Mnemonic::System);
    }
}

/// Exhaustive sweep of the 7-bit opcode space with zeroed operand fields:
/// totality again, but deterministic and complete rather than sampled.
#[test]
fn every_opcode_classifies() {
    for opcode in 0u32..0x80 {
        for funct3 in 0u32..8 {
            let word = (funct3 << 12) | opcode;
            let mnemonic = classify(word);
            assert!(
                Mnemonic::ALL.contains(&mnemonic),
                "opcode {opcode:#04x} funct3 {funct3:#05b} escaped the vocabulary"
            );
        }
    }
}
