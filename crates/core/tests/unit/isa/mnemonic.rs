//! Mnemonic Vocabulary Tests.
//!
//! The textual identifiers are a wire contract: trace consumers key on the
//! exact strings. These tests pin the vocabulary and keep `as_str`,
//! `Display`, and serde in agreement.

use pipetrace_core::Mnemonic;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// The published vocabulary, in declaration order, sentinels last.
const VOCABULARY: [&str; 58] = [
    "nop", "lui", "auipc", "jal", "jalr", "beq", "bne", "blt", "bge", "bltu", "bgeu", "lb", "lh",
    "lw", "lbu", "lhu", "sb", "sh", "sw", "addi", "slti", "sltiu", "xori", "ori", "andi", "slli",
    "srli", "srai", "add", "sub", "sll", "slt", "sltu", "xor", "srl", "sra", "or", "and", "mul",
    "mulh", "mulhsu", "mulhu", "div", "divu", "rem", "remu", "fence", "ecall", "ebreak", "wfi",
    "csrrw", "csrrs", "csrrc", "csrrwi", "csrrsi", "csrrci", "system", "unknown",
];

#[test]
fn vocabulary_is_exactly_the_published_set() {
    let actual: Vec<&str> = Mnemonic::ALL.iter().map(|m| m.as_str()).collect();
    assert_eq!(actual, VOCABULARY.to_vec());
}

#[test]
fn identifiers_are_distinct() {
    let distinct: HashSet<&str> = Mnemonic::ALL.iter().map(|m| m.as_str()).collect();
    assert_eq!(distinct.len(), Mnemonic::ALL.len());
}

#[test]
fn display_matches_as_str() {
    for mnemonic in Mnemonic::ALL {
        assert_eq!(mnemonic.to_string(), mnemonic.as_str());
    }
}

#[test]
fn serde_names_match_as_str() {
    for mnemonic in Mnemonic::ALL {
        let json = serde_json::to_string(&mnemonic).unwrap();
        assert_eq!(json, format!("\"{}\"", mnemonic.as_str()));
        let back: Mnemonic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mnemonic);
    }
}

#[test]
fn only_the_two_sentinels_are_sentinels() {
    let sentinels: Vec<Mnemonic> = Mnemonic::ALL
        .into_iter()
        .filter(|m| m.is_sentinel())
        .collect();
    assert_eq!(sentinels, vec![Mnemonic::System, Mnemonic::Unknown]);
}
