//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use {
    anchor_lang::AnchorSerialize,
    sat_splits::state::FeeRecipient,
    solana_sdk::{instruction::Instruction, pubkey::Pubkey},
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("Azs25wtGa8nX1toc3vq8hmo9MHuANXrV3VCG4pKzFK6y");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_COMPUTE_SPLIT: [u8; 8] = [0x35, 0x28, 0xac, 0xf8, 0x8a, 0x70, 0x0d, 0x72];
pub const DISCRIMINATOR_NORMALIZE_RECIPIENTS: [u8; 8] = [0xf3, 0xee, 0x2e, 0xdd, 0x8a, 0xc3, 0xb5, 0x84];
pub const DISCRIMINATOR_SPLIT_PAYMENT: [u8; 8] = [0x8e, 0xd3, 0x3a, 0x96, 0x9c, 0xff, 0x23, 0x25];

/// Build compute_split instruction
///
/// Accounts: none
pub fn build_compute_split(weights: &[u64], total: u64) -> Instruction {
    let mut data = Vec::with_capacity(8 + 4 + 8 * weights.len() + 8);
    data.extend_from_slice(&DISCRIMINATOR_COMPUTE_SPLIT);
    weights.to_vec().serialize(&mut data).unwrap();
    total.serialize(&mut data).unwrap();

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![],
        data,
    }
}

/// Build normalize_recipients instruction
///
/// Accounts: none
pub fn build_normalize_recipients(recipients: &[FeeRecipient]) -> Instruction {
    let mut data = Vec::with_capacity(8 + 4 + 9 * recipients.len());
    data.extend_from_slice(&DISCRIMINATOR_NORMALIZE_RECIPIENTS);
    recipients.to_vec().serialize(&mut data).unwrap();

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![],
        data,
    }
}

/// Build split_payment instruction
///
/// Accounts: none
pub fn build_split_payment(recipients: &[FeeRecipient], total: u64) -> Instruction {
    let mut data = Vec::with_capacity(8 + 4 + 9 * recipients.len() + 8);
    data.extend_from_slice(&DISCRIMINATOR_SPLIT_PAYMENT);
    recipients.to_vec().serialize(&mut data).unwrap();
    total.serialize(&mut data).unwrap();

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![],
        data,
    }
}

/// Shorthand for a share recipient
pub fn shares(num_shares: u64) -> FeeRecipient {
    FeeRecipient::Shares { num_shares }
}

/// Shorthand for a percentage (fee) recipient
pub fn fee(percentage: f64) -> FeeRecipient {
    FeeRecipient::Percentage { percentage }
}
