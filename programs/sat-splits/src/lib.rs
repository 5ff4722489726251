use anchor_lang::prelude::*;

pub mod allocator;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod normalizer;
pub mod state;
pub mod utils;

use instructions::*;
use state::FeeRecipient;

pub use allocator::allocate;
pub use normalizer::{normalize, split_payment};

declare_id!("Azs25wtGa8nX1toc3vq8hmo9MHuANXrV3VCG4pKzFK6y");

#[program]
pub mod sat_splits {
    use super::*;

    /// Splits a unit total proportionally to the given weights
    /// Every weighted recipient gets at least one unit when the total allows
    pub fn compute_split(
        ctx: Context<ComputeSplit>,
        weights: Vec<u64>,
        total: u64,
    ) -> Result<Vec<u64>> {
        instructions::compute_split::handler(ctx, weights, total)
    }

    /// Converts share and percentage recipients into a single weight vector
    /// Fails if fees exceed 100%, or reach 100% while share recipients exist
    pub fn normalize_recipients(
        ctx: Context<NormalizeRecipients>,
        recipients: Vec<FeeRecipient>,
    ) -> Result<Vec<u64>> {
        instructions::normalize_recipients::handler(ctx, recipients)
    }

    /// Normalizes recipients, then splits the unit total among them
    pub fn split_payment(
        ctx: Context<SplitPayment>,
        recipients: Vec<FeeRecipient>,
        total: u64,
    ) -> Result<Vec<u64>> {
        instructions::split_payment::handler(ctx, recipients, total)
    }
}
