use anchor_lang::prelude::*;

use crate::{allocator::allocate, events::SplitComputed};

#[derive(Accounts)]
pub struct ComputeSplit {}

/// Splits `total` units proportionally to `weights`
/// Read-only; the allocation is returned as instruction return data
pub fn handler(_ctx: Context<ComputeSplit>, weights: Vec<u64>, total: u64) -> Result<Vec<u64>> {
    let allocation = allocate(&weights, total);

    #[cfg(feature = "verbose")]
    msg!("Split {} units across {} recipients: {:?}", total, weights.len(), allocation);

    emit!(SplitComputed {
        recipient_count: weights.len() as u32,
        total_units: total,
        recipients_funded: count_funded(&allocation),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(allocation)
}

pub(crate) fn count_funded(allocation: &[u64]) -> u32 {
    allocation.iter().filter(|&&units| units > 0).count() as u32
}
