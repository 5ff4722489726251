use anchor_lang::prelude::*;

use crate::{
    events::PaymentSplit, instructions::compute_split::count_funded, normalizer,
    state::FeeRecipient,
};

#[derive(Accounts)]
pub struct SplitPayment {}

/// Normalizes fee-aware recipients and splits `total` units among them
pub fn handler(
    _ctx: Context<SplitPayment>,
    recipients: Vec<FeeRecipient>,
    total: u64,
) -> Result<Vec<u64>> {
    let allocation = normalizer::split_payment(&recipients, total)?;

    // Units routed to percentage recipients
    let fee_units: u64 = recipients
        .iter()
        .zip(&allocation)
        .filter(|(recipient, _)| !recipient.is_shares())
        .map(|(_, &units)| units)
        .sum();

    #[cfg(feature = "verbose")]
    msg!("Payment of {} units split as {:?} ({} to fees)", total, allocation, fee_units);

    emit!(PaymentSplit {
        recipient_count: recipients.len() as u32,
        total_units: total,
        fee_units,
        recipients_funded: count_funded(&allocation),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(allocation)
}
