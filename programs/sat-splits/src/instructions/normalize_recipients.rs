use anchor_lang::prelude::*;

use crate::{events::RecipientsNormalized, normalizer::normalize, state::FeeRecipient};

#[derive(Accounts)]
pub struct NormalizeRecipients {}

/// Converts share and percentage recipients into allocator weights
pub fn handler(
    _ctx: Context<NormalizeRecipients>,
    recipients: Vec<FeeRecipient>,
) -> Result<Vec<u64>> {
    let weights = normalize(&recipients)?;

    let share_recipients = recipients.iter().filter(|r| r.is_shares()).count() as u32;

    #[cfg(feature = "verbose")]
    msg!("Normalized {} recipients into weights {:?}", recipients.len(), weights);

    emit!(RecipientsNormalized {
        recipient_count: recipients.len() as u32,
        share_recipients,
        fee_recipients: recipients.len() as u32 - share_recipients,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(weights)
}
