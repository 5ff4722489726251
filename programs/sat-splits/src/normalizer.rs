use anchor_lang::prelude::*;

use crate::{
    allocator::allocate,
    constants::{FULL_PERCENTAGE, MAX_WEIGHT},
    errors::ErrorCode,
    state::FeeRecipient,
    utils::gcd,
};

/// Converts a mix of share and percentage recipients into allocator weights
///
/// Share recipients keep their relative ratios after the fee percentages are
/// carved out; percentage recipients end up with exactly their percentage of
/// the weight sum. The result is index-aligned with `recipients`.
pub fn normalize(recipients: &[FeeRecipient]) -> Result<Vec<u64>> {
    let total_percentage: u128 = recipients
        .iter()
        .filter_map(FeeRecipient::scaled_percentage)
        .map(u128::from)
        .sum();

    require!(
        total_percentage <= FULL_PERCENTAGE,
        ErrorCode::TotalFeeExceeds100
    );

    let has_shares = recipients.iter().any(FeeRecipient::is_shares);
    require!(
        !(has_shares && total_percentage == FULL_PERCENTAGE),
        ErrorCode::FeeIsFullButSharesExist
    );

    let remaining_percentage = FULL_PERCENTAGE - total_percentage;
    let total_shares: u128 = recipients
        .iter()
        .filter_map(FeeRecipient::shares)
        .map(u128::from)
        .sum();

    // Both families land on the common denominator total_shares * 100%.
    // Products stay below u128::MAX for any slice that fits in memory.
    let weights: Vec<u128> = recipients
        .iter()
        .map(|recipient| match *recipient {
            FeeRecipient::Shares { num_shares } => {
                u128::from(num_shares).saturating_mul(remaining_percentage)
            }
            FeeRecipient::Percentage { .. } => {
                let percentage = u128::from(recipient.scaled_percentage().unwrap_or(0));
                if has_shares {
                    percentage.saturating_mul(total_shares)
                } else {
                    percentage
                }
            }
        })
        .collect();

    Ok(fit_to_u64(reduce_by_gcd(weights)))
}

/// Normalizes `recipients` and splits `total` units among them
pub fn split_payment(recipients: &[FeeRecipient], total: u64) -> Result<Vec<u64>> {
    let weights = normalize(recipients)?;
    Ok(allocate(&weights, total))
}

/// Divides every entry by the GCD of the non-zero entries
fn reduce_by_gcd(mut weights: Vec<u128>) -> Vec<u128> {
    let divisor = weights
        .iter()
        .filter(|&&w| w > 0)
        .fold(0u128, |acc, &w| gcd(acc, w));

    if divisor > 1 {
        for weight in &mut weights {
            *weight /= divisor;
        }
    }
    weights
}

/// Scales the vector down uniformly when the largest entry exceeds u64::MAX.
/// Lossy; positive entries never drop to zero.
fn fit_to_u64(weights: Vec<u128>) -> Vec<u64> {
    let max = weights.iter().copied().max().unwrap_or(0);
    let divisor = if max > MAX_WEIGHT {
        max.div_ceil(MAX_WEIGHT)
    } else {
        1
    };

    weights
        .into_iter()
        .map(|weight| {
            let scaled = if weight > 0 { (weight / divisor).max(1) } else { 0 };
            u64::try_from(scaled).unwrap_or(u64::MAX)
        })
        .collect()
}
