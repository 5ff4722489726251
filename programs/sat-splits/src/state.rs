use anchor_lang::prelude::*;

use crate::{constants::PERCENT_SCALE, utils::ToUnits};

// Relative distance from a whole unit still treated as that unit
const WHOLE_UNIT_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Recipient of a fee-aware split
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub enum FeeRecipient {
    /// Weighted against other share recipients after fees are carved out
    Shares { num_shares: u64 },
    /// Fixed percentage (0-100) of the whole payment
    Percentage { percentage: f64 },
}

impl FeeRecipient {
    /// Builds a recipient from a value destination record
    /// Fee destinations carry a percentage, everything else carries shares
    /// (sanitized like allocator weights: negative/NaN to 0, fractions truncated)
    pub fn from_destination(split: f64, fee: bool) -> Self {
        if fee {
            Self::Percentage { percentage: split }
        } else {
            Self::Shares {
                num_shares: split.to_units(),
            }
        }
    }

    pub fn is_shares(&self) -> bool {
        matches!(self, Self::Shares { .. })
    }

    pub fn shares(&self) -> Option<u64> {
        match *self {
            Self::Shares { num_shares } => Some(num_shares),
            Self::Percentage { .. } => None,
        }
    }

    /// Percentage resolved to fixed point (PERCENT_SCALE units per percent)
    ///
    /// Rounds up, so a sum of resolved values never drops below the requested
    /// total and any positive percentage keeps at least one unit.
    /// NaN and negative percentages resolve to 0
    pub fn scaled_percentage(&self) -> Option<u64> {
        match *self {
            Self::Shares { .. } => None,
            Self::Percentage { percentage } => {
                if percentage.is_nan() || percentage <= 0.0 {
                    return Some(0);
                }
                let scaled = percentage * PERCENT_SCALE as f64;
                // Products of decimal inputs land a few ulps off whole units
                let nearest = scaled.round();
                let units = if (scaled - nearest).abs() <= scaled * WHOLE_UNIT_TOLERANCE {
                    nearest
                } else {
                    scaled.ceil()
                };
                // Saturates for absurdly large inputs
                Some((units as u64).max(1))
            }
        }
    }
}
