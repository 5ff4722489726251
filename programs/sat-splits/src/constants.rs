// Percentages are resolved to fixed point: 1% = 1_000_000 units
pub const PERCENT_SCALE: u64 = 1_000_000;
pub const FULL_PERCENTAGE: u128 = 100 * PERCENT_SCALE as u128;

// Largest weight the normalizer may hand to the allocator
pub const MAX_WEIGHT: u128 = u64::MAX as u128;
