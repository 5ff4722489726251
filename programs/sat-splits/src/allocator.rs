use std::cmp::Ordering;

use crate::utils::{mul_div_floor, ToUnits};

/// Distributes `total` units among recipients proportionally to `weights`
///
/// The result is index-aligned with `weights` and always sums to `total`.
/// Every recipient gets at least one unit when the total allows it; when it
/// doesn't, higher weights win and ties go to the lower index.
///
/// Inputs are sanitized first: negative and NaN values count as 0,
/// fractions are truncated.
pub fn allocate<W: ToUnits>(weights: &[W], total: impl ToUnits) -> Vec<u64> {
    let weights: Vec<u64> = weights.iter().map(ToUnits::to_units).collect();
    allocate_units(&weights, total.to_units())
}

fn allocate_units(weights: &[u64], total: u64) -> Vec<u64> {
    if weights.is_empty() {
        return Vec::new();
    }
    if total == 0 {
        return vec![0; weights.len()];
    }

    let total_weight: u128 = weights.iter().map(|&w| u128::from(w)).sum();
    if total_weight == 0 {
        return spread_evenly(weights.len(), total);
    }

    // Proportional share rounded down, bumped to at least one unit
    let mut shares: Vec<u64> = weights
        .iter()
        .map(|&w| mul_div_floor(w, total, total_weight).max(1))
        .collect();

    let allocated: u128 = shares.iter().map(|&s| u128::from(s)).sum();
    let target = u128::from(total);

    match allocated.cmp(&target) {
        Ordering::Less => distribute_surplus(&mut shares, weights, target - allocated),
        Ordering::Greater => {
            reclaim_deficit(&mut shares, weights, total_weight, allocated - target)
        }
        Ordering::Equal => {}
    }

    shares
}

/// Even split used when no recipient has weight; the remainder goes to the
/// earliest indices
fn spread_evenly(count: usize, total: u64) -> Vec<u64> {
    let count = count as u64;
    let base = total / count;
    let extra = total % count;
    (0..count).map(|i| base + u64::from(i < extra)).collect()
}

/// Hands out leftover rounding units one at a time, heaviest weight first
fn distribute_surplus(shares: &mut [u64], weights: &[u64], mut surplus: u128) {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].cmp(&weights[a]).then(a.cmp(&b)));

    while surplus > 0 {
        for &index in &order {
            if surplus == 0 {
                break;
            }
            shares[index] += 1;
            surplus -= 1;
        }
    }
}

/// Takes back units handed out by the minimum-one bump
fn reclaim_deficit(shares: &mut [u64], weights: &[u64], total_weight: u128, deficit: u128) {
    let initial_deficit = u64::try_from(deficit).unwrap_or(u64::MAX);
    let mut deficit = deficit;

    // Phase 1: proportional trim from recipients holding two or more units,
    // lightest weight first, ties to the higher index
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[a].cmp(&weights[b]).then(b.cmp(&a)));

    for &index in &order {
        if deficit == 0 {
            break;
        }
        if shares[index] < 2 {
            continue;
        }
        let proportional = mul_div_floor(weights[index], initial_deficit, total_weight).max(1);
        let reclaim = u128::from(proportional)
            .min(deficit)
            .min(u128::from(shares[index] - 1));
        // Bounded by shares[index] - 1
        shares[index] -= reclaim as u64;
        deficit -= reclaim;
    }

    // Phase 2: one unit at a time from the front of the order, re-ranked after
    // every unit: recipients above one unit are drained to one, then
    // recipients at one unit give theirs up, lightest weight first.
    // Empty recipients never rank ahead of a holder, so they are skipped.
    for &index in &order {
        if deficit == 0 {
            return;
        }
        if shares[index] >= 2 {
            // Bounded by shares[index] - 1
            let reclaim = deficit.min(u128::from(shares[index] - 1));
            shares[index] -= reclaim as u64;
            deficit -= reclaim;
        }
    }

    for &index in &order {
        if deficit == 0 {
            return;
        }
        if shares[index] == 1 {
            shares[index] = 0;
            deficit -= 1;
        }
    }
}
