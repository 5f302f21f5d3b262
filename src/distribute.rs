//! Exact integer splitting of a pixel span.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Split `total` pixels into shares proportional to `weights`.
///
/// The result always sums to exactly `total` (largest-remainder rounding),
/// and every share is at least 1 px as long as `total >= weights.len()`.
/// Ties in the remainder go to the earlier share, so output is deterministic.
pub(crate) fn distribute(total: u32, weights: &[f64]) -> Vec<u32> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }
    let sum: f64 = weights.iter().sum();
    let ideal: Vec<f64> = if sum > 0.0 {
        weights.iter().map(|w| total as f64 * w / sum).collect()
    } else {
        core::iter::repeat_n(total as f64 / n as f64, n).collect()
    };

    let mut shares: Vec<u32> = ideal.iter().map(|v| v.floor() as u32).collect();
    let assigned: u64 = shares.iter().map(|&s| s as u64).sum();
    let mut left = (total as u64).saturating_sub(assigned);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let ra = ideal[a] - ideal[a].floor();
        let rb = ideal[b] - ideal[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &i in order.iter().cycle() {
        if left == 0 {
            break;
        }
        shares[i] += 1;
        left -= 1;
    }

    // Lift zero shares by borrowing from the largest.
    for i in 0..n {
        if shares[i] > 0 {
            continue;
        }
        let donor = (0..n)
            .filter(|&j| shares[j] > 1)
            .max_by(|&a, &b| shares[a].cmp(&shares[b]).then(b.cmp(&a)));
        if let Some(j) = donor {
            shares[j] -= 1;
            shares[i] = 1;
        }
    }
    shares
}
