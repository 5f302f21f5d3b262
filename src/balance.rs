//! Row balancing for albums with five or more items.
//!
//! The ordered items are split into consecutive rows of 1..=K tiles. Each
//! candidate row is scored by how far its aggregate width/height lands from
//! the target ratio, plus a penalty when the height that would fill the row
//! falls outside the configured bounds. The split with the lowest total
//! score is found by dynamic programming over prefix positions, the same
//! formulation as minimum-raggedness line breaking:
//!
//! ```text
//! cost[0] = 0
//! cost[i] = min over i-K <= j < i of cost[j] + badness(items[j..i])
//! ```
//!
//! Runs in O(n·K).

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::config::AlbumConfig;

/// Height at which a row of tiles with these aspect ratios fills `width`
/// exactly, with `spacing` between neighbours.
pub(crate) fn fill_height(ratios: &[f64], width: u32, spacing: u32) -> f64 {
    let gaps = spacing as f64 * ratios.len().saturating_sub(1) as f64;
    let sum: f64 = ratios.iter().sum();
    (width as f64 - gaps) / sum
}

/// Score of one candidate row. Lower is better.
pub fn row_badness(ratios: &[f64], config: &AlbumConfig) -> f64 {
    let height = fill_height(ratios, config.max_width, config.spacing);
    let aggregate = config.max_width as f64 / height;
    let mut badness = (aggregate - config.target_row_ratio).powi(2);

    let min = config.min_row_height as f64;
    let max = config.max_row_height as f64;
    if height < min {
        badness += config.height_penalty * (1.0 + (min - height) / min);
    } else if height > max {
        badness += config.height_penalty * (1.0 + (height - max) / max);
    }
    badness
}

/// Split `ratios` into consecutive rows, returning the number of tiles in
/// each row from top to bottom.
///
/// Ties keep the earliest break found, which favours fuller rows later in
/// the album.
pub fn partition_rows(ratios: &[f64], config: &AlbumConfig) -> Vec<usize> {
    let n = ratios.len();
    let k = config.max_per_row.max(1);
    let mut cost = vec![f64::INFINITY; n + 1];
    let mut start = vec![0usize; n + 1];
    cost[0] = 0.0;

    for i in 1..=n {
        for j in i.saturating_sub(k)..i {
            let candidate = cost[j] + row_badness(&ratios[j..i], config);
            log::trace!("row {j}..{i}: cost {candidate:.4}");
            if candidate < cost[i] {
                cost[i] = candidate;
                start[i] = j;
            }
        }
    }

    let mut rows = Vec::new();
    let mut end = n;
    while end > 0 {
        let j = start[end];
        rows.push(end - j);
        end = j;
    }
    rows.reverse();
    log::trace!("partition {rows:?} with total badness {:.4}", cost[n]);
    rows
}
