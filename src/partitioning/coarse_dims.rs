//! Coarse Cartesian dimensions closest to a target number of coarse cells.
//!
//! We aim for roughly the same number of coarse cells along every axis (the
//! `n`-th root of the target). An axis whose rounded-up share reaches its
//! fine extent is pinned to that extent and the remaining target is spread
//! over the other axes. Once no axis hits its ceiling, every floor/ceiling
//! combination of the free axes is tried and the product nearest the target
//! wins; on equal distance the first combination in enumeration order is
//! kept.

use crate::partitioning::error::PartitionError;
use crate::partitioning::permutations::multinary_permutations;

const SNAP_TOL: f64 = 1e-9;

// Exact powers come out of `powf` slightly off (27^(1/3) = 3.0000000000000004);
// snap them back so floor/ceil do not straddle an integer.
fn snap(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() <= SNAP_TOL * r.max(1.0) { r } else { x }
}

/// Determine coarse dimensions for a logically Cartesian grid.
///
/// `target` is clamped to `[1, Π fine_size]`. Each returned extent lies in
/// `[1, fine_size[i]]`.
///
/// # Errors
/// [`PartitionError::InvalidFineDims`] for empty or zero extents, and
/// [`PartitionError::IterationLimit`] if the search does not settle within
/// `n + 1` rounds (which indicates a bug, not bad input).
pub fn determine_coarse_dimensions(
    target: usize,
    fine_size: &[usize],
) -> Result<Vec<usize>, PartitionError> {
    if fine_size.is_empty() || fine_size.contains(&0) {
        return Err(PartitionError::InvalidFineDims(fine_size.to_vec()));
    }
    let nd = fine_size.len();
    let fine: Vec<f64> = fine_size.iter().map(|&n| n as f64).collect();
    let fine_total: f64 = fine.iter().product();
    let target = (target as f64).clamp(1.0, fine_total);

    // Unresolved axes keep 1.0 so they do not disturb the remaining target.
    let mut optimum = vec![1.0f64; nd];
    let mut found = vec![false; nd];
    let max_iter = nd + 1;

    for it in 1..=max_iter {
        let free = found.iter().filter(|f| !**f).count();
        let target_now = target / optimum.iter().product::<f64>();
        let s_num = snap(target_now.powf(1.0 / free as f64));
        let s_low = s_num.floor().max(1.0);

        let mut pinned = false;
        for i in 0..nd {
            if !found[i] && s_num.ceil().min(fine[i]) == fine[i] {
                optimum[i] = fine[i];
                found[i] = true;
                pinned = true;
            }
        }
        log::trace!(
            "coarse dims round {it}: remaining target {target_now}, root {s_num}, pinned {found:?}"
        );
        if pinned {
            if found.iter().all(|&f| f) {
                return Ok(to_extents(&optimum));
            }
            continue;
        }

        // Candidate sizes per axis: [rounded down, rounded up]; resolved axes
        // have no leeway.
        let candidates: Vec<[f64; 2]> = (0..nd)
            .map(|i| {
                if found[i] {
                    [optimum[i], optimum[i]]
                } else {
                    [s_low, s_num.ceil().min(fine[i])]
                }
            })
            .collect();

        let mut best = optimum.clone();
        let mut dist = f64::INFINITY;
        for perm in multinary_permutations(2, nd) {
            let size_now: Vec<f64> = perm
                .iter()
                .enumerate()
                .map(|(i, &bit)| candidates[i][bit])
                .collect();
            let d = (target - size_now.iter().product::<f64>()).abs();
            if d < dist {
                dist = d;
                best = size_now;
            }
        }
        return Ok(to_extents(&best));
    }

    Err(PartitionError::IterationLimit(max_iter))
}

fn to_extents(v: &[f64]) -> Vec<usize> {
    v.iter().map(|&x| x as usize).collect()
}
