//! Partitioning by logical Cartesian indexing.
//!
//! Fine cells are numbered with x fastest (`i + j*nx + k*nx*ny`); coarse
//! labels follow the same convention on the coarse grid:
//! `label = ci + cj*cx + ck*cx*cy`.

use crate::grid::Grid;
use crate::partitioning::CoarseningConfig;
use crate::partitioning::error::PartitionError;

/// Coarse index of every fine index along one axis.
///
/// The coarse index increases at fine positions `0, step, 2*step, ...` with
/// `step = fine / coarse`; at most `coarse` increments are kept so exactly
/// `coarse` groups result, the last one absorbing the remainder.
pub fn coarse_index_along_axis(fine: usize, coarse: usize) -> Vec<usize> {
    let step = (fine / coarse).max(1);
    let mut increments = vec![0usize; fine];
    for pos in (0..fine).step_by(step).take(coarse) {
        increments[pos] = 1;
    }
    // Running sum, shifted to be 0-based (position 0 always increments).
    let mut acc = 0usize;
    increments
        .into_iter()
        .map(|inc| {
            acc += inc;
            acc - 1
        })
        .collect()
}

/// Partition a logically Cartesian index space of extents `fine_dims`.
///
/// The coarse shape comes from `cfg`: explicit `coarse_dims` take precedence,
/// otherwise `num_parts` is turned into coarse dimensions with
/// [`determine_coarse_dimensions`](crate::partitioning::determine_coarse_dimensions).
///
/// Returns one label per fine cell in `[0, Π coarse_dims)`.
pub fn partition_structured(
    fine_dims: &[usize],
    cfg: &CoarseningConfig,
) -> Result<Vec<usize>, PartitionError> {
    let coarse_dims = cfg.resolve(fine_dims)?;
    let nd = fine_dims.len();

    let ind: Vec<Vec<usize>> = fine_dims
        .iter()
        .zip(&coarse_dims)
        .map(|(&f, &c)| coarse_index_along_axis(f, c))
        .collect();

    if fine_dims.iter().zip(&coarse_dims).any(|(&f, &c)| f % c != 0) {
        log::debug!(
            "coarse dims {coarse_dims:?} do not divide fine dims {fine_dims:?}; \
             trailing coarse cells absorb the remainder"
        );
    }

    // Coarse strides, x fastest.
    let mut stride = vec![1usize; nd];
    for d in 1..nd {
        stride[d] = stride[d - 1] * coarse_dims[d - 1];
    }

    let num_cells: usize = fine_dims.iter().product();
    let mut labels = Vec::with_capacity(num_cells);
    for c in 0..num_cells {
        let mut rest = c;
        let mut label = 0;
        for d in 0..nd {
            let coord = rest % fine_dims[d];
            rest /= fine_dims[d];
            label += ind[d][coord] * stride[d];
        }
        labels.push(label);
    }
    Ok(labels)
}

/// [`partition_structured`] on a grid's logical Cartesian dimensions.
pub fn partition_structured_grid<G: Grid + ?Sized>(
    grid: &G,
    cfg: &CoarseningConfig,
) -> Result<Vec<usize>, PartitionError> {
    let fine_dims = grid.cart_dims().ok_or(PartitionError::MissingCartDims)?;
    partition_structured(fine_dims, cfg)
}
