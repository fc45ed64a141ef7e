//! Entry-point for coarse partitioning of grid cells.
//!
//! Two families of partitioners:
//! - structured: by logical Cartesian indexing, with the coarse shape given
//!   explicitly or derived from a target number of coarse cells;
//! - graph-based: cell adjacency handed to an external [`PartitionOracle`]
//!   (METIS with the `metis-support` feature).
//!
//! Every call produces a fresh label vector with one entry per fine cell.

pub mod coarse_dims;
pub mod error;
pub mod graph;
#[cfg(feature = "metis-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "metis-support")))]
pub mod metis;
pub mod permutations;
pub mod structured;

pub use self::coarse_dims::determine_coarse_dimensions;
pub use self::error::{OracleError, PartitionError};
pub use self::graph::{CellAdjacency, PartitionOracle, cell_adjacency, partition_graph};
#[cfg(feature = "metis-support")]
pub use self::metis::{MetisConfig, MetisMethod, MetisOracle};
pub use self::permutations::{MultinaryPermutations, multinary_permutations};
pub use self::structured::{partition_structured, partition_structured_grid};

use serde::{Deserialize, Serialize};

/// Coarse shape selection for structured partitioning.
///
/// Explicit `coarse_dims` take precedence over `num_parts`; leaving both
/// unset is an error at partition time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoarseningConfig {
    pub coarse_dims: Option<Vec<usize>>,
    pub num_parts: Option<usize>,
}

impl CoarseningConfig {
    pub fn with_coarse_dims(coarse_dims: Vec<usize>) -> Self {
        Self {
            coarse_dims: Some(coarse_dims),
            num_parts: None,
        }
    }

    pub fn with_num_parts(num_parts: usize) -> Self {
        Self {
            coarse_dims: None,
            num_parts: Some(num_parts),
        }
    }

    /// Coarse dimensions for a fine index space of extents `fine_dims`.
    pub fn resolve(&self, fine_dims: &[usize]) -> Result<Vec<usize>, PartitionError> {
        if fine_dims.is_empty() || fine_dims.contains(&0) {
            return Err(PartitionError::InvalidFineDims(fine_dims.to_vec()));
        }
        match (&self.coarse_dims, self.num_parts) {
            (Some(coarse), _) => {
                let fits = coarse.len() == fine_dims.len()
                    && coarse.iter().zip(fine_dims).all(|(&c, &f)| c >= 1 && c <= f);
                if !fits {
                    return Err(PartitionError::InvalidCoarseDims {
                        coarse: coarse.clone(),
                        fine: fine_dims.to_vec(),
                    });
                }
                Ok(coarse.clone())
            }
            (None, Some(n)) => determine_coarse_dimensions(n, fine_dims),
            (None, None) => Err(PartitionError::MissingCoarseShape),
        }
    }
}

#[cfg(test)]
mod tests;
