//! Graph partitioning of a grid through an external partitioning oracle.
//
// Each *cell* is a vertex; two cells are adjacent when they share a face.
// The adjacency is |CF|ᵀ|CF| with CF the face-cell incidence, clipped to 0/1.
// Neighbour lists are symmetric, self-free and sorted.

use nalgebra_sparse::CsrMatrix;

use crate::grid::Grid;
use crate::partitioning::error::{OracleError, PartitionError};
use crate::sparse;

/// CSR-style cell adjacency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAdjacency {
    /// Offsets into `adjncy` for each cell.
    pub xadj: Vec<usize>,
    /// Concatenated neighbour lists.
    pub adjncy: Vec<usize>,
}

impl CellAdjacency {
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.xadj.len() - 1
    }

    #[inline]
    pub fn neighbors(&self, cell: usize) -> &[usize] {
        &self.adjncy[self.xadj[cell]..self.xadj[cell + 1]]
    }

    /// One neighbour list per cell.
    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        (0..self.num_cells())
            .map(|c| self.neighbors(c).to_vec())
            .collect()
    }
}

/// Build the cell adjacency graph from a `num_faces × num_cells` incidence.
pub fn cell_adjacency(cell_faces: &CsrMatrix<f64>) -> CellAdjacency {
    // Direction of the normal does not matter here, only connectivity.
    let cf = sparse::abs(cell_faces);
    let c2c = sparse::clip_unit(&(&cf.transpose() * &cf));

    let mut xadj = Vec::with_capacity(c2c.nrows() + 1);
    let mut adjncy = Vec::with_capacity(c2c.nnz());
    xadj.push(0);
    for (i, row) in c2c.row_iter().enumerate() {
        for (&j, &v) in row.col_indices().iter().zip(row.values()) {
            if j != i && v > 0.0 {
                adjncy.push(j);
            }
        }
        xadj.push(adjncy.len());
    }
    CellAdjacency { xadj, adjncy }
}

/// External graph partitioner.
///
/// Receives one neighbour list per vertex and the number of parts; returns an
/// algorithm-specific scalar (edge cut for METIS, ignored by this crate) and
/// one part label per vertex.
pub trait PartitionOracle {
    fn part_graph(
        &self,
        adjacency: &[Vec<usize>],
        n_parts: usize,
    ) -> Result<(i64, Vec<usize>), OracleError>;
}

impl<F> PartitionOracle for F
where
    F: Fn(&[Vec<usize>], usize) -> Result<(i64, Vec<usize>), OracleError>,
{
    fn part_graph(
        &self,
        adjacency: &[Vec<usize>],
        n_parts: usize,
    ) -> Result<(i64, Vec<usize>), OracleError> {
        self(adjacency, n_parts)
    }
}

/// Partition the cells of `grid` into `n_parts` parts.
///
/// The oracle's labels are returned as they are; only their count is checked
/// against the number of cells. There is no fallback: oracle failures are
/// returned as [`PartitionError::Oracle`].
pub fn partition_graph<G, O>(
    grid: &G,
    n_parts: usize,
    oracle: &O,
) -> Result<Vec<usize>, PartitionError>
where
    G: Grid + ?Sized,
    O: PartitionOracle + ?Sized,
{
    let adjacency = cell_adjacency(grid.cell_faces()).to_lists();
    log::debug!(
        "partitioning {} cells of grid {} into {n_parts} parts",
        adjacency.len(),
        grid.id()
    );
    let (_objval, labels) = oracle
        .part_graph(&adjacency, n_parts)
        .map_err(PartitionError::Oracle)?;
    if labels.len() != grid.num_cells() {
        return Err(PartitionError::MalformedOracleOutput {
            expected: grid.num_cells(),
            found: labels.len(),
        });
    }
    Ok(labels)
}
