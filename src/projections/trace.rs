//! Cell ↔ face trace operators.

use std::fmt;

use nalgebra_sparse::CsrMatrix;

use crate::grid::{Grid, GridSequence};
use crate::ops_error::OpsError;
use crate::projections::subgrid::{SubgridProjections, face_count};
use crate::sparse;

/// Global trace (cells → faces) and inverse trace (faces → cells).
///
/// Built from the unsigned face-cell connectivity of each grid, so only
/// incidence matters, never orientation. Scalar quantities only.
#[derive(Debug, Clone)]
pub struct Trace {
    num_grids: usize,
    trace: CsrMatrix<f64>,
    inv_trace: CsrMatrix<f64>,
}

impl Trace {
    pub fn new<G: Grid + ?Sized>(grids: &GridSequence<'_, G>, nd: usize) -> Result<Self, OpsError> {
        if nd == 0 {
            return Err(OpsError::InvalidBlockSize(nd));
        }
        if nd > 1 {
            return Err(OpsError::VectorTraceUnsupported(nd));
        }
        let subgrid = SubgridProjections::new(grids, nd)?;

        let mut trace_blocks = Vec::with_capacity(grids.len());
        let mut inv_blocks = Vec::with_capacity(grids.len());
        for g in grids.iter() {
            // point grids have no face dofs, hence an empty connectivity
            let connectivity = if face_count(g) == 0 {
                CsrMatrix::zeros(g.num_cells(), 0)
            } else {
                sparse::abs(&g.scalar_divergence())
            };
            let cell_restriction = subgrid.cell_projection(g.id())?.transpose();
            let face_restriction = subgrid.face_projection(g.id())?.transpose();

            trace_blocks.push(sparse::multiply(
                &connectivity.transpose(),
                &cell_restriction,
                "trace",
            )?);
            inv_blocks.push(sparse::multiply(
                &connectivity,
                &face_restriction,
                "inverse trace",
            )?);
        }

        let trace = sparse::vstack(&trace_blocks, subgrid.num_cells_total())?;
        let inv_trace = sparse::vstack(&inv_blocks, subgrid.num_faces_total())?;
        log::debug!(
            "trace operators for {} grids: trace {}x{}, inverse {}x{}",
            grids.len(),
            trace.nrows(),
            trace.ncols(),
            inv_trace.nrows(),
            inv_trace.ncols()
        );
        Ok(Self {
            num_grids: grids.len(),
            trace,
            inv_trace,
        })
    }

    /// Global cells → global faces.
    pub fn trace(&self) -> &CsrMatrix<f64> {
        &self.trace
    }

    /// Global faces → global cells.
    pub fn inv_trace(&self) -> &CsrMatrix<f64> {
        &self.inv_trace
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trace operator for {} grids", self.num_grids)?;
        writeln!(
            f,
            "Maps {} cell values to {} face values",
            self.trace.ncols(),
            self.trace.nrows()
        )
    }
}
