//! Restriction and prolongation between global and subdomain numberings.
//!
//! Typical use: a variable defined only on some subdomains is prolonged into
//! the global vector, or a global quantity is restricted to them.

use std::fmt;

use nalgebra_sparse::CsrMatrix;

use crate::grid::{Grid, GridId, GridSequence};
use crate::ops_error::OpsError;
use crate::projections::subgrid::SubgridProjections;
use crate::sparse;

/// Target of a restriction or prolongation: one grid or an ordered list.
#[derive(Debug, Clone, Copy)]
pub enum GridSelection<'s> {
    One(GridId),
    Many(&'s [GridId]),
}

impl From<GridId> for GridSelection<'_> {
    fn from(id: GridId) -> Self {
        GridSelection::One(id)
    }
}

impl<'s> From<&'s [GridId]> for GridSelection<'s> {
    fn from(ids: &'s [GridId]) -> Self {
        GridSelection::Many(ids)
    }
}

impl<'s> From<&'s Vec<GridId>> for GridSelection<'s> {
    fn from(ids: &'s Vec<GridId>) -> Self {
        GridSelection::Many(ids)
    }
}

impl<'s, const N: usize> From<&'s [GridId; N]> for GridSelection<'s> {
    fn from(ids: &'s [GridId; N]) -> Self {
        GridSelection::Many(ids)
    }
}

/// Subdomain restrictions and prolongations for cells and faces.
#[derive(Debug, Clone)]
pub struct SubdomainProjections {
    num_grids: usize,
    projections: SubgridProjections,
}

impl SubdomainProjections {
    /// The ordering of `grids` sets the global numbering; the same sequence
    /// must be used by every operator these are combined with.
    pub fn new<G: Grid + ?Sized>(grids: &GridSequence<'_, G>, nd: usize) -> Result<Self, OpsError> {
        Ok(Self {
            num_grids: grids.len(),
            projections: SubgridProjections::new(grids, nd)?,
        })
    }

    #[inline]
    pub fn nd(&self) -> usize {
        self.projections.nd()
    }

    pub fn subgrid_projections(&self) -> &SubgridProjections {
        &self.projections
    }

    /// Global cells → cells of the selected grids.
    pub fn cell_restriction<'s>(
        &self,
        grids: impl Into<GridSelection<'s>>,
    ) -> Result<CsrMatrix<f64>, OpsError> {
        restriction(
            grids.into(),
            self.projections.num_cells_total(),
            |id| self.projections.cell_projection(id),
        )
    }

    /// Cells of the selected grids → global cells.
    pub fn cell_prolongation<'s>(
        &self,
        grids: impl Into<GridSelection<'s>>,
    ) -> Result<CsrMatrix<f64>, OpsError> {
        prolongation(
            grids.into(),
            self.projections.num_cells_total(),
            |id| self.projections.cell_projection(id),
        )
    }

    /// Global faces → faces of the selected grids.
    pub fn face_restriction<'s>(
        &self,
        grids: impl Into<GridSelection<'s>>,
    ) -> Result<CsrMatrix<f64>, OpsError> {
        restriction(
            grids.into(),
            self.projections.num_faces_total(),
            |id| self.projections.face_projection(id),
        )
    }

    /// Faces of the selected grids → global faces.
    pub fn face_prolongation<'s>(
        &self,
        grids: impl Into<GridSelection<'s>>,
    ) -> Result<CsrMatrix<f64>, OpsError> {
        prolongation(
            grids.into(),
            self.projections.num_faces_total(),
            |id| self.projections.face_projection(id),
        )
    }
}

fn restriction<'p>(
    sel: GridSelection<'_>,
    total: usize,
    lookup: impl Fn(GridId) -> Result<&'p CsrMatrix<f64>, OpsError>,
) -> Result<CsrMatrix<f64>, OpsError> {
    match sel {
        GridSelection::One(id) => Ok(lookup(id)?.transpose()),
        GridSelection::Many(ids) => {
            let blocks = ids
                .iter()
                .map(|&id| lookup(id).map(|p| p.transpose()))
                .collect::<Result<Vec<_>, _>>()?;
            sparse::vstack(&blocks, total)
        }
    }
}

fn prolongation<'p>(
    sel: GridSelection<'_>,
    total: usize,
    lookup: impl Fn(GridId) -> Result<&'p CsrMatrix<f64>, OpsError>,
) -> Result<CsrMatrix<f64>, OpsError> {
    match sel {
        GridSelection::One(id) => Ok(lookup(id)?.clone()),
        GridSelection::Many(ids) => {
            let blocks = ids
                .iter()
                .map(|&id| lookup(id).cloned())
                .collect::<Result<Vec<_>, _>>()?;
            sparse::hstack(&blocks, total)
        }
    }
}

impl fmt::Display for SubdomainProjections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Restriction and prolongation operators for {} grids",
            self.num_grids
        )?;
        writeln!(f, "Aimed at variables with dimension {}", self.nd())
    }
}
