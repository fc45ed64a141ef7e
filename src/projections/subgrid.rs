//! Embeddings of per-grid cell and face numberings into a global numbering.
//!
//! The global numbering concatenates the grids in sequence order, each local
//! index expanded block-contiguously by the block size `nd`. Grids of
//! dimension 0 carry no face dofs.

use hashbrown::HashMap;
use nalgebra_sparse::CsrMatrix;

use crate::grid::{Grid, GridId, GridSequence};
use crate::ops_error::OpsError;
use crate::sparse;

/// Per-grid prolongation matrices, `global_size × local_size`, one unit entry
/// per column. Built once; immutable afterwards.
#[derive(Debug, Clone)]
pub struct SubgridProjections {
    nd: usize,
    num_cells_total: usize,
    num_faces_total: usize,
    cell_projection: HashMap<GridId, CsrMatrix<f64>>,
    face_projection: HashMap<GridId, CsrMatrix<f64>>,
}

/// Face dofs of a grid before block expansion.
#[inline]
pub(crate) fn face_count<G: Grid + ?Sized>(g: &G) -> usize {
    if g.dim() > 0 { g.num_faces() } else { 0 }
}

impl SubgridProjections {
    pub fn new<G: Grid + ?Sized>(grids: &GridSequence<'_, G>, nd: usize) -> Result<Self, OpsError> {
        if nd == 0 {
            return Err(OpsError::InvalidBlockSize(nd));
        }
        let num_faces_total: usize = grids.iter().map(|g| face_count(g) * nd).sum();
        let num_cells_total: usize = grids.iter().map(|g| g.num_cells() * nd).sum();

        let mut cell_projection = HashMap::with_capacity(grids.len());
        let mut face_projection = HashMap::with_capacity(grids.len());
        let mut face_offset = 0;
        let mut cell_offset = 0;

        for g in grids.iter() {
            let nf = face_count(g);
            let nc = g.num_cells();
            let face_ind: Vec<usize> = sparse::expand_indices_nd(&(0..nf).collect::<Vec<_>>(), nd)
                .into_iter()
                .map(|i| face_offset + i)
                .collect();
            let cell_ind: Vec<usize> = sparse::expand_indices_nd(&(0..nc).collect::<Vec<_>>(), nd)
                .into_iter()
                .map(|i| cell_offset + i)
                .collect();

            face_projection.insert(g.id(), sparse::embedding(num_faces_total, &face_ind)?);
            cell_projection.insert(g.id(), sparse::embedding(num_cells_total, &cell_ind)?);

            // Point grids have no faces, so the face offset only moves for dim > 0.
            face_offset += nf * nd;
            cell_offset += nc * nd;
        }

        log::debug!(
            "subgrid projections for {} grids, nd = {nd}: {num_cells_total} cell dofs, \
             {num_faces_total} face dofs",
            grids.len()
        );
        Ok(Self {
            nd,
            num_cells_total,
            num_faces_total,
            cell_projection,
            face_projection,
        })
    }

    #[inline]
    pub fn nd(&self) -> usize {
        self.nd
    }

    #[inline]
    pub fn num_cells_total(&self) -> usize {
        self.num_cells_total
    }

    #[inline]
    pub fn num_faces_total(&self) -> usize {
        self.num_faces_total
    }

    /// Cell prolongation of one grid, global cells × local cells.
    pub fn cell_projection(&self, id: GridId) -> Result<&CsrMatrix<f64>, OpsError> {
        self.cell_projection.get(&id).ok_or(OpsError::UnknownGrid(id))
    }

    /// Face prolongation of one grid, global faces × local faces.
    pub fn face_projection(&self, id: GridId) -> Result<&CsrMatrix<f64>, OpsError> {
        self.face_projection.get(&id).ok_or(OpsError::UnknownGrid(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CartGrid, PointGrid};

    #[test]
    fn offsets_follow_sequence_order() {
        let a = CartGrid::new(GridId::new(0), &[2]).unwrap(); // 2 cells, 3 faces
        let b = CartGrid::new(GridId::new(1), &[3]).unwrap(); // 3 cells, 4 faces
        let seq = GridSequence::new([&a, &b]).unwrap();
        let p = SubgridProjections::new(&seq, 2).unwrap();
        assert_eq!((p.num_cells_total(), p.num_faces_total()), (10, 14));

        let cb = p.cell_projection(b.id()).unwrap();
        assert_eq!((cb.nrows(), cb.ncols()), (10, 6));
        let rows: Vec<usize> = cb.triplet_iter().map(|(i, _, _)| i).collect();
        assert_eq!(rows, vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn point_grids_do_not_shift_face_numbering() {
        let a = CartGrid::new(GridId::new(0), &[2]).unwrap();
        let p = PointGrid::new(GridId::new(1));
        let b = CartGrid::new(GridId::new(2), &[1]).unwrap();
        let seq = GridSequence::<dyn Grid>::new([&a as &dyn Grid, &p, &b]).unwrap();
        let proj = SubgridProjections::new(&seq, 1).unwrap();
        assert_eq!(proj.num_faces_total(), 5);
        assert_eq!(proj.face_projection(p.id()).unwrap().ncols(), 0);
        let fb = proj.face_projection(b.id()).unwrap();
        let rows: Vec<usize> = fb.triplet_iter().map(|(i, _, _)| i).collect();
        assert_eq!(rows, vec![3, 4]);
        // the point grid still owns one cell
        let cp = proj.cell_projection(p.id()).unwrap();
        assert_eq!(cp.triplet_iter().map(|(i, _, _)| i).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn unknown_grid_and_zero_block_size() {
        let a = CartGrid::new(GridId::new(0), &[2]).unwrap();
        let seq = GridSequence::new([&a]).unwrap();
        assert_eq!(
            SubgridProjections::new(&seq, 0).unwrap_err(),
            OpsError::InvalidBlockSize(0)
        );
        let p = SubgridProjections::new(&seq, 1).unwrap();
        assert_eq!(
            p.cell_projection(GridId::new(9)).unwrap_err(),
            OpsError::UnknownGrid(GridId::new(9))
        );
    }
}
