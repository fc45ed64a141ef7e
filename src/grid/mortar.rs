//! Mortar grid defined by weighted overlaps with its two neighbouring grids.
//!
//! For the overlap relation `W` (mortar cells × primary faces, or mortar
//! cells × secondary cells) the local projections are
//!
//! | map                 | matrix          |
//! |---------------------|-----------------|
//! | `*_to_mortar_avg`   | `rownorm(W)`    |
//! | `*_to_mortar_int`   | `colnorm(W)`    |
//! | `mortar_to_*_int`   | `rownorm(W)ᵀ`   |
//! | `mortar_to_*_avg`   | `colnorm(W)ᵀ`   |
//!
//! so that every extensive map preserves totals and every intensive map
//! reproduces constants.
//!
//! Mortar cells are numbered side by side: all cells of side 0, then side 1.

use nalgebra_sparse::CsrMatrix;

use crate::grid::MortarGrid;
use crate::ops_error::OpsError;
use crate::sparse;

#[derive(Clone, Debug)]
pub struct WeightedMortarGrid {
    dim: usize,
    side_cells: Vec<usize>,
    primary: CsrMatrix<f64>,
    secondary: CsrMatrix<f64>,
}

impl WeightedMortarGrid {
    /// `primary`: overlap weights, mortar cells × primary faces.
    /// `secondary`: overlap weights, mortar cells × secondary cells.
    /// `side_cells`: number of mortar cells on each side (one or two sides).
    pub fn new(
        dim: usize,
        side_cells: Vec<usize>,
        primary: CsrMatrix<f64>,
        secondary: CsrMatrix<f64>,
    ) -> Result<Self, OpsError> {
        if side_cells.is_empty() || side_cells.len() > 2 {
            return Err(OpsError::InvalidGrid(format!(
                "mortar grids have one or two sides, got {}",
                side_cells.len()
            )));
        }
        let n: usize = side_cells.iter().sum();
        for (what, m) in [("primary", &primary), ("secondary", &secondary)] {
            if m.nrows() != n {
                return Err(OpsError::InvalidGrid(format!(
                    "{what} overlap has {} rows, mortar has {n} cells",
                    m.nrows()
                )));
            }
            if m.values().iter().any(|&w| w < 0.0) {
                return Err(OpsError::InvalidGrid(format!(
                    "{what} overlap weights must be non-negative"
                )));
            }
        }
        Ok(Self {
            dim,
            side_cells,
            primary,
            secondary,
        })
    }

    /// Mortar whose cells coincide one-to-one with a primary face on each
    /// side and with the secondary cell of the same position.
    ///
    /// `faces_per_side[s][k]` is the primary face matched by cell `k` of side
    /// `s`; every side must list `num_secondary_cells` faces.
    pub fn matching(
        dim: usize,
        faces_per_side: &[Vec<usize>],
        num_primary_faces: usize,
        num_secondary_cells: usize,
    ) -> Result<Self, OpsError> {
        let mut rows = Vec::new();
        let mut face_cols = Vec::new();
        let mut cell_cols = Vec::new();
        let mut side_cells = Vec::with_capacity(faces_per_side.len());
        let mut row = 0;
        for (s, faces) in faces_per_side.iter().enumerate() {
            if faces.len() != num_secondary_cells {
                return Err(OpsError::InvalidGrid(format!(
                    "side {s} matches {} faces, secondary grid has {num_secondary_cells} cells",
                    faces.len()
                )));
            }
            for (k, &f) in faces.iter().enumerate() {
                rows.push(row);
                face_cols.push(f);
                cell_cols.push(k);
                row += 1;
            }
            side_cells.push(faces.len());
        }
        let ones = vec![1.0; row];
        let primary =
            sparse::from_triplets(row, num_primary_faces, rows.clone(), face_cols, ones.clone())?;
        let secondary = sparse::from_triplets(row, num_secondary_cells, rows, cell_cols, ones)?;
        Self::new(dim, side_cells, primary, secondary)
    }

    pub fn side_cells(&self) -> &[usize] {
        &self.side_cells
    }

    fn project(&self, m: CsrMatrix<f64>, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        if nd == 0 {
            return Err(OpsError::InvalidBlockSize(nd));
        }
        sparse::expand_blocks(&m, nd)
    }
}

impl MortarGrid for WeightedMortarGrid {
    fn dim(&self) -> usize {
        self.dim
    }

    fn num_cells(&self) -> usize {
        self.side_cells.iter().sum()
    }

    fn num_sides(&self) -> usize {
        self.side_cells.len()
    }

    fn primary_to_mortar_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::col_normalize(&self.primary), nd)
    }

    fn primary_to_mortar_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::row_normalize(&self.primary), nd)
    }

    fn mortar_to_primary_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::row_normalize(&self.primary).transpose(), nd)
    }

    fn mortar_to_primary_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::col_normalize(&self.primary).transpose(), nd)
    }

    fn secondary_to_mortar_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::col_normalize(&self.secondary), nd)
    }

    fn secondary_to_mortar_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::row_normalize(&self.secondary), nd)
    }

    fn mortar_to_secondary_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::row_normalize(&self.secondary).transpose(), nd)
    }

    fn mortar_to_secondary_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        self.project(sparse::col_normalize(&self.secondary).transpose(), nd)
    }

    fn sign_of_mortar_sides(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
        let mut signs = Vec::with_capacity(self.num_cells());
        for (s, &n) in self.side_cells.iter().enumerate() {
            let sign = if s == 0 { 1.0 } else { -1.0 };
            signs.extend(std::iter::repeat_n(sign, n));
        }
        self.project(sparse::diagonal(&signs)?, nd)
    }
}
