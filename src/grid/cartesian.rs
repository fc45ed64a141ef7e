//! Tensor-product Cartesian grids and the 0-dimensional point grid.
//!
//! Cells are numbered with x fastest: `c = i + j*nx + k*nx*ny`.
//! Faces are numbered by normal direction: first all x-faces
//! (`i + j*(nx+1) + k*(nx+1)*ny`), then all y-faces, then all z-faces, each
//! family numbered with x fastest. The incidence sign is `+1` where the face
//! normal (positive axis direction) points out of the cell.

use nalgebra_sparse::CsrMatrix;

use crate::grid::{Grid, GridId};
use crate::ops_error::OpsError;
use crate::sparse;

/// Structured grid with `cart_dims.len()` dimensions (1 to 3).
#[derive(Clone, Debug)]
pub struct CartGrid {
    id: GridId,
    cart_dims: Vec<usize>,
    num_faces: usize,
    cell_faces: CsrMatrix<f64>,
}

impl CartGrid {
    pub fn new(id: GridId, cart_dims: &[usize]) -> Result<Self, OpsError> {
        if cart_dims.is_empty() || cart_dims.len() > 3 {
            return Err(OpsError::InvalidGrid(format!(
                "Cartesian grids need 1 to 3 dimensions, got {}",
                cart_dims.len()
            )));
        }
        if let Some(pos) = cart_dims.iter().position(|&n| n == 0) {
            return Err(OpsError::InvalidGrid(format!(
                "Cartesian extent along axis {pos} is zero"
            )));
        }

        let dim = cart_dims.len();
        let mut ext = [1usize; 3];
        ext[..dim].copy_from_slice(cart_dims);
        let [nx, ny, nz] = ext;
        let num_cells = nx * ny * nz;

        // Per-axis face counts and offsets into the global face numbering.
        let counts = [(nx + 1) * ny * nz, nx * (ny + 1) * nz, nx * ny * (nz + 1)];
        let mut offsets = [0usize; 3];
        for axis in 1..dim {
            offsets[axis] = offsets[axis - 1] + counts[axis - 1];
        }
        let num_faces: usize = counts[..dim].iter().sum();

        let nnz = 2 * dim * num_cells;
        let mut rows = Vec::with_capacity(nnz);
        let mut cols = Vec::with_capacity(nnz);
        let mut vals = Vec::with_capacity(nnz);

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let c = i + j * nx + k * nx * ny;
                    let lower = [
                        i + j * (nx + 1) + k * (nx + 1) * ny,
                        i + j * nx + k * nx * (ny + 1),
                        i + j * nx + k * nx * ny,
                    ];
                    // Stride to the opposite face of the same family.
                    let stride = [1, nx, nx * ny];
                    for axis in 0..dim {
                        let lo = offsets[axis] + lower[axis];
                        rows.extend([lo, lo + stride[axis]]);
                        cols.extend([c, c]);
                        vals.extend([-1.0, 1.0]);
                    }
                }
            }
        }

        let cell_faces = sparse::from_triplets(num_faces, num_cells, rows, cols, vals)?;
        log::debug!(
            "CartGrid {id}: dims {cart_dims:?}, {num_cells} cells, {num_faces} faces"
        );
        Ok(Self {
            id,
            cart_dims: cart_dims.to_vec(),
            num_faces,
            cell_faces,
        })
    }
}

impl Grid for CartGrid {
    fn id(&self) -> GridId {
        self.id
    }
    fn dim(&self) -> usize {
        self.cart_dims.len()
    }
    fn num_cells(&self) -> usize {
        self.cell_faces.ncols()
    }
    fn num_faces(&self) -> usize {
        self.num_faces
    }
    fn cell_faces(&self) -> &CsrMatrix<f64> {
        &self.cell_faces
    }
    fn cart_dims(&self) -> Option<&[usize]> {
        Some(&self.cart_dims)
    }
}

/// A single-cell grid of dimension 0: fracture intersections and the like.
#[derive(Clone, Debug)]
pub struct PointGrid {
    id: GridId,
    cell_faces: CsrMatrix<f64>,
}

impl PointGrid {
    pub fn new(id: GridId) -> Self {
        Self {
            id,
            cell_faces: CsrMatrix::zeros(0, 1),
        }
    }
}

impl Grid for PointGrid {
    fn id(&self) -> GridId {
        self.id
    }
    fn dim(&self) -> usize {
        0
    }
    fn num_cells(&self) -> usize {
        1
    }
    fn num_faces(&self) -> usize {
        0
    }
    fn cell_faces(&self) -> &CsrMatrix<f64> {
        &self.cell_faces
    }
}
