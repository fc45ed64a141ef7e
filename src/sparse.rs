//! Sparse assembly helpers on top of `nalgebra_sparse`.
//!
//! All stacking helpers collect triplets into pre-allocated buffers and build
//! the CSR result in a single pass; repeated concatenation of small blocks is
//! the dominant cost for large interface counts.
//!
//! Block-contiguous expansion: local index `j` with block size `nd` occupies
//! the positions `j*nd .. j*nd + nd - 1`.

use nalgebra::Scalar;
use nalgebra_sparse::{CooMatrix, CsrMatrix};
use num_traits::Signed;

use crate::ops_error::OpsError;

/// Expand each index into its `nd` block-contiguous positions.
///
/// `expand_indices_nd(&[0, 2], 2) == [0, 1, 4, 5]`.
pub fn expand_indices_nd(indices: &[usize], nd: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(indices.len() * nd);
    for &i in indices {
        out.extend((0..nd).map(|k| i * nd + k));
    }
    out
}

/// Build a CSR matrix from COO triplets. Duplicate entries are summed.
pub fn from_triplets(
    nrows: usize,
    ncols: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    vals: Vec<f64>,
) -> Result<CsrMatrix<f64>, OpsError> {
    let coo = CooMatrix::try_from_triplets(nrows, ncols, rows, cols, vals)?;
    Ok(CsrMatrix::from(&coo))
}

/// Injection of a local numbering into `nrows` global positions: column `j`
/// carries a single unit entry at row `rows[j]`.
pub fn embedding(nrows: usize, rows: &[usize]) -> Result<CsrMatrix<f64>, OpsError> {
    let ncols = rows.len();
    from_triplets(nrows, ncols, rows.to_vec(), (0..ncols).collect(), vec![1.0; ncols])
}

/// Stack blocks on top of each other. Every block must have `ncols` columns.
pub fn vstack(blocks: &[CsrMatrix<f64>], ncols: usize) -> Result<CsrMatrix<f64>, OpsError> {
    let nrows: usize = blocks.iter().map(|b| b.nrows()).sum();
    let nnz: usize = blocks.iter().map(|b| b.nnz()).sum();
    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut vals = Vec::with_capacity(nnz);

    let mut row_offset = 0;
    for b in blocks {
        if b.ncols() != ncols {
            return Err(OpsError::ShapeMismatch {
                context: "vertical stacking",
                expected: (b.nrows(), ncols),
                found: (b.nrows(), b.ncols()),
            });
        }
        for (i, j, v) in b.triplet_iter() {
            rows.push(row_offset + i);
            cols.push(j);
            vals.push(*v);
        }
        row_offset += b.nrows();
    }
    from_triplets(nrows, ncols, rows, cols, vals)
}

/// Place blocks side by side. Every block must have `nrows` rows.
pub fn hstack(blocks: &[CsrMatrix<f64>], nrows: usize) -> Result<CsrMatrix<f64>, OpsError> {
    let ncols: usize = blocks.iter().map(|b| b.ncols()).sum();
    let nnz: usize = blocks.iter().map(|b| b.nnz()).sum();
    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut vals = Vec::with_capacity(nnz);

    let mut col_offset = 0;
    for b in blocks {
        if b.nrows() != nrows {
            return Err(OpsError::ShapeMismatch {
                context: "horizontal stacking",
                expected: (nrows, b.ncols()),
                found: (b.nrows(), b.ncols()),
            });
        }
        for (i, j, v) in b.triplet_iter() {
            rows.push(i);
            cols.push(col_offset + j);
            vals.push(*v);
        }
        col_offset += b.ncols();
    }
    from_triplets(nrows, ncols, rows, cols, vals)
}

/// Block-diagonal assembly, blocks placed in order along the diagonal.
pub fn block_diag(blocks: &[CsrMatrix<f64>]) -> Result<CsrMatrix<f64>, OpsError> {
    let nrows: usize = blocks.iter().map(|b| b.nrows()).sum();
    let ncols: usize = blocks.iter().map(|b| b.ncols()).sum();
    let nnz: usize = blocks.iter().map(|b| b.nnz()).sum();
    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut vals = Vec::with_capacity(nnz);

    let (mut r0, mut c0) = (0, 0);
    for b in blocks {
        for (i, j, v) in b.triplet_iter() {
            rows.push(r0 + i);
            cols.push(c0 + j);
            vals.push(*v);
        }
        r0 += b.nrows();
        c0 += b.ncols();
    }
    from_triplets(nrows, ncols, rows, cols, vals)
}

/// `a * b`, with the inner dimensions checked up front.
pub fn multiply(
    a: &CsrMatrix<f64>,
    b: &CsrMatrix<f64>,
    context: &'static str,
) -> Result<CsrMatrix<f64>, OpsError> {
    if a.ncols() != b.nrows() {
        return Err(OpsError::ShapeMismatch {
            context,
            expected: (a.ncols(), b.ncols()),
            found: (b.nrows(), b.ncols()),
        });
    }
    Ok(a * b)
}

/// Entry-wise absolute value; the sparsity pattern is unchanged.
pub fn abs<T: Scalar + Signed>(m: &CsrMatrix<T>) -> CsrMatrix<T> {
    let mut out = m.clone();
    for v in out.values_mut() {
        *v = v.abs();
    }
    out
}

/// Clip every stored value to `[0, 1]`.
pub fn clip_unit(m: &CsrMatrix<f64>) -> CsrMatrix<f64> {
    let mut out = m.clone();
    for v in out.values_mut() {
        *v = v.clamp(0.0, 1.0);
    }
    out
}

/// Expand every entry `(i, j)` into the diagonal block
/// `(i*nd + k, j*nd + k)`, `k < nd`; the Kronecker product with `I_nd`.
pub fn expand_blocks(m: &CsrMatrix<f64>, nd: usize) -> Result<CsrMatrix<f64>, OpsError> {
    if nd == 1 {
        return Ok(m.clone());
    }
    let nnz = m.nnz() * nd;
    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut vals = Vec::with_capacity(nnz);
    for (i, j, v) in m.triplet_iter() {
        for k in 0..nd {
            rows.push(i * nd + k);
            cols.push(j * nd + k);
            vals.push(*v);
        }
    }
    from_triplets(m.nrows() * nd, m.ncols() * nd, rows, cols, vals)
}

/// Scale each row to unit sum. Rows summing to zero are left untouched.
pub fn row_normalize(m: &CsrMatrix<f64>) -> CsrMatrix<f64> {
    let mut out = m.clone();
    for mut row in out.row_iter_mut() {
        let sum: f64 = row.values().iter().sum();
        if sum != 0.0 {
            for v in row.values_mut() {
                *v /= sum;
            }
        }
    }
    out
}

/// Scale each column to unit sum. Columns summing to zero are left untouched.
pub fn col_normalize(m: &CsrMatrix<f64>) -> CsrMatrix<f64> {
    row_normalize(&m.transpose()).transpose()
}

/// Diagonal matrix with the given entries.
pub fn diagonal(values: &[f64]) -> Result<CsrMatrix<f64>, OpsError> {
    let n = values.len();
    from_triplets(n, n, (0..n).collect(), (0..n).collect(), values.to_vec())
}
