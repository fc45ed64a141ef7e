#![allow(dead_code)]
use mixed_dim_ops::grid::{CartGrid, GridId, WeightedMortarGrid};
use mixed_dim_ops::sparse;
use nalgebra_sparse::CsrMatrix;

pub fn gid(u: usize) -> GridId {
    GridId::new(u)
}

/// Dense copy of a sparse matrix, duplicates summed.
pub fn dense(m: &CsrMatrix<f64>) -> Vec<Vec<f64>> {
    let mut out = vec![vec![0.0; m.ncols()]; m.nrows()];
    for (i, j, v) in m.triplet_iter() {
        out[i][j] += *v;
    }
    out
}

pub fn matvec(m: &CsrMatrix<f64>, x: &[f64]) -> Vec<f64> {
    assert_eq!(m.ncols(), x.len(), "matvec: shape mismatch");
    let mut y = vec![0.0; m.nrows()];
    for (i, j, v) in m.triplet_iter() {
        y[i] += v * x[j];
    }
    y
}

pub fn identity(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// 2x2 primary grid (id 0) and a 1d fracture of 2 cells (id 1).
///
/// Primary x-faces are `i + j*3` (0..=5), y-faces `6 + i + j*2` (6..=11).
pub fn fractured_square() -> (CartGrid, CartGrid) {
    let primary = CartGrid::new(gid(0), &[2, 2]).expect("primary");
    let fracture = CartGrid::new(gid(1), &[2]).expect("fracture");
    (primary, fracture)
}

/// Two-sided matching mortar: side 0 on the left x-faces, side 1 on the
/// right x-faces of the 2x2 primary.
pub fn two_sided_mortar() -> WeightedMortarGrid {
    WeightedMortarGrid::matching(1, &[vec![0, 3], vec![2, 5]], 12, 2).expect("mortar")
}

/// One-sided mortar with uneven overlaps: mortar cell 0 covers faces 1 and
/// 4, mortar cell 1 covers face 4 only. Secondary overlap is one-to-one.
pub fn uneven_mortar() -> WeightedMortarGrid {
    let primary = sparse::from_triplets(2, 12, vec![0, 0, 1], vec![1, 4, 4], vec![1.0; 3])
        .expect("primary overlap");
    let secondary =
        sparse::from_triplets(2, 2, vec![0, 1], vec![0, 1], vec![1.0; 2]).expect("secondary overlap");
    WeightedMortarGrid::new(1, vec![2], primary, secondary).expect("mortar")
}

/// Assert two float slices agree entry-wise within `tol`.
pub fn assert_close(got: &[f64], want: &[f64], tol: f64) {
    assert_eq!(got.len(), want.len(), "length mismatch");
    for (k, (a, b)) in got.iter().zip(want).enumerate() {
        assert!((a - b).abs() <= tol, "entry {k}: got {a}, want {b}");
    }
}
