//! Global boundary-value vectors.

use std::fmt;

use hashbrown::HashMap;
use nalgebra::DVector;

use crate::grid::{Grid, GridId, GridSequence};
use crate::ops_error::OpsError;

/// Source of per-grid boundary values, addressed by grid and keyword.
pub trait BoundaryValues {
    fn bc_values(&self, grid: GridId, keyword: &str) -> Option<&[f64]>;
}

/// Map-backed [`BoundaryValues`].
#[derive(Debug, Clone, Default)]
pub struct BoundaryStore {
    values: HashMap<GridId, HashMap<String, Vec<f64>>>,
}

impl BoundaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `values`, replacing and returning any previous entry.
    pub fn insert(
        &mut self,
        grid: GridId,
        keyword: impl Into<String>,
        values: Vec<f64>,
    ) -> Option<Vec<f64>> {
        self.values
            .entry(grid)
            .or_default()
            .insert(keyword.into(), values)
    }

    pub fn get(&self, grid: GridId, keyword: &str) -> Option<&[f64]> {
        self.values
            .get(&grid)
            .and_then(|by_key| by_key.get(keyword))
            .map(Vec::as_slice)
    }

    /// Number of stored `(grid, keyword)` entries.
    pub fn len(&self) -> usize {
        self.values.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BoundaryValues for BoundaryStore {
    fn bc_values(&self, grid: GridId, keyword: &str) -> Option<&[f64]> {
        self.get(grid, keyword)
    }
}

/// Concatenation, in sequence order, of each grid's values under one keyword.
#[derive(Debug)]
pub struct BoundaryCondition<'a, G: Grid + ?Sized> {
    keyword: String,
    grids: GridSequence<'a, G>,
}

impl<'a, G: Grid + ?Sized> BoundaryCondition<'a, G> {
    pub fn new(keyword: impl Into<String>, grids: GridSequence<'a, G>) -> Self {
        Self {
            keyword: keyword.into(),
            grids,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Fails on the first grid without values for the keyword.
    pub fn assemble<B: BoundaryValues + ?Sized>(&self, store: &B) -> Result<DVector<f64>, OpsError> {
        let mut out = Vec::new();
        for g in self.grids.iter() {
            let vals = store
                .bc_values(g.id(), &self.keyword)
                .ok_or_else(|| OpsError::MissingBoundaryValues {
                    grid: g.id(),
                    keyword: self.keyword.clone(),
                })?;
            out.extend_from_slice(vals);
        }
        log::debug!(
            "boundary values '{}' for {} grids: {} entries",
            self.keyword,
            self.grids.len(),
            out.len()
        );
        Ok(DVector::from_vec(out))
    }
}

impl<G: Grid + ?Sized> fmt::Display for BoundaryCondition<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.grids.dimension_histogram();
        writeln!(
            f,
            "Boundary Condition operator with keyword {}",
            self.keyword
        )?;
        writeln!(
            f,
            "Defined on {} grids: {} of dimension 3, {} of dimension 2, \
             {} of dimension 1, {} of dimension 0",
            self.grids.len(),
            dims[3],
            dims[2],
            dims[1],
            dims[0]
        )
    }
}
