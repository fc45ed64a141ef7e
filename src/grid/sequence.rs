//! Ordered grid sequence.
//!
//! The order of the grids defines every global numbering built from the
//! sequence. Operators that are to be composed must be built from sequences
//! with the same order.

use hashbrown::HashMap;

use crate::grid::{Grid, GridId};
use crate::ops_error::OpsError;

/// Immutable ordered collection of borrowed grids with an id → position map.
#[derive(Debug)]
pub struct GridSequence<'a, G: Grid + ?Sized> {
    grids: Vec<&'a G>,
    position: HashMap<GridId, usize>,
}

impl<G: Grid + ?Sized> Clone for GridSequence<'_, G> {
    fn clone(&self) -> Self {
        Self {
            grids: self.grids.clone(),
            position: self.position.clone(),
        }
    }
}

impl<'a, G: Grid + ?Sized> GridSequence<'a, G> {
    /// Fails with [`OpsError::DuplicateGrid`] if two grids share an id.
    pub fn new(grids: impl IntoIterator<Item = &'a G>) -> Result<Self, OpsError> {
        let grids: Vec<&'a G> = grids.into_iter().collect();
        let mut position = HashMap::with_capacity(grids.len());
        for (i, g) in grids.iter().enumerate() {
            if position.insert(g.id(), i).is_some() {
                return Err(OpsError::DuplicateGrid(g.id()));
            }
        }
        Ok(Self { grids, position })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a G> + '_ {
        self.grids.iter().copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = GridId> + '_ {
        self.grids.iter().map(|g| g.id())
    }

    /// Position of a grid in the sequence.
    pub fn position(&self, id: GridId) -> Result<usize, OpsError> {
        self.position
            .get(&id)
            .copied()
            .ok_or(OpsError::UnknownGrid(id))
    }

    pub fn get(&self, id: GridId) -> Result<&'a G, OpsError> {
        Ok(self.grids[self.position(id)?])
    }

    #[inline]
    pub fn contains(&self, id: GridId) -> bool {
        self.position.contains_key(&id)
    }

    /// Number of grids of each dimension `0..=3`.
    pub fn dimension_histogram(&self) -> [usize; 4] {
        let mut dims = [0usize; 4];
        for g in &self.grids {
            dims[g.dim().min(3)] += 1;
        }
        dims
    }
}
