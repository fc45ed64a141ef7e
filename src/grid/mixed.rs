//! Mixed-dimensional grid collection: grids plus the interfaces joining them.
//!
//! The collection fixes the deterministic traversal used whenever operators
//! are built for "all grids": descending dimension, insertion order within a
//! dimension. Interfaces are traversed in insertion order.

use crate::grid::{Grid, GridId, GridSequence, MortarGrid};
use crate::ops_error::OpsError;

/// A (primary, secondary) grid pair and the mortar grid between them.
#[derive(Debug)]
pub struct Interface<'a, G: Grid + ?Sized, M: MortarGrid + ?Sized> {
    pub primary: &'a G,
    pub secondary: &'a G,
    pub mortar: &'a M,
}

impl<G: Grid + ?Sized, M: MortarGrid + ?Sized> Clone for Interface<'_, G, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Grid + ?Sized, M: MortarGrid + ?Sized> Copy for Interface<'_, G, M> {}

impl<'a, G: Grid + ?Sized, M: MortarGrid + ?Sized> Interface<'a, G, M> {
    pub fn new(primary: &'a G, secondary: &'a G, mortar: &'a M) -> Self {
        Self {
            primary,
            secondary,
            mortar,
        }
    }

    /// The primary grid must be one dimension above the mortar, the secondary
    /// grid of the same dimension.
    pub fn validate(&self) -> Result<(), OpsError> {
        let mortar_dim = self.mortar.dim();
        if self.primary.dim() != mortar_dim + 1 || self.secondary.dim() != mortar_dim {
            return Err(OpsError::UnsupportedInterface {
                primary_dim: self.primary.dim(),
                secondary_dim: self.secondary.dim(),
                mortar_dim,
            });
        }
        Ok(())
    }

    pub fn ids(&self) -> (GridId, GridId) {
        (self.primary.id(), self.secondary.id())
    }
}

/// Grids of several dimensions coupled through mortar grids.
#[derive(Debug)]
pub struct MixedDimGrid<'a, G: Grid + ?Sized, M: MortarGrid + ?Sized> {
    grids: Vec<&'a G>,
    interfaces: Vec<Interface<'a, G, M>>,
}

impl<G: Grid + ?Sized, M: MortarGrid + ?Sized> Default for MixedDimGrid<'_, G, M> {
    fn default() -> Self {
        Self {
            grids: Vec::new(),
            interfaces: Vec::new(),
        }
    }
}

impl<'a, G: Grid + ?Sized, M: MortarGrid + ?Sized> MixedDimGrid<'a, G, M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_grid(&mut self, grid: &'a G) -> Result<(), OpsError> {
        if self.grids.iter().any(|g| g.id() == grid.id()) {
            return Err(OpsError::DuplicateGrid(grid.id()));
        }
        self.grids.push(grid);
        Ok(())
    }

    /// Both grids must already be part of the collection.
    pub fn add_interface(
        &mut self,
        primary: &'a G,
        secondary: &'a G,
        mortar: &'a M,
    ) -> Result<(), OpsError> {
        for g in [primary, secondary] {
            if !self.grids.iter().any(|h| h.id() == g.id()) {
                return Err(OpsError::UnknownGrid(g.id()));
            }
        }
        let intf = Interface::new(primary, secondary, mortar);
        intf.validate()?;
        self.interfaces.push(intf);
        Ok(())
    }

    pub fn num_grids(&self) -> usize {
        self.grids.len()
    }

    pub fn num_interfaces(&self) -> usize {
        self.interfaces.len()
    }

    /// Grids in traversal order: descending dimension, then insertion order.
    pub fn grid_sequence(&self) -> Result<GridSequence<'a, G>, OpsError> {
        let mut ordered = self.grids.clone();
        // stable sort keeps insertion order within a dimension
        ordered.sort_by(|a, b| b.dim().cmp(&a.dim()));
        GridSequence::new(ordered)
    }

    /// Grids of one dimension, in insertion order.
    pub fn grids_of_dimension(&self, dim: usize) -> Vec<&'a G> {
        self.grids.iter().copied().filter(|g| g.dim() == dim).collect()
    }

    pub fn interfaces(&self) -> &[Interface<'a, G, M>] {
        &self.interfaces
    }
}
