//! Global projections between grids and the mortar grids coupling them.
//!
//! Each interface contributes one block: its local mortar maps composed with
//! the face embedding of the primary grid or the cell embedding of the
//! secondary grid. Maps onto the mortars are stacked vertically (one row
//! block per interface), maps from the mortars horizontally (one column block
//! per interface). The global mortar numbering is therefore the interfaces in
//! the given order, each expanded by the block size.

use std::fmt;

use nalgebra_sparse::CsrMatrix;

use crate::grid::{Grid, GridSequence, Interface, MixedDimGrid, MortarGrid};
use crate::ops_error::OpsError;
use crate::projections::operator::{
    Extensive, ExtensiveProjection, Intensive, IntensiveProjection, Projection, QuantityKind,
};
use crate::projections::subgrid::SubgridProjections;
use crate::sparse;

/// The eight mortar projections and the mortar sign operator.
///
/// `_int` operators act on extensive quantities (fluxes), `_avg` operators on
/// intensive ones (pressures). The two families have distinct types.
#[derive(Debug, Clone)]
pub struct MortarProjections {
    nd: usize,
    num_grids: usize,
    num_interfaces: usize,
    num_mortar_dofs: usize,

    primary_to_mortar_int: ExtensiveProjection,
    secondary_to_mortar_int: ExtensiveProjection,
    primary_to_mortar_avg: IntensiveProjection,
    secondary_to_mortar_avg: IntensiveProjection,

    mortar_to_primary_int: ExtensiveProjection,
    mortar_to_secondary_int: ExtensiveProjection,
    mortar_to_primary_avg: IntensiveProjection,
    mortar_to_secondary_avg: IntensiveProjection,

    sign_of_mortar_sides: CsrMatrix<f64>,
}

/// Per-interface blocks, collected before stacking.
struct Blocks {
    to_mortar: Vec<CsrMatrix<f64>>,
    from_mortar: Vec<CsrMatrix<f64>>,
}

impl Blocks {
    fn with_capacity(n: usize) -> Self {
        Self {
            to_mortar: Vec::with_capacity(n),
            from_mortar: Vec::with_capacity(n),
        }
    }

    fn into_projections<K: QuantityKind>(
        self,
        grid_dofs: usize,
    ) -> Result<(Projection<K>, Projection<K>), OpsError> {
        let to = sparse::vstack(&self.to_mortar, grid_dofs)?;
        let from = sparse::hstack(&self.from_mortar, grid_dofs)?;
        Ok((Projection::new(to), Projection::new(from)))
    }
}

/// `local` must map between `mortar_dofs` mortar dofs and the grid-side dofs
/// of `embedding` (global × local).
fn to_mortar_block(
    local: CsrMatrix<f64>,
    embedding: &CsrMatrix<f64>,
    mortar_dofs: usize,
    context: &'static str,
) -> Result<CsrMatrix<f64>, OpsError> {
    if local.nrows() != mortar_dofs || local.ncols() != embedding.ncols() {
        return Err(OpsError::ShapeMismatch {
            context,
            expected: (mortar_dofs, embedding.ncols()),
            found: (local.nrows(), local.ncols()),
        });
    }
    sparse::multiply(&local, &embedding.transpose(), context)
}

fn from_mortar_block(
    local: CsrMatrix<f64>,
    embedding: &CsrMatrix<f64>,
    mortar_dofs: usize,
    context: &'static str,
) -> Result<CsrMatrix<f64>, OpsError> {
    if local.nrows() != embedding.ncols() || local.ncols() != mortar_dofs {
        return Err(OpsError::ShapeMismatch {
            context,
            expected: (embedding.ncols(), mortar_dofs),
            found: (local.nrows(), local.ncols()),
        });
    }
    sparse::multiply(embedding, &local, context)
}

impl MortarProjections {
    /// Build the projections for `interfaces`, numbered in slice order. Both
    /// grids of every interface must be members of `grids`.
    pub fn new<G, M>(
        grids: &GridSequence<'_, G>,
        interfaces: &[Interface<'_, G, M>],
        nd: usize,
    ) -> Result<Self, OpsError>
    where
        G: Grid + ?Sized,
        M: MortarGrid + ?Sized,
    {
        let subgrid = SubgridProjections::new(grids, nd)?;
        let (num_faces, num_cells) = (subgrid.num_faces_total(), subgrid.num_cells_total());

        if interfaces.is_empty() {
            log::debug!("mortar projections without interfaces; all mortar extents are zero");
        }

        let n = interfaces.len();
        let mut primary_int = Blocks::with_capacity(n);
        let mut primary_avg = Blocks::with_capacity(n);
        let mut secondary_int = Blocks::with_capacity(n);
        let mut secondary_avg = Blocks::with_capacity(n);
        let mut signs = Vec::with_capacity(n);
        let mut num_mortar_dofs = 0;

        for intf in interfaces {
            intf.validate()?;
            let mg = intf.mortar;
            let mortar_dofs = mg.num_cells() * nd;
            let faces = subgrid.face_projection(intf.primary.id())?;
            let cells = subgrid.cell_projection(intf.secondary.id())?;

            primary_int.to_mortar.push(to_mortar_block(
                mg.primary_to_mortar_int(nd)?,
                faces,
                mortar_dofs,
                "primary to mortar (int)",
            )?);
            primary_avg.to_mortar.push(to_mortar_block(
                mg.primary_to_mortar_avg(nd)?,
                faces,
                mortar_dofs,
                "primary to mortar (avg)",
            )?);
            secondary_int.to_mortar.push(to_mortar_block(
                mg.secondary_to_mortar_int(nd)?,
                cells,
                mortar_dofs,
                "secondary to mortar (int)",
            )?);
            secondary_avg.to_mortar.push(to_mortar_block(
                mg.secondary_to_mortar_avg(nd)?,
                cells,
                mortar_dofs,
                "secondary to mortar (avg)",
            )?);

            primary_int.from_mortar.push(from_mortar_block(
                mg.mortar_to_primary_int(nd)?,
                faces,
                mortar_dofs,
                "mortar to primary (int)",
            )?);
            primary_avg.from_mortar.push(from_mortar_block(
                mg.mortar_to_primary_avg(nd)?,
                faces,
                mortar_dofs,
                "mortar to primary (avg)",
            )?);
            secondary_int.from_mortar.push(from_mortar_block(
                mg.mortar_to_secondary_int(nd)?,
                cells,
                mortar_dofs,
                "mortar to secondary (int)",
            )?);
            secondary_avg.from_mortar.push(from_mortar_block(
                mg.mortar_to_secondary_avg(nd)?,
                cells,
                mortar_dofs,
                "mortar to secondary (avg)",
            )?);

            let sign = mg.sign_of_mortar_sides(nd)?;
            if sign.nrows() != mortar_dofs || sign.ncols() != mortar_dofs {
                return Err(OpsError::ShapeMismatch {
                    context: "mortar sign",
                    expected: (mortar_dofs, mortar_dofs),
                    found: (sign.nrows(), sign.ncols()),
                });
            }
            signs.push(sign);
            num_mortar_dofs += mortar_dofs;
        }

        let (primary_to_mortar_int, mortar_to_primary_int) =
            primary_int.into_projections::<Extensive>(num_faces)?;
        let (primary_to_mortar_avg, mortar_to_primary_avg) =
            primary_avg.into_projections::<Intensive>(num_faces)?;
        let (secondary_to_mortar_int, mortar_to_secondary_int) =
            secondary_int.into_projections::<Extensive>(num_cells)?;
        let (secondary_to_mortar_avg, mortar_to_secondary_avg) =
            secondary_avg.into_projections::<Intensive>(num_cells)?;
        let sign_of_mortar_sides = sparse::block_diag(&signs)?;

        log::debug!(
            "mortar projections: {} interfaces, {num_mortar_dofs} mortar dofs, \
             {num_faces} face dofs, {num_cells} cell dofs, nd = {nd}",
            n
        );

        Ok(Self {
            nd,
            num_grids: grids.len(),
            num_interfaces: n,
            num_mortar_dofs,
            primary_to_mortar_int,
            secondary_to_mortar_int,
            primary_to_mortar_avg,
            secondary_to_mortar_avg,
            mortar_to_primary_int,
            mortar_to_secondary_int,
            mortar_to_primary_avg,
            mortar_to_secondary_avg,
            sign_of_mortar_sides,
        })
    }

    /// Projections over the collection's grid traversal and all of its
    /// interfaces.
    pub fn from_mixed_dim_grid<G, M>(
        mdg: &MixedDimGrid<'_, G, M>,
        nd: usize,
    ) -> Result<Self, OpsError>
    where
        G: Grid + ?Sized,
        M: MortarGrid + ?Sized,
    {
        let grids = mdg.grid_sequence()?;
        Self::new(&grids, mdg.interfaces(), nd)
    }

    #[inline]
    pub fn nd(&self) -> usize {
        self.nd
    }

    #[inline]
    pub fn num_interfaces(&self) -> usize {
        self.num_interfaces
    }

    /// Size of the global mortar numbering.
    #[inline]
    pub fn num_mortar_dofs(&self) -> usize {
        self.num_mortar_dofs
    }

    /// Global primary faces → mortar dofs.
    pub fn primary_to_mortar_int(&self) -> &ExtensiveProjection {
        &self.primary_to_mortar_int
    }

    /// Global secondary cells → mortar dofs.
    pub fn secondary_to_mortar_int(&self) -> &ExtensiveProjection {
        &self.secondary_to_mortar_int
    }

    pub fn primary_to_mortar_avg(&self) -> &IntensiveProjection {
        &self.primary_to_mortar_avg
    }

    pub fn secondary_to_mortar_avg(&self) -> &IntensiveProjection {
        &self.secondary_to_mortar_avg
    }

    /// Mortar dofs → global primary faces.
    pub fn mortar_to_primary_int(&self) -> &ExtensiveProjection {
        &self.mortar_to_primary_int
    }

    /// Mortar dofs → global secondary cells.
    pub fn mortar_to_secondary_int(&self) -> &ExtensiveProjection {
        &self.mortar_to_secondary_int
    }

    pub fn mortar_to_primary_avg(&self) -> &IntensiveProjection {
        &self.mortar_to_primary_avg
    }

    pub fn mortar_to_secondary_avg(&self) -> &IntensiveProjection {
        &self.mortar_to_secondary_avg
    }

    /// Block diagonal of the interfaces' side signs, mortar dofs × mortar dofs.
    pub fn sign_of_mortar_sides(&self) -> &CsrMatrix<f64> {
        &self.sign_of_mortar_sides
    }
}

impl fmt::Display for MortarProjections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Mortar projection for {} grids and {} interfaces",
            self.num_grids, self.num_interfaces
        )?;
        writeln!(f, "Aimed at variables with dimension {}", self.nd)?;
        let (m, n) = self.primary_to_mortar_int.shape();
        writeln!(f, "Projections to primary have dimensions {n} and {m}")?;
        let (m, n) = self.secondary_to_mortar_int.shape();
        writeln!(f, "Projections to secondary have dimensions {n} and {m}")
    }
}
