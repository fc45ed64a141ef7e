//! Sparse operators mapping degrees of freedom between the global, per-grid
//! and mortar numberings.
//!
//! Every builder takes an explicit [`GridSequence`](crate::grid::GridSequence);
//! operators are only compatible when built from sequences with the same
//! order and the same block size.

pub mod boundary;
pub mod divergence;
pub mod mortar;
pub mod operator;
pub mod subdomain;
pub mod subgrid;
pub mod trace;

pub use self::boundary::{BoundaryCondition, BoundaryStore, BoundaryValues};
pub use self::divergence::{Divergence, DivergenceKind};
pub use self::mortar::MortarProjections;
pub use self::operator::{
    Extensive, ExtensiveProjection, Intensive, IntensiveProjection, Projection, QuantityKind,
};
pub use self::subdomain::{GridSelection, SubdomainProjections};
pub use self::subgrid::SubgridProjections;
pub use self::trace::Trace;
