#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mixed-dim-ops
//!
//! mixed-dim-ops builds the indexing and sparse linear operators that let a
//! simulation treat a collection of grids of different topological dimension,
//! coupled through lower-dimensional mortar grids, as one system.
//!
//! ## Features
//! - Coarse partitioning of grid cells, structured (by logical Cartesian
//!   index) or graph-based through a pluggable oracle
//! - Search for coarse grid dimensions closest to a target cell count
//! - Global numbering of cell and face dofs over an ordered grid sequence
//! - Subdomain restriction and prolongation operators
//! - Mortar projections, with extensive and intensive variants as distinct types
//! - Trace, divergence and boundary-value assembly
//! - METIS-backed partitioning behind the `metis-support` feature
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mixed-dim-ops = "0.1"
//! # Optional features:
//! # features = ["metis-support"]
//! ```
//!
//! Grids are owned by the caller and consumed through the [`grid::Grid`] and
//! [`grid::MortarGrid`] traits. Reference implementations
//! ([`grid::CartGrid`], [`grid::PointGrid`], [`grid::WeightedMortarGrid`])
//! cover tensor-product grids and matching or weighted mortars.
//!
//! ## Numbering
//!
//! The order of a [`grid::GridSequence`] defines every global numbering. All
//! operators that are to be composed must be built from the same sequence and
//! the same block size `nd`; local index `j` of a grid occupies global
//! positions `offset + j*nd .. offset + j*nd + nd - 1`.

pub mod grid;
pub mod ops_error;
pub mod partitioning;
pub mod projections;
pub mod sparse;

pub use ops_error::OpsError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::grid::{
        CartGrid, Grid, GridId, GridSequence, Interface, MixedDimGrid, MortarGrid, PointGrid,
        WeightedMortarGrid,
    };
    pub use crate::ops_error::OpsError;
    #[cfg(feature = "metis-support")]
    pub use crate::partitioning::{MetisConfig, MetisOracle};
    pub use crate::partitioning::{
        CoarseningConfig, PartitionError, PartitionOracle, determine_coarse_dimensions,
        partition_graph, partition_structured, partition_structured_grid,
    };
    pub use crate::projections::{
        BoundaryCondition, BoundaryStore, BoundaryValues, Divergence, DivergenceKind,
        ExtensiveProjection, GridSelection, IntensiveProjection, MortarProjections,
        SubdomainProjections, SubgridProjections, Trace,
    };
}
