//! METIS-backed [`PartitionOracle`].

use metis::{Graph, Idx};
use serde::{Deserialize, Serialize};

use crate::partitioning::error::OracleError;
use crate::partitioning::graph::PartitionOracle;

/// METIS partitioning algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetisMethod {
    /// Multilevel k-way partitioning.
    #[default]
    Kway,
    /// Multilevel recursive bisection.
    Recursive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetisConfig {
    pub method: MetisMethod,
}

/// A wrapper around METIS graph partitioning.
#[derive(Debug, Clone, Default)]
pub struct MetisOracle {
    cfg: MetisConfig,
}

impl MetisOracle {
    pub fn new(cfg: MetisConfig) -> Self {
        Self { cfg }
    }
}

impl PartitionOracle for MetisOracle {
    fn part_graph(
        &self,
        adjacency: &[Vec<usize>],
        n_parts: usize,
    ) -> Result<(i64, Vec<usize>), OracleError> {
        let mut xadj: Vec<Idx> = Vec::with_capacity(adjacency.len() + 1);
        let mut adjncy: Vec<Idx> = Vec::new();
        xadj.push(0);
        for nbrs in adjacency {
            for &j in nbrs {
                adjncy.push(Idx::try_from(j)?);
            }
            xadj.push(Idx::try_from(adjncy.len())?);
        }
        let nparts = Idx::try_from(n_parts)?;
        let mut part: Vec<Idx> = vec![0; adjacency.len()];

        let graph = Graph::new(1, nparts, &xadj, &adjncy)
            .map_err(|e| format!("invalid METIS graph: {e:?}"))?;
        let objval = match self.cfg.method {
            MetisMethod::Kway => graph.part_kway(&mut part),
            MetisMethod::Recursive => graph.part_recursive(&mut part),
        }
        .map_err(|e| format!("METIS failed: {e:?}"))?;

        let labels = part
            .into_iter()
            .map(usize::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((i64::from(objval), labels))
    }
}
