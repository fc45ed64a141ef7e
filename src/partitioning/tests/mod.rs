use super::*;
#[path = "partition_property_tests.rs"]
mod partition_property_tests;

use crate::grid::{CartGrid, GridId, PointGrid};

#[test]
fn four_by_four_into_two_by_two() {
    let cfg = CoarseningConfig::with_coarse_dims(vec![2, 2]);
    let labels = partition_structured(&[4, 4], &cfg).unwrap();
    assert_eq!(labels.len(), 16);
    let mut counts = [0usize; 4];
    for &l in &labels {
        counts[l] += 1;
    }
    assert_eq!(counts, [4, 4, 4, 4]);
    // fastest fine axis maps to fastest coarse axis
    assert_eq!(&labels[..4], &[0, 0, 1, 1]);
    assert_eq!(&labels[8..12], &[2, 2, 3, 3]);
}

#[test]
fn num_parts_is_delegated_to_coarse_dims() {
    let g = CartGrid::new(GridId::new(0), &[10, 1]).unwrap();
    let labels = partition_structured_grid(&g, &CoarseningConfig::with_num_parts(5)).unwrap();
    assert_eq!(labels, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
}

#[test]
fn explicit_dims_win_over_num_parts() {
    let cfg = CoarseningConfig {
        coarse_dims: Some(vec![1, 2]),
        num_parts: Some(4),
    };
    assert_eq!(cfg.resolve(&[4, 4]).unwrap(), vec![1, 2]);
}

#[test]
fn coarse_dims_must_fit_fine_grid() {
    for bad in [vec![5, 1], vec![0, 1], vec![2]] {
        let cfg = CoarseningConfig::with_coarse_dims(bad);
        assert!(matches!(
            cfg.resolve(&[4, 4]),
            Err(PartitionError::InvalidCoarseDims { .. })
        ));
    }
}

#[test]
fn unstructured_grid_has_no_cart_dims() {
    let p = PointGrid::new(GridId::new(0));
    assert!(matches!(
        partition_structured_grid(&p, &CoarseningConfig::with_num_parts(1)),
        Err(PartitionError::MissingCartDims)
    ));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = CoarseningConfig::with_num_parts(8);
    let text = serde_json::to_string(&cfg).unwrap();
    let back: CoarseningConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);

    let parsed: CoarseningConfig = serde_json::from_str(r#"{"coarse_dims":[2,3]}"#).unwrap();
    assert_eq!(parsed, CoarseningConfig::with_coarse_dims(vec![2, 3]));
}

#[test]
fn path_graph_into_two_parts() {
    let g = CartGrid::new(GridId::new(0), &[4]).unwrap();
    // split a path at the middle
    let halves = |adj: &[Vec<usize>], k: usize| -> Result<(i64, Vec<usize>), OracleError> {
        let n = adj.len();
        Ok((1, (0..n).map(|i| i * k / n).collect()))
    };
    let labels = partition_graph(&g, 2, &halves).unwrap();
    assert_eq!(labels.len(), 4);
    assert!(labels.iter().all(|&l| l < 2));
    assert_eq!(labels, vec![0, 0, 1, 1]);
}
