use proptest::prelude::*;
use std::collections::HashSet;

use crate::partitioning::{
    CoarseningConfig, determine_coarse_dimensions, multinary_permutations, partition_structured,
};

fn fine_dims() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..9, 1..4)
}

proptest! {
    #[test]
    fn coarse_dims_stay_within_bounds(fine in fine_dims(), target in 0usize..300) {
        let coarse = determine_coarse_dimensions(target, &fine).unwrap();
        prop_assert_eq!(coarse.len(), fine.len());
        for (c, f) in coarse.iter().zip(&fine) {
            prop_assert!(*c >= 1 && c <= f);
        }
    }

    #[test]
    fn structured_labels_cover_the_coarse_grid(fine in fine_dims(), seed in 0usize..1000) {
        // pick a coarse shape inside the fine one
        let coarse: Vec<usize> = fine
            .iter()
            .enumerate()
            .map(|(i, &f)| 1 + (seed / (i + 1)) % f)
            .collect();
        let cfg = CoarseningConfig::with_coarse_dims(coarse.clone());
        let labels = partition_structured(&fine, &cfg).unwrap();

        prop_assert_eq!(labels.len(), fine.iter().product::<usize>());
        let n_coarse: usize = coarse.iter().product();
        prop_assert!(labels.iter().all(|&l| l < n_coarse));
        let distinct: HashSet<usize> = labels.iter().copied().collect();
        prop_assert_eq!(distinct.len(), n_coarse);
    }

    #[test]
    fn permutations_are_distinct_and_complete(base in 1usize..4, len in 0usize..5) {
        let all: Vec<Vec<usize>> = multinary_permutations(base, len).collect();
        prop_assert_eq!(all.len(), base.pow(len as u32));
        let distinct: HashSet<Vec<usize>> = all.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), all.len());
        prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
