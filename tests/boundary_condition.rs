mod util;
use mixed_dim_ops::grid::{Grid, GridId, GridSequence, MixedDimGrid, WeightedMortarGrid};
use mixed_dim_ops::projections::{BoundaryCondition, BoundaryStore, BoundaryValues};
use mixed_dim_ops::OpsError;
use util::*;

/// Boundary values computed on the fly: one value per face, equal to the id.
struct FaceIds<'a> {
    faces: &'a [(GridId, Vec<f64>)],
}

impl BoundaryValues for FaceIds<'_> {
    fn bc_values(&self, grid: GridId, keyword: &str) -> Option<&[f64]> {
        if keyword != "face_id" {
            return None;
        }
        self.faces
            .iter()
            .find(|(id, _)| *id == grid)
            .map(|(_, v)| v.as_slice())
    }
}

#[test]
fn values_follow_collection_traversal() {
    let (m, f) = fractured_square();
    let mut mdg = MixedDimGrid::<_, WeightedMortarGrid>::new();
    mdg.add_grid(&f).unwrap();
    mdg.add_grid(&m).unwrap();

    let mut store = BoundaryStore::new();
    store.insert(m.id(), "dirichlet", vec![2.0; m.num_faces()]);
    store.insert(f.id(), "dirichlet", vec![1.0; f.num_faces()]);
    assert_eq!(store.len(), 2);

    let bc = BoundaryCondition::new("dirichlet", mdg.grid_sequence().unwrap());
    let v = bc.assemble(&store).unwrap();
    assert_eq!(v.len(), 15);
    assert_eq!(v[0], 2.0);
    assert_eq!(v[14], 1.0);
}

#[test]
fn replacing_values_keeps_one_entry() {
    let mut store = BoundaryStore::new();
    assert!(store.insert(gid(0), "k", vec![1.0]).is_none());
    assert_eq!(store.insert(gid(0), "k", vec![2.0]), Some(vec![1.0]));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(gid(0), "k"), Some(&[2.0][..]));
}

#[test]
fn any_value_source_can_be_used() {
    let (m, f) = fractured_square();
    let faces = vec![(m.id(), vec![0.0; 12]), (f.id(), vec![1.0; 3])];
    let src = FaceIds { faces: &faces };
    let bc = BoundaryCondition::new("face_id", GridSequence::new([&m, &f]).unwrap());
    assert_eq!(bc.assemble(&src).unwrap().sum(), 3.0);

    let other = BoundaryCondition::new("neumann", GridSequence::new([&m, &f]).unwrap());
    assert_eq!(
        other.assemble(&src).unwrap_err(),
        OpsError::MissingBoundaryValues {
            grid: m.id(),
            keyword: "neumann".into()
        }
    );
}

#[test]
fn display_reports_keyword() {
    let (m, f) = fractured_square();
    let bc = BoundaryCondition::new("dirichlet", GridSequence::new([&m, &f]).unwrap());
    let text = bc.to_string();
    assert!(text.starts_with("Boundary Condition operator with keyword dirichlet"));
    assert!(text.contains("Defined on 2 grids"));
}
