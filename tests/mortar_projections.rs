mod util;
use mixed_dim_ops::grid::{GridSequence, Interface, MixedDimGrid};
use mixed_dim_ops::projections::MortarProjections;
use mixed_dim_ops::OpsError;
use util::*;

#[test]
fn extensive_maps_conserve_mortar_totals() {
    let (m, f) = fractured_square();
    let mortar = uneven_mortar();
    let seq = GridSequence::new([&m, &f]).unwrap();
    let proj = MortarProjections::new(&seq, &[Interface::new(&m, &f, &mortar)], 1).unwrap();

    let flux = [1.0, 1.0];
    let on_faces = matvec(proj.mortar_to_primary_int().matrix(), &flux);
    assert_eq!(on_faces.len(), 15);
    assert_eq!(on_faces.iter().sum::<f64>(), 2.0);
    assert_close(&on_faces[..6], &[0.0, 0.5, 0.0, 0.0, 1.5, 0.0], 1e-14);

    let via_adjoint = matvec(&proj.primary_to_mortar_int().matrix().transpose(), &flux);
    assert_eq!(via_adjoint.iter().sum::<f64>(), on_faces.iter().sum::<f64>());

    let mut face_flux = vec![0.0; 15];
    face_flux[1] = 3.0;
    face_flux[4] = 5.0;
    let on_mortar = matvec(proj.primary_to_mortar_int().matrix(), &face_flux);
    assert_close(&on_mortar, &[5.5, 2.5], 1e-14);
}

#[test]
fn intensive_maps_reproduce_constants() {
    let (m, f) = fractured_square();
    let mortar = uneven_mortar();
    let seq = GridSequence::new([&m, &f]).unwrap();
    let proj = MortarProjections::new(&seq, &[Interface::new(&m, &f, &mortar)], 1).unwrap();

    let pressure = vec![2.0; 15];
    assert_close(
        &matvec(proj.primary_to_mortar_avg().matrix(), &pressure),
        &[2.0, 2.0],
        1e-14,
    );
    let back = matvec(proj.mortar_to_primary_avg().matrix(), &[3.0, 3.0]);
    assert_close(&[back[1], back[4]], &[3.0, 3.0], 1e-14);

    let cells = [0.0, 0.0, 0.0, 0.0, 7.0, 9.0];
    assert_eq!(
        matvec(proj.secondary_to_mortar_avg().matrix(), &cells),
        vec![7.0, 9.0]
    );
    assert_eq!(
        matvec(proj.mortar_to_secondary_int().matrix(), &[1.0, 2.0]),
        vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0]
    );
}

#[test]
fn matching_mortar_extensive_pair_is_adjoint() {
    let (m, f) = fractured_square();
    let mortar = two_sided_mortar();
    let seq = GridSequence::new([&m, &f]).unwrap();
    let proj = MortarProjections::new(&seq, &[Interface::new(&m, &f, &mortar)], 2).unwrap();
    assert_eq!(proj.num_mortar_dofs(), 8);
    assert_eq!(
        dense(proj.mortar_to_primary_int().matrix()),
        dense(&proj.primary_to_mortar_int().matrix().transpose())
    );
    // both sides feed the same fracture cells
    assert_eq!(
        dense(proj.mortar_to_secondary_avg().matrix()),
        dense(&proj.secondary_to_mortar_int().matrix().transpose())
    );
    let to_fracture = matvec(proj.mortar_to_secondary_int().matrix(), &[1.0; 8]);
    assert_eq!(to_fracture, vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0]);
}

#[test]
fn sign_operator_splits_the_sides() {
    let (m, f) = fractured_square();
    let mortar = two_sided_mortar();
    let seq = GridSequence::new([&m, &f]).unwrap();
    let proj = MortarProjections::new(&seq, &[Interface::new(&m, &f, &mortar)], 2).unwrap();

    let sign = proj.sign_of_mortar_sides();
    assert_eq!((sign.nrows(), sign.ncols()), (8, 8));
    assert!(sign.triplet_iter().all(|(i, j, _)| i == j));
    let diag: Vec<f64> = sign.values().to_vec();
    assert!(diag.iter().all(|&s| s == 1.0 || s == -1.0));
    assert_eq!(diag.iter().filter(|&&s| s == 1.0).count(), 4);
    assert_eq!(diag.iter().sum::<f64>(), 0.0);
}

#[test]
fn interfaces_are_numbered_in_order() {
    let (m, f) = fractured_square();
    let two = two_sided_mortar();
    let one = uneven_mortar();
    let seq = GridSequence::new([&m, &f]).unwrap();
    let intf = [Interface::new(&m, &f, &two), Interface::new(&m, &f, &one)];
    let proj = MortarProjections::new(&seq, &intf, 1).unwrap();

    assert_eq!(proj.num_interfaces(), 2);
    assert_eq!(proj.mortar_to_secondary_int().shape(), (6, 6));
    let sign: Vec<f64> = proj.sign_of_mortar_sides().values().to_vec();
    assert_eq!(sign, vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0]);
    assert_eq!(sign.iter().sum::<f64>(), 2.0);

    // the one-sided interface owns mortar dofs 4 and 5
    let x = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0];
    let faces = matvec(proj.mortar_to_primary_int().matrix(), &x);
    assert_close(&[faces[1], faces[4]], &[0.5, 1.5], 1e-14);
}

#[test]
fn mismatched_dimensions_fail() {
    let (m, f) = fractured_square();
    let mortar = two_sided_mortar();
    let seq = GridSequence::new([&m, &f]).unwrap();

    let swapped = [Interface::new(&f, &m, &mortar)];
    assert_eq!(
        MortarProjections::new(&seq, &swapped, 1).unwrap_err(),
        OpsError::UnsupportedInterface {
            primary_dim: 1,
            secondary_dim: 2,
            mortar_dim: 1
        }
    );

    let same = [Interface::new(&m, &m, &mortar)];
    assert!(matches!(
        MortarProjections::new(&seq, &same, 1),
        Err(OpsError::UnsupportedInterface { .. })
    ));
}

#[test]
fn collection_traversal_matches_explicit_sequence() {
    let (m, f) = fractured_square();
    let mortar = two_sided_mortar();

    let mut mdg = MixedDimGrid::new();
    mdg.add_grid(&f).unwrap();
    mdg.add_grid(&m).unwrap();
    mdg.add_interface(&m, &f, &mortar).unwrap();
    let from_mdg = MortarProjections::from_mixed_dim_grid(&mdg, 1).unwrap();

    let seq = GridSequence::new([&m, &f]).unwrap();
    let explicit = MortarProjections::new(&seq, &[Interface::new(&m, &f, &mortar)], 1).unwrap();

    assert_eq!(
        dense(from_mdg.mortar_to_primary_avg().matrix()),
        dense(explicit.mortar_to_primary_avg().matrix())
    );
    assert_eq!(
        dense(from_mdg.secondary_to_mortar_int().matrix()),
        dense(explicit.secondary_to_mortar_int().matrix())
    );
}
