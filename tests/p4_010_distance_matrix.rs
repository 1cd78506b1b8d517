// P4-010: Distance matrix over a loaded scene
// Test: Load scenes of several sizes and inspect the precomputed matrix
// Expected: n x n, symmetric, zero diagonal, aligned with the load order

mod test_helpers;

use spmc_labeler::distance::DistanceMatrix;
use test_helpers::*;

#[test]
fn matrix_shape_matches_every_scene_size() {
    for n in [0usize, 1, 2, 5, 23] {
        let superpixels: Vec<_> = (0..n)
            .map(|i| create_square(i as i64, (i % 7) as f64 * 3.0, (i / 7) as f64 * 2.5, None))
            .collect();
        let m = DistanceMatrix::build(&superpixels);
        assert_eq!(m.len(), n);
        assert_eq!(m.ids().len(), n);
        for i in 0..n {
            assert_eq!(m.row(i).len(), n);
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..n {
                assert_eq!(m.get(i, j), m.get(j, i), "asymmetric at ({i}, {j})");
                assert!(m.get(i, j) >= 0.0);
            }
        }
    }
}

#[test]
fn abc_distances() {
    let session = create_abc_scene();
    let m = session.distances().unwrap();
    assert_eq!(m.ids(), &[100, 200, 300]);
    assert_eq!(m.get(0, 1), 1.0);
    assert_eq!(m.get(0, 2), 5.0);
    assert_eq!(m.get(1, 2), 4.0);
}

#[test]
fn reload_rebuilds_the_matrix() {
    let mut session = create_abc_scene();
    session.load_superpixels(vec![
        create_square(7, 0.0, 0.0, None),
        create_square(8, 0.0, 3.0, None),
    ]);
    let m = session.distances().unwrap();
    assert_eq!(m.len(), session.superpixels().len());
    assert_eq!(m.ids(), &[7, 8]);
    assert_eq!(m.get(0, 1), 3.0);
}
