// P4-020: Nearest unassigned superpixel
// Test: Search from a reference superpixel across labeled and unlabeled neighbours
// Expected: Closest unlabeled position, never the reference, None when nothing is left

mod test_helpers;

use spmc_labeler::nearest::find_nearest_unassigned;
use test_helpers::*;

#[test]
fn closest_neighbour_wins() {
    let session = create_abc_scene();
    let m = session.distances().unwrap();
    let found = find_nearest_unassigned(session.superpixels(), 100, m);
    assert_eq!(found, Some(position(&session, 200)));
}

#[test]
fn after_assigning_b_only_c_remains() {
    let session = create_session(vec![
        create_square(100, 0.0, 0.0, Some(1)),
        create_square(200, 1.0, 0.0, Some(1)),
        create_square(300, 5.0, 0.0, None),
    ]);
    let m = session.distances().unwrap();
    let found = find_nearest_unassigned(session.superpixels(), 200, m);
    assert_eq!(found, Some(position(&session, 300)));
}

#[test]
fn single_candidate_is_returned_regardless_of_distance() {
    let session = create_session(vec![
        create_square(1, 0.0, 0.0, None),
        create_square(2, 0.5, 0.0, Some(2)),
        create_square(3, 1000.0, -1000.0, None),
        create_square(4, 1.0, 0.0, Some(2)),
    ]);
    let m = session.distances().unwrap();
    assert_eq!(find_nearest_unassigned(session.superpixels(), 1, m), Some(2));
}

#[test]
fn reference_is_never_returned() {
    let session = create_session(vec![
        create_square(1, 0.0, 0.0, None),
        create_square(2, 0.0, 0.0, Some(1)),
    ]);
    let m = session.distances().unwrap();
    for sp in session.superpixels() {
        let found = find_nearest_unassigned(session.superpixels(), sp.id, m);
        assert_ne!(found, Some(position(&session, sp.id)));
    }
    assert_eq!(find_nearest_unassigned(session.superpixels(), 1, m), None);
}

#[test]
fn equal_distances_keep_the_earliest_position() {
    let session = create_session(vec![
        create_square(1, 0.0, 3.0, None),
        create_square(2, 3.0, 0.0, None),
        create_square(3, 0.0, 0.0, Some(1)),
        create_square(4, -3.0, 0.0, None),
    ]);
    let m = session.distances().unwrap();
    assert_eq!(find_nearest_unassigned(session.superpixels(), 3, m), Some(0));
}
