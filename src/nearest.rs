use crate::distance::DistanceMatrix;
use crate::state::Superpixel;

/// Position of the closest unassigned superpixel to `reference_id`.
///
/// The reference itself is never returned. Ties go to the lowest position.
/// Returns `None` when the reference id is not in the matrix or when no other
/// superpixel is still unassigned.
pub fn find_nearest_unassigned(
    superpixels: &[Superpixel],
    reference_id: i64,
    distances: &DistanceMatrix,
) -> Option<usize> {
    let reference = distances.position_of(reference_id)?;
    let row = distances.row(reference);

    let mut best: Option<(usize, f64)> = None;
    for (i, sp) in superpixels.iter().enumerate() {
        if i == reference || sp.is_assigned() {
            continue;
        }
        let Some(&d) = row.get(i) else { continue };
        match best {
            Some((_, min)) if d >= min => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Position of the first unassigned superpixel in list order.
pub fn first_unassigned(superpixels: &[Superpixel]) -> Option<usize> {
    superpixels.iter().position(|sp| !sp.is_assigned())
}

pub fn count_unassigned(superpixels: &[Superpixel]) -> usize {
    superpixels.iter().filter(|sp| !sp.is_assigned()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Geometry, Rect};

    fn at(id: i64, x: f64, y: f64, label: Option<i64>) -> Superpixel {
        let rect = Rect::new(Coord { x: x - 0.5, y: y - 0.5 }, Coord { x: x + 0.5, y: y + 0.5 });
        Superpixel::new(id, Geometry::Polygon(rect.to_polygon()), label, None).unwrap()
    }

    #[test]
    fn picks_closest_unassigned() {
        let sps = vec![at(1, 0.0, 0.0, None), at(2, 1.0, 0.0, None), at(3, 5.0, 0.0, None)];
        let m = DistanceMatrix::build(&sps);
        assert_eq!(find_nearest_unassigned(&sps, 1, &m), Some(1));
    }

    #[test]
    fn skips_assigned_neighbours() {
        let sps = vec![at(1, 0.0, 0.0, Some(4)), at(2, 1.0, 0.0, Some(4)), at(3, 5.0, 0.0, None)];
        let m = DistanceMatrix::build(&sps);
        assert_eq!(find_nearest_unassigned(&sps, 2, &m), Some(2));
    }

    #[test]
    fn never_returns_reference_even_if_unassigned() {
        let sps = vec![at(1, 0.0, 0.0, None), at(2, 9.0, 9.0, Some(1))];
        let m = DistanceMatrix::build(&sps);
        assert_eq!(find_nearest_unassigned(&sps, 1, &m), None);
    }

    #[test]
    fn ties_go_to_lowest_position() {
        let sps = vec![at(1, -2.0, 0.0, None), at(2, 0.0, 0.0, Some(1)), at(3, 2.0, 0.0, None)];
        let m = DistanceMatrix::build(&sps);
        assert_eq!(find_nearest_unassigned(&sps, 2, &m), Some(0));
    }

    #[test]
    fn unknown_reference_finds_nothing() {
        let sps = vec![at(1, 0.0, 0.0, None)];
        let m = DistanceMatrix::build(&sps);
        assert_eq!(find_nearest_unassigned(&sps, 99, &m), None);
    }

    #[test]
    fn first_unassigned_ignores_distance() {
        let sps = vec![at(1, 0.0, 0.0, Some(1)), at(2, 50.0, 0.0, None), at(3, 1.0, 0.0, None)];
        assert_eq!(first_unassigned(&sps), Some(1));
        assert_eq!(count_unassigned(&sps), 2);
    }
}
