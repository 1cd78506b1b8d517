//! Pairwise distances between superpixel bounding-box centres.

use crate::state::Superpixel;
use geo::Coord;

/// Square, symmetric matrix of centre distances together with the superpixel
/// ids it was built from. Row `i` belongs to `ids()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<i64>,
    /// Row-major, `ids.len() * ids.len()` entries.
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Precompute all pairwise distances. O(n²); the whole matrix has to be
    /// rebuilt whenever the superpixel set changes.
    pub fn build(superpixels: &[Superpixel]) -> Self {
        let n = superpixels.len();
        let centers: Vec<Coord<f64>> = superpixels.iter().map(Superpixel::center).collect();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(centers[i], centers[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }
        Self {
            ids: superpixels.iter().map(|sp| sp.id).collect(),
            distances,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Matrix position of a superpixel id.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.distances[i * n..(i + 1) * n]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.len() + j]
    }
}

fn euclidean(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
