use ndarray::Array2;

use crate::Cost;

use super::{CampusMap, Node, TravelCosts};

/// All-pairs straight-line distances between landmarks, truncated to whole
/// length units.
///
/// Derived from landmark positions alone: a pair has a distance whether or
/// not any path connects it, which is what lets tour planning treat every
/// landmark as reachable as the crow flies. This is a value owned by the
/// caller, not a cache inside the map; recompute it after the landmark set
/// changes.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    matrix: Array2<Cost>,
}

impl DistanceMatrix {
    /// Computes the matrix for the current landmark positions. O(n²).
    pub fn compute(map: &CampusMap) -> Self {
        let n = map.n();
        let mut matrix = Array2::from_elem((n, n), Cost::new(0));
        for from in map.nodes() {
            for to in map.nodes() {
                if from != to {
                    let distance = map.euclidean_distance(from, to);
                    matrix[[from.id(), to.id()]] = Cost::new(distance as usize);
                }
            }
        }
        DistanceMatrix { matrix }
    }

    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get(&self, from: Node, to: Node) -> Cost {
        self.matrix[[from.id(), to.id()]]
    }
}

impl TravelCosts for DistanceMatrix {
    fn travel_cost(&self, from: Node, to: Node) -> Option<Cost> {
        Some(self.get(from, to))
    }
}

#[cfg(test)]
mod test_distance {
    use super::*;
    use crate::map::Landmark;

    fn campus_at(positions: &[(f64, f64)]) -> CampusMap {
        let mut map = CampusMap::new(positions.len());
        for (i, &position) in positions.iter().enumerate() {
            let name = format!("L{}", i);
            map.add_landmark(i.into(), Landmark::new(&name, &name, "", position));
        }
        map
    }

    #[test]
    fn test_diagonal_is_zero() {
        let matrix = DistanceMatrix::compute(&campus_at(&[(0.0, 0.0), (3.0, 4.0), (7.0, 1.0)]));

        for i in 0..matrix.n() {
            assert_eq!(matrix.get(i.into(), i.into()), 0.into());
        }
    }

    #[test]
    fn test_distances_truncate_towards_zero() {
        let matrix = DistanceMatrix::compute(&campus_at(&[(0.0, 0.0), (2.5, 0.0), (3.0, 4.0)]));

        assert_eq!(matrix.get(0.into(), 1.into()), 2.into());
        assert_eq!(matrix.get(0.into(), 2.into()), 5.into());
        assert_eq!(matrix.get(1.into(), 2.into()), 4.into()); // sqrt(16.25) = 4.03..
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let campus = campus_at(&[(0.0, 0.0), (8.5, 3.2), (1.0, 9.0), (4.4, 4.4)]);
        let matrix = DistanceMatrix::compute(&campus);

        for from in campus.nodes() {
            for to in campus.nodes() {
                assert_eq!(matrix.get(from, to), matrix.get(to, from));
            }
        }
    }

    /// The floored matrix entries may violate the triangle inequality, but
    /// the underlying float distances never do.
    #[test]
    fn test_float_triangle_inequality() {
        let campus = campus_at(&[(0.0, 0.0), (3.0, 4.0), (10.0, 0.0), (5.1, 8.7), (2.2, 1.3)]);

        for i in campus.nodes() {
            for j in campus.nodes() {
                for k in campus.nodes() {
                    let direct = campus.euclidean_distance(i, k);
                    let detour = campus.euclidean_distance(i, j) + campus.euclidean_distance(j, k);
                    assert!(direct <= detour + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_every_pair_is_priced() {
        // no paths at all; straight-line costs exist anyway
        let matrix = DistanceMatrix::compute(&campus_at(&[(0.0, 0.0), (6.0, 8.0)]));

        assert_eq!(matrix.travel_cost(0.into(), 1.into()), Some(10.into()));
    }
}
