use std::fmt::Display;

use geo::prelude::*;
use ndarray::Array2;

use crate::Cost;

use super::{Landmark, Node, TravelCosts};

/// The campus model: landmark records plus the symmetric path network
/// between them.
///
/// The number of slots is fixed at construction. Setup overwrites landmark
/// slots and inserts paths; queries never mutate. If the landmark set has to
/// change, build a new map — results computed against the old one are stale.
#[derive(Debug, Clone)]
pub struct CampusMap {
    landmarks: Vec<Landmark>,
    adjacency: Array2<Option<Cost>>,
}

impl CampusMap {
    pub fn new(num_landmarks: usize) -> Self {
        CampusMap {
            landmarks: vec![Landmark::default(); num_landmarks],
            adjacency: Array2::from_elem((num_landmarks, num_landmarks), None),
        }
    }

    pub fn n(&self) -> usize {
        self.landmarks.len()
    }

    /// Number of paths in the network.
    pub fn m(&self) -> usize {
        self.paths().count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.landmarks.len()).map(Node::new)
    }

    /// Overwrites the landmark record at `node`. Duplicate names or codes
    /// across slots are not rejected.
    pub fn add_landmark(&mut self, node: Node, landmark: Landmark) {
        self.landmarks[node.id()] = landmark;
    }

    pub fn landmark(&self, node: Node) -> &Landmark {
        &self.landmarks[node.id()]
    }

    /// Inserts an undirected path of the given length between two distinct
    /// landmarks. Inserting the same pair again overwrites the old length.
    pub fn add_path(&mut self, from: Node, to: Node, length: Cost) {
        assert!(from != to, "a path must connect two distinct landmarks");
        self.adjacency[[from.id(), to.id()]] = Some(length);
        self.adjacency[[to.id(), from.id()]] = Some(length);
    }

    /// Returns the length of the direct path between two landmarks if one
    /// exists.
    pub fn edge_cost(&self, from: Node, to: Node) -> Option<Cost> {
        self.adjacency[[from.id(), to.id()]]
    }

    pub fn contains_edge(&self, from: Node, to: Node) -> bool {
        self.edge_cost(from, to).is_some()
    }

    /// All paths of the network, each undirected pair reported once.
    pub fn paths(&self) -> impl Iterator<Item = (Node, Node, Cost)> + '_ {
        self.nodes().flat_map(move |from| {
            self.nodes()
                .filter(move |to| from < *to)
                .filter_map(move |to| self.edge_cost(from, to).map(|cost| (from, to, cost)))
        })
    }

    /// Straight-line distance between two landmark positions, independent of
    /// the path network.
    pub fn euclidean_distance(&self, from: Node, to: Node) -> f64 {
        self.landmarks[from.id()]
            .position
            .euclidean_distance(&self.landmarks[to.id()].position)
    }
}

impl TravelCosts for CampusMap {
    fn travel_cost(&self, from: Node, to: Node) -> Option<Cost> {
        self.edge_cost(from, to)
    }
}

impl Display for CampusMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "campus {{")?;
        for node in self.nodes() {
            let landmark = self.landmark(node);
            writeln!(
                f,
                "{} {} ({:.0}, {:.0})",
                node,
                landmark.name,
                landmark.position.x(),
                landmark.position.y()
            )?;
        }
        for (from, to, cost) in self.paths() {
            writeln!(f, "{} -- {} [{}]", from, to, cost)?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test_campus {
    use super::*;

    ///   0 --5-- 1 --1-- 2
    ///  |3|     |1|     |3|
    ///   3 --1-- 4 --6-- 5
    fn hex_campus() -> CampusMap {
        let mut map = CampusMap::new(6);
        map.add_path(0.into(), 1.into(), 5.into());
        map.add_path(0.into(), 3.into(), 3.into());
        map.add_path(1.into(), 4.into(), 1.into());
        map.add_path(1.into(), 2.into(), 1.into());
        map.add_path(2.into(), 5.into(), 3.into());
        map.add_path(3.into(), 4.into(), 1.into());
        map.add_path(4.into(), 5.into(), 6.into());
        map
    }

    #[test]
    fn test_path_insertion() {
        let map = hex_campus();

        assert_eq!(map.n(), 6);
        assert_eq!(map.m(), 7);
        assert!(map.contains_edge(0.into(), 1.into()));
        assert!(map.contains_edge(4.into(), 5.into()));
        assert!(!map.contains_edge(0.into(), 5.into()));
        assert_eq!(map.edge_cost(3.into(), 4.into()), Some(1.into()));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let map = hex_campus();

        for from in map.nodes() {
            for to in map.nodes() {
                assert_eq!(map.edge_cost(from, to), map.edge_cost(to, from));
            }
        }
    }

    #[test]
    fn test_last_insert_wins() {
        let mut map = CampusMap::new(3);
        map.add_path(0.into(), 1.into(), 5.into());
        map.add_path(1.into(), 0.into(), 8.into());

        assert_eq!(map.edge_cost(0.into(), 1.into()), Some(8.into()));
        assert_eq!(map.edge_cost(1.into(), 0.into()), Some(8.into()));
    }

    #[test]
    fn test_landmark_overwrite() {
        let mut map = CampusMap::new(2);
        map.add_landmark(0.into(), Landmark::new("Library", "LIB", "Main library", (1.0, 2.0)));
        map.add_landmark(0.into(), Landmark::new("Gym", "GYM", "Sports hall", (1.0, 2.0)));

        assert_eq!(map.landmark(0.into()).name, "Gym");
    }

    #[test]
    fn test_euclidean_distance() {
        let mut map = CampusMap::new(2);
        map.add_landmark(0.into(), Landmark::new("A", "A", "", (0.0, 0.0)));
        map.add_landmark(1.into(), Landmark::new("B", "B", "", (3.0, 4.0)));

        assert!((map.euclidean_distance(0.into(), 1.into()) - 5.0).abs() < 1e-12);
        assert!((map.euclidean_distance(1.into(), 0.into()) - 5.0).abs() < 1e-12);
        assert_eq!(map.euclidean_distance(0.into(), 0.into()), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_self_loop_rejected() {
        let mut map = CampusMap::new(2);
        map.add_path(1.into(), 1.into(), 5.into());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_rejected() {
        let mut map = CampusMap::new(2);
        map.add_path(0.into(), 2.into(), 5.into());
    }
}
