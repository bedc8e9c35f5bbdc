use campus_routes::{
    map::{CampusMap, Landmark, Node},
    Cost,
};
use rand::Rng;

struct CostRange {
    min: Cost,
    max: Cost,
}

/// Generates a campus with landmarks at uniform positions and a
/// density-driven path network.
pub struct RandomCampus {
    n: usize,
    density: f64,
    lengths: CostRange,
    extent: (f64, f64),
}

impl RandomCampus {
    pub fn new(n: usize, density: f64) -> Self {
        assert!((0.0..=1.0).contains(&density), "density is a probability");
        RandomCampus {
            n,
            density,
            lengths: CostRange {
                min: 10.into(),
                max: 60.into(),
            },
            extent: (800.0, 600.0),
        }
    }

    pub fn build(&self) -> CampusMap {
        let mut rng = rand::thread_rng();

        let mut map = CampusMap::new(self.n);
        for index in 0..self.n {
            let position = (
                rng.gen_range(0.0..self.extent.0),
                rng.gen_range(0.0..self.extent.1),
            );
            map.add_landmark(
                Node::new(index),
                Landmark::new(
                    format!("Landmark {}", index),
                    format!("L{:02}", index),
                    format!("Sight no. {} of the generated campus", index),
                    position,
                ),
            );
        }

        for from in 0..self.n {
            for to in from + 1..self.n {
                if rng.gen_bool(self.density) {
                    let length = rng.gen_range(self.lengths.min..self.lengths.max);
                    map.add_path(from.into(), to.into(), length);
                }
            }
        }

        map
    }
}

#[cfg(test)]
mod test_gen {
    use super::*;

    #[test]
    fn test_generated_campus_shape() {
        let map = RandomCampus::new(8, 0.5).build();

        assert_eq!(map.n(), 8);
        for node in map.nodes() {
            assert!(!map.landmark(node).name.is_empty());
        }
        for (from, to, cost) in map.paths() {
            assert_eq!(map.edge_cost(to, from), Some(cost));
            assert!(cost >= 10.into() && cost < 60.into());
        }
    }

    #[test]
    fn test_zero_density_has_no_paths() {
        let map = RandomCampus::new(5, 0.0).build();

        assert_eq!(map.m(), 0);
    }
}
