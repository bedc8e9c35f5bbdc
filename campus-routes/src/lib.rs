pub mod cost;
pub mod dijkstra;
pub mod map;
pub mod tsp;

pub use cost::{Cost, PathCost};
