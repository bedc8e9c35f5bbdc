use std::{error::Error, path::Path};

use csv::{Reader, WriterBuilder};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use campus_routes::{
    dijkstra::Paths,
    map::{CampusMap, Landmark, Node},
    Cost,
};

#[derive(Debug, Deserialize, Serialize)]
struct LandmarkRecord {
    name: String,
    code: String,
    description: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize, Serialize)]
struct PathRecord {
    from: String,
    to: String,
    length: usize,
}

/// Resolves landmark names, codes or plain indices to store indices.
///
/// Resolution lives out here on purpose: the map itself is addressed
/// positionally only.
pub struct LandmarkResolver {
    by_key: FxHashMap<String, Node>,
    n: usize,
}

impl LandmarkResolver {
    pub fn from_map(map: &CampusMap) -> Self {
        let mut by_key = FxHashMap::default();
        for node in map.nodes() {
            let landmark = map.landmark(node);
            by_key.insert(landmark.name.clone(), node);
            by_key.insert(landmark.code.clone(), node);
        }
        LandmarkResolver { by_key, n: map.n() }
    }

    pub fn resolve(&self, key: &str) -> Result<Node, Box<dyn Error>> {
        if let Some(&node) = self.by_key.get(key) {
            return Ok(node);
        }
        if let Ok(index) = key.parse::<usize>() {
            if index < self.n {
                return Ok(Node::new(index));
            }
        }
        Err(format!("unknown landmark: {}", key).into())
    }
}

pub fn load_campus<P: AsRef<Path>>(landmarks: P, paths: P) -> Result<CampusMap, Box<dyn Error>> {
    let records: Vec<LandmarkRecord> = Reader::from_path(landmarks)?
        .deserialize()
        .collect::<Result<_, _>>()?;

    let mut map = CampusMap::new(records.len());
    for (index, record) in records.into_iter().enumerate() {
        map.add_landmark(
            Node::new(index),
            Landmark::new(record.name, record.code, record.description, (record.x, record.y)),
        );
    }

    let resolver = LandmarkResolver::from_map(&map);
    for record in Reader::from_path(paths)?.deserialize() {
        let record: PathRecord = record?;
        let from = resolver.resolve(&record.from)?;
        let to = resolver.resolve(&record.to)?;
        map.add_path(from, to, Cost::new(record.length));
    }

    log::info!(
        "Campus with {} landmarks and {} paths loaded.",
        map.n(),
        map.m()
    );

    Ok(map)
}

pub fn write_campus<P: AsRef<Path>>(
    map: &CampusMap,
    landmarks: P,
    paths: P,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_path(landmarks)?;
    for node in map.nodes() {
        let landmark = map.landmark(node);
        wtr.serialize(LandmarkRecord {
            name: landmark.name.clone(),
            code: landmark.code.clone(),
            description: landmark.description.clone(),
            x: landmark.position.x(),
            y: landmark.position.y(),
        })?;
    }
    wtr.flush()?;

    let mut wtr = WriterBuilder::new().from_path(paths)?;
    for (from, to, cost) in map.paths() {
        wtr.serialize(PathRecord {
            from: map.landmark(from).name.clone(),
            to: map.landmark(to).name.clone(),
            length: cost.as_usize(),
        })?;
    }
    wtr.flush()?;

    Ok(())
}

#[derive(Serialize)]
struct PathRow {
    landmark: String,
    code: String,
    length: Option<Cost>,
    route: String,
}

/// Writes the shortest-route table of one source as CSV; unreachable
/// landmarks get an empty length and route.
pub fn export_paths<P: AsRef<Path>>(
    map: &CampusMap,
    paths: &Paths,
    output: P,
) -> Result<(), Box<dyn Error>> {
    log::info!("Exporting routes to {:?}.", output.as_ref());

    let mut wtr = WriterBuilder::new().from_path(output)?;
    for (node, result) in paths.results() {
        let landmark = map.landmark(node);
        let row = match result {
            Some((cost, route)) => PathRow {
                landmark: landmark.name.clone(),
                code: landmark.code.clone(),
                length: Some(cost),
                route: format_route(map, &route),
            },
            None => PathRow {
                landmark: landmark.name.clone(),
                code: landmark.code.clone(),
                length: None,
                route: String::new(),
            },
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Renders a route as "A -> B -> C" using landmark names.
pub fn format_route(map: &CampusMap, route: &[Node]) -> String {
    route
        .iter()
        .map(|&node| map.landmark(node).name.as_str())
        .collect::<Vec<&str>>()
        .join(" -> ")
}

#[cfg(test)]
mod test_campus_io {
    use super::*;

    fn named_campus() -> CampusMap {
        let mut map = CampusMap::new(2);
        map.add_landmark(0.into(), Landmark::new("Library", "LIB", "", (0.0, 0.0)));
        map.add_landmark(1.into(), Landmark::new("Gym", "GYM", "", (3.0, 4.0)));
        map
    }

    #[test]
    fn test_resolver() {
        let resolver = LandmarkResolver::from_map(&named_campus());

        assert_eq!(resolver.resolve("Library").unwrap(), 0.into());
        assert_eq!(resolver.resolve("GYM").unwrap(), 1.into());
        assert_eq!(resolver.resolve("1").unwrap(), 1.into());
        assert!(resolver.resolve("Pool").is_err());
        assert!(resolver.resolve("7").is_err());
    }

    #[test]
    fn test_format_route() {
        let map = named_campus();

        assert_eq!(format_route(&map, &[0.into(), 1.into()]), "Library -> Gym");
        assert_eq!(format_route(&map, &[1.into()]), "Gym");
    }
}
