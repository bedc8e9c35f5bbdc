mod campus_io;
mod gen;

use std::{error::Error, path::PathBuf, str::FromStr};

use clap::Parser;

use campus_routes::{
    dijkstra::{shortest_paths, Paths},
    map::{CampusMap, DistanceMatrix, Node, Tour, TravelCosts},
    tsp::{exhaustive_tour, nearest_neighbor_tour, TourPolicy},
};

use campus_io::{export_paths, format_route, load_campus, write_campus, LandmarkResolver};
use gen::RandomCampus;

#[derive(Parser)]
enum Cli {
    /// Generate a random campus and write it to CSV files.
    Random(Random),
    /// Shortest routes from one landmark to every other.
    Paths(PathsCmd),
    /// A visiting order over a list of stops, back to the first.
    Tour(TourCmd),
}

#[derive(Parser)]
struct Random {
    #[clap(short, long, default_value = "10")]
    num_landmarks: usize,

    #[clap(short, long, default_value = "0.5")]
    density: f64,

    #[clap(flatten)]
    campus: CampusFiles,
}

#[derive(Parser)]
struct PathsCmd {
    /// Landmark name, code or index.
    source: String,

    #[clap(flatten)]
    campus: CampusFiles,

    /// Export the result table as CSV.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct TourCmd {
    /// Landmark names, codes or indices; the first is the start.
    stops: Vec<String>,

    #[clap(flatten)]
    campus: CampusFiles,

    #[clap(long, default_value = "greedy")]
    policy: TourPolicy,

    #[clap(long, default_value = "crow")]
    metric: Metric,
}

#[derive(Parser, Clone, Debug)]
struct CampusFiles {
    #[clap(long, default_value = "landmarks.csv", parse(from_os_str))]
    landmarks: PathBuf,

    #[clap(long, default_value = "paths.csv", parse(from_os_str))]
    paths: PathBuf,
}

/// Which cost source prices the legs of a tour.
#[derive(Copy, Clone, Debug)]
enum Metric {
    /// Straight-line distances; every pair of stops is reachable.
    Crow,
    /// The raw path network; tours may truncate at unreachable stops.
    Paths,
}

impl FromStr for Metric {
    type Err = String;
    fn from_str(metric: &str) -> Result<Self, Self::Err> {
        match metric {
            "crow" => Ok(Metric::Crow),
            "paths" => Ok(Metric::Paths),
            _ => Err(format!("unknown metric: {}", metric)),
        }
    }
}

fn set_up_logging() -> Result<(), fern::InitError> {
    std::fs::create_dir_all("logs")?;
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(format!(
            "logs/{}.log",
            chrono::Local::now().format("%d%m%Y-%H%M")
        ))?)
        .apply()?;

    log::info!("Logger set up!");

    Ok(())
}

fn print_shortest_paths(map: &CampusMap, paths: &Paths) {
    println!("Shortest routes from {}:", map.landmark(paths.source()).name);
    for (node, result) in paths.results() {
        let name = &map.landmark(node).name;
        match result {
            Some((cost, route)) => {
                println!("{}: {} (length {})", name, format_route(map, &route), cost)
            }
            None => println!("{}: unreachable", name),
        }
    }
}

fn plan_tour<C: TravelCosts>(costs: &C, policy: TourPolicy, targets: &[Node]) -> Option<Tour> {
    match policy {
        TourPolicy::Greedy => Some(nearest_neighbor_tour(costs, targets)),
        TourPolicy::Exact => exhaustive_tour(costs, targets),
    }
}

fn print_tour(map: &CampusMap, targets: &[Node], tour: Option<Tour>) {
    match tour {
        Some(tour) => {
            let mut route = format_route(map, tour.nodes());
            if tour.is_closed() {
                route.push_str(" -> ");
                route.push_str(&map.landmark(tour.first()).name);
            }
            if tour.covers(targets.len()) {
                println!("route: {}, total length {}", route, tour.cost());
            } else {
                println!(
                    "partial route ({} of {} stops): {}, length {}",
                    tour.len(),
                    targets.len(),
                    route,
                    tour.cost()
                );
            }
        }
        None => println!("no valid route"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    set_up_logging()?;
    let cli = Cli::parse();

    match cli {
        Cli::Random(random) => {
            let map = RandomCampus::new(random.num_landmarks, random.density).build();
            println!(
                "Generated a campus with {} landmarks and {} paths.",
                map.n(),
                map.m()
            );
            write_campus(&map, &random.campus.landmarks, &random.campus.paths)?;
        }
        Cli::Paths(cmd) => {
            let map = load_campus(&cmd.campus.landmarks, &cmd.campus.paths)?;
            let resolver = LandmarkResolver::from_map(&map);
            let source = resolver.resolve(&cmd.source)?;
            let paths = shortest_paths(&map, source);

            print_shortest_paths(&map, &paths);

            if let Some(output) = cmd.output {
                export_paths(&map, &paths, output)?;
            }
        }
        Cli::Tour(tour) => {
            let map = load_campus(&tour.campus.landmarks, &tour.campus.paths)?;
            let resolver = LandmarkResolver::from_map(&map);
            let targets = tour
                .stops
                .iter()
                .map(|stop| resolver.resolve(stop))
                .collect::<Result<Vec<Node>, _>>()?;

            match targets.as_slice() {
                [] => return Err("a tour needs at least one stop".into()),
                // a single stop is a shortest-path query, not a tour
                [source] => print_shortest_paths(&map, &shortest_paths(&map, *source)),
                _ => {
                    let planned = match tour.metric {
                        Metric::Crow => {
                            let matrix = DistanceMatrix::compute(&map);
                            plan_tour(&matrix, tour.policy, &targets)
                        }
                        Metric::Paths => plan_tour(&map, tour.policy, &targets),
                    };
                    print_tour(&map, &targets, planned);
                }
            }
        }
    }
    Ok(())
}
