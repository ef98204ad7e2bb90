use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use transit_graph::domain::RouteResult;
use transit_graph::graph::GraphStore;
use transit_graph::persistence::{JsonFileRepository, JsonRepositoryConfig, LoadOutcome};
use transit_graph::planner::{Criterion, RouteEngine};

const USAGE: &str = "usage: transit-graph <graph.json> <from> <to> [distance|time|transfers]";

fn init_logging() {
    let default_level = LevelFilter::WARN;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_route(graph: &GraphStore, criterion: Criterion, route: &RouteResult) {
    if !route.is_found() {
        println!("No route found.");
        return;
    }

    println!("Best route by {criterion}:");
    for station in &route.path {
        println!("  {station}");
    }
    println!("Distance:  {:.2}", route.distance);
    println!(
        "Time:      {:.2} h (default speed {})",
        route.time,
        graph.default_speed()
    );
    println!("Transfers: {}", route.transfers);
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, from, to) = match args.as_slice() {
        [path, from, to] | [path, from, to, _] => (path, from, to),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    let criterion = match args.get(3).map(|s| s.parse::<Criterion>()) {
        None => Criterion::default(),
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let repo = JsonFileRepository::new(JsonRepositoryConfig::new(path));
    let mut graph = GraphStore::new();
    match graph.load_from(&repo) {
        Ok(LoadOutcome::Loaded {
            stations,
            connections,
        }) => println!("Loaded {stations} stations and {connections} connections"),
        Ok(LoadOutcome::NoData) => {
            eprintln!("Graph file not found: {path}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Failed to load graph: {e}");
            return ExitCode::FAILURE;
        }
    }

    match RouteEngine::new(&graph).route(from, to, criterion) {
        Ok(route) => {
            print_route(&graph, criterion, &route);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
