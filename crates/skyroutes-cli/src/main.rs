mod ingest;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroutes_lib::{
    build_route_graph, shortest_path, top_farthest, Error as LibError, RouteGraph,
};

use crate::ingest::{load_routes, Dataset};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airport route graph queries")]
struct Cli {
    /// Path to the routes CSV file.
    #[arg(long)]
    routes: PathBuf,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two airport codes.
    Route {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
    },
    /// List the airports with the longest shortest paths from an origin.
    Farthest {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Number of airports to report.
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Show the recorded attributes of one airport.
    Airport {
        /// Airport code to look up.
        code: String,
    },
    /// List directed connections, either all of them or one airport's.
    Connections {
        /// Restrict the listing to one origin airport code.
        code: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset = load_routes(&cli.routes)?;
    let graph = build_route_graph(&dataset.records);

    match cli.command {
        Command::Route { from, to } => handle_route(&graph, &from, &to, cli.json),
        Command::Farthest { from, count } => handle_farthest(&graph, &from, count, cli.json),
        Command::Airport { code } => handle_airport(&dataset, &code, cli.json),
        Command::Connections { code } => handle_connections(&graph, code.as_deref(), cli.json),
    }
}

fn handle_route(graph: &RouteGraph, from: &str, to: &str, json: bool) -> Result<()> {
    let route = shortest_path(graph, from, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    println!(
        "Shortest route from {} to {}: {:.2} km",
        from, to, route.distance
    );
    println!("  {}", route.steps.join(" -> "));
    Ok(())
}

fn handle_farthest(graph: &RouteGraph, from: &str, count: usize, json: bool) -> Result<()> {
    let farthest = top_farthest(graph, from, count)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&farthest)?);
        return Ok(());
    }

    if farthest.is_empty() {
        println!("No airports reachable from {}", from);
        return Ok(());
    }

    println!("Top {} farthest airports from {}:", farthest.len(), from);
    for entry in &farthest {
        println!(
            "  {}  {:.2} km  via {}",
            entry.code,
            entry.distance,
            entry.steps.join(" -> ")
        );
    }
    Ok(())
}

fn handle_airport(dataset: &Dataset, code: &str, json: bool) -> Result<()> {
    let record = dataset
        .directory
        .get(code)
        .ok_or_else(|| LibError::UnknownAirport {
            code: code.to_string(),
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("Airport {}", record.code);
    println!("  City:      {}", record.city);
    println!("  Country:   {}", record.country);
    println!("  Latitude:  {:.4}", record.latitude);
    println!("  Longitude: {:.4}", record.longitude);
    Ok(())
}

fn handle_connections(graph: &RouteGraph, code: Option<&str>, json: bool) -> Result<()> {
    let mut connections: Vec<(&str, &str, f64)> = match code {
        Some(code) => {
            if !graph.contains(code) {
                return Err(LibError::UnknownAirport {
                    code: code.to_string(),
                }
                .into());
            }
            graph
                .neighbours(code)
                .iter()
                .map(|(to, &weight)| (code, to.as_str(), weight))
                .collect()
        }
        None => graph.edges().collect(),
    };
    connections.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    if json {
        let entries: Vec<serde_json::Value> = connections
            .iter()
            .map(|(from, to, weight)| {
                serde_json::json!({ "from": from, "to": to, "distance_km": weight })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (from, to, weight) in connections {
        println!("{} -> {}  {:.2} km", from, to, weight);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
