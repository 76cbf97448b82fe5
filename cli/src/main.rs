//! Waypoint CLI: run and compare graph search strategies from the command line
//!
//! Loads a graph from a JSON document, or falls back to the built-in sample graph.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::error::Error;
use std::path::PathBuf;
use waypoint::{
    load_graph, GraphDocument, GraphStore, SearchConfig, SearchEngine, SearchOutcome, Strategy,
};

#[derive(Parser)]
#[command(name = "waypoint", version, about = "Waypoint graph search CLI")]
struct Cli {
    /// Graph document (JSON). The sample graph is used when omitted
    #[arg(long, global = true, env = "WAYPOINT_GRAPH")]
    graph: Option<PathBuf>,

    /// Search configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single strategy
    Run {
        /// bfs, dfs, ucs, a-star or greedy
        #[arg(long, short)]
        strategy: String,

        /// Start vertex name
        #[arg(long)]
        start: String,

        /// Goal vertex name
        #[arg(long)]
        goal: String,
    },
    /// Run several strategies between the same two vertices
    Compare {
        /// Start vertex name
        #[arg(long)]
        start: String,

        /// Goal vertex name
        #[arg(long)]
        goal: String,

        /// Comma separated strategies (default: all, or those in --config)
        #[arg(long, value_delimiter = ',')]
        strategies: Vec<String>,

        /// Run one strategy after another instead of on the thread pool
        #[arg(long)]
        sequential: bool,
    },
    /// List the outgoing edges of a vertex
    Neighbors {
        /// Vertex name
        vertex: String,
    },
    /// Show the graph's vertices and size
    Info,
}

fn main() {
    // Logs go to stderr so JSON and CSV output stay clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let store = match &cli.graph {
        Some(path) => load_graph(path)?,
        None => GraphStore::sample(),
    };
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Run { strategy, start, goal } => {
            let engine = SearchEngine::with_config(&store, config);
            let outcome = engine.run_named(&strategy, &start, &goal)?;
            print_outcomes(&[outcome], &cli.format)
        }
        Commands::Compare {
            start,
            goal,
            strategies,
            sequential,
        } => {
            if !strategies.is_empty() {
                config.strategies = strategies
                    .iter()
                    .map(|s| s.parse::<Strategy>())
                    .collect::<Result<Vec<_>, _>>()?;
            }
            if sequential {
                config.parallel = false;
            }
            let outcomes = SearchEngine::with_config(&store, config).compare(&start, &goal)?;
            print_outcomes(&outcomes, &cli.format)
        }
        Commands::Neighbors { vertex } => run_neighbors(&store, &vertex, &cli.format),
        Commands::Info => run_info(&store, &cli.format),
    }
}

fn print_outcomes(outcomes: &[SearchOutcome], format: &OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcomes)?);
        }
        OutputFormat::Csv => {
            println!("strategy,found,path_cost,hops,nodes_explored,time_us,path,explored_order");
            for o in outcomes {
                let cells = [
                    o.strategy.to_string(),
                    o.found.to_string(),
                    o.path_cost.to_string(),
                    o.hops().to_string(),
                    o.nodes_explored.to_string(),
                    o.time_taken.as_micros().to_string(),
                    format_csv_value(&o.path.join(" ")),
                    format_csv_value(&o.explored_order.join(" ")),
                ];
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Strategy", "Found", "Cost", "Hops", "Explored", "Time", "Path", "Visit order"]);

            for o in outcomes {
                let path = if o.found {
                    o.path.join(" -> ")
                } else {
                    "-".to_string()
                };
                table.add_row(vec![
                    o.strategy.to_string(),
                    o.found.to_string(),
                    o.path_cost.to_string(),
                    o.hops().to_string(),
                    o.nodes_explored.to_string(),
                    format!("{:.1?}", o.time_taken),
                    path,
                    o.explored_order.join(", "),
                ]);
            }

            println!("{}", table);
        }
    }

    Ok(())
}

fn run_neighbors(store: &GraphStore, vertex: &str, format: &OutputFormat) -> Result<(), Box<dyn Error>> {
    let id = store.resolve(vertex)?;
    let rows: Vec<(String, f64)> = store
        .neighbors(id)
        .iter()
        .map(|e| {
            let name = store.vertex(e.target).map(|v| v.name.clone()).unwrap_or_default();
            (name, e.cost)
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = rows
                .iter()
                .map(|(to, cost)| serde_json::json!({ "to": to, "cost": cost }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("to,cost");
            for (to, cost) in &rows {
                println!("{},{}", format_csv_value(to), cost);
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no outgoing edges)");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(vec!["To", "Cost"]);
            for (to, cost) in &rows {
                table.add_row(vec![to.clone(), cost.to_string()]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn run_info(store: &GraphStore, format: &OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&GraphDocument::from_store(store))?);
        }
        OutputFormat::Csv => {
            println!("name,x,y,h,out_degree");
            for v in store.vertices() {
                println!(
                    "{},{},{},{},{}",
                    format_csv_value(&v.name),
                    v.x,
                    v.y,
                    v.heuristic,
                    store.neighbors(v.id).len()
                );
            }
        }
        OutputFormat::Table => {
            println!("Vertices: {}", store.vertex_count());
            println!("Edges:    {}", store.edge_count());

            let mut table = Table::new();
            table.set_header(vec!["Name", "Position", "h", "Out-degree"]);
            for v in store.vertices() {
                table.add_row(vec![
                    v.name.clone(),
                    format!("({}, {})", v.x, v.y),
                    v.heuristic.to_string(),
                    store.neighbors(v.id).len().to_string(),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
