use waypoint::{GraphStore, SearchEngine};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Waypoint Graph Search v{}", waypoint::version());
    println!("==========================================");
    println!();

    let store = GraphStore::sample();
    println!(
        "Sample graph: {} vertices, {} directed edges",
        store.vertex_count(),
        store.edge_count()
    );

    let engine = SearchEngine::new(&store);
    let outcomes = engine.compare("A", "Goal")?;

    println!("\nSearching A -> Goal\n");
    for outcome in &outcomes {
        let path = if outcome.found {
            outcome.path.join(" -> ")
        } else {
            "(not found)".to_string()
        };
        println!("{:<14} cost {:>5}  explored {:>2}  {}", outcome.strategy.name(), outcome.path_cost, outcome.nodes_explored, path);
        println!("{:<14} visited {}", "", outcome.explored_order.join(", "));
    }

    Ok(())
}
