use waypoint::{AlgoError, GraphError, GraphStore, SearchEngine, SearchError, Strategy};

#[test]
fn test_uniform_cost_and_astar_on_sample_graph() {
    let store = GraphStore::sample();
    let engine = SearchEngine::new(&store);

    let ucs = engine.run(Strategy::UniformCost, "A", "Goal").unwrap();
    let astar = engine.run(Strategy::AStar, "A", "Goal").unwrap();

    assert_eq!(ucs.path_cost, 8.0);
    assert_eq!(astar.path_cost, 8.0);
    assert!(astar.nodes_explored <= ucs.nodes_explored);
    assert_eq!(ucs.nodes_explored, 8);
    assert_eq!(astar.nodes_explored, 5);
}

#[test]
fn test_every_strategy_reaches_goal() {
    let store = GraphStore::sample();
    let engine = SearchEngine::new(&store);

    let outcomes = engine.compare("A", "Goal").unwrap();
    assert_eq!(outcomes.len(), 5);

    for outcome in &outcomes {
        assert!(outcome.found, "{} did not reach Goal", outcome.strategy);
        assert_eq!(outcome.path.first().map(String::as_str), Some("A"));
        assert_eq!(outcome.path.last().map(String::as_str), Some("Goal"));
        assert!(outcome.explored_order.iter().any(|v| v == "Goal"));
        assert_eq!(outcome.explored_order.first().map(String::as_str), Some("A"));
    }

    let costs: Vec<f64> = outcomes.iter().map(|o| o.path_cost).collect();
    // breadth-first, depth-first, uniform-cost, a-star, greedy
    assert_eq!(costs, vec![8.0, 11.0, 8.0, 8.0, 12.0]);
}

#[test]
fn test_goal_behind_one_way_edge() {
    let mut store = GraphStore::sample();
    let goal = store.resolve("Goal").unwrap();
    let island = store.add_vertex("Island", 0.0).unwrap();
    // Island can reach the graph but nothing reaches Island
    store.add_edge(island, goal, 1.0).unwrap();

    let engine = SearchEngine::new(&store);
    for outcome in engine.compare("A", "Island").unwrap() {
        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.path_cost, 0.0);
        assert_eq!(outcome.nodes_explored, 8, "{} should exhaust the reachable part", outcome.strategy);
    }

    let back = engine.run(Strategy::BreadthFirst, "Island", "A").unwrap();
    assert!(back.found);
    assert_eq!(back.path, vec!["Island", "Goal", "E", "B", "A"]);
}

#[test]
fn test_removed_edges_change_the_route() {
    let mut store = GraphStore::sample();
    let b = store.resolve("B").unwrap();
    let e = store.resolve("E").unwrap();
    store.remove_edge(b, e).unwrap();
    store.remove_edge(e, b).unwrap();

    let engine = SearchEngine::new(&store);
    let outcome = engine.run(Strategy::UniformCost, "A", "Goal").unwrap();
    assert_eq!(outcome.path_cost, 8.0);
    assert_eq!(outcome.path, vec!["A", "B", "D", "E", "Goal"]);
}

#[test]
fn test_caller_errors() {
    let store = GraphStore::sample();
    let engine = SearchEngine::new(&store);

    match engine.run_named("hill-climbing", "A", "Goal") {
        Err(AlgoError::Search(SearchError::UnknownStrategy(s))) => assert_eq!(s, "hill-climbing"),
        other => panic!("expected unknown strategy, got {:?}", other),
    }

    match engine.run(Strategy::Greedy, "Z", "Goal") {
        Err(AlgoError::Graph(GraphError::VertexNameNotFound(name))) => assert_eq!(name, "Z"),
        other => panic!("expected unknown vertex, got {:?}", other),
    }
}

#[test]
fn test_json_shape_of_outcomes() {
    let store = GraphStore::sample();
    let engine = SearchEngine::new(&store);
    let outcome = engine.run(Strategy::AStar, "A", "Goal").unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["strategy"], "a-star");
    assert_eq!(json["found"], true);
    assert_eq!(json["path_cost"], 8.0);
    assert_eq!(json["explored_order"].as_array().unwrap().len(), 5);
}
