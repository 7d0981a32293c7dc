use path_score::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use path_score::graph::generators::{demo_candidates, demo_graph};
use path_score::graph::{DirectedGraph, Graph};
use path_score::{format_score, PathScorer};
use std::env;
use std::process::ExitCode;

fn parse_vertex(arg: Option<String>, default: usize) -> Result<usize, String> {
    match arg {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| format!("not a vertex id: {}", raw)),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let source = parse_vertex(args.next(), 0)?;
    let target = parse_vertex(args.next(), 9)?;

    let graph = demo_graph();
    log::debug!("demo graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;
    let path = <Dijkstra as ShortestPathAlgorithm<u32, DirectedGraph<u32>>>::get_path(&dijkstra, &result, target)?;

    println!("Shortest Path: {}", path);
    match result.distance(target)? {
        Some(distance) => println!("Distance: {}", distance),
        None => println!("Distance: unreachable"),
    }

    let scorer = PathScorer::new(path, graph.vertex_count());
    println!("Leaderboard:");
    for score in scorer.rank(&demo_candidates())? {
        println!("{}", format_score(score));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
