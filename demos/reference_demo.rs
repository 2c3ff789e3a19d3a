use colored::*;
use dijkstra_viz::graph::reference::{position, reference_graph};
use dijkstra_viz::graph::Graph;
use dijkstra_viz::{Dijkstra, Error, ShortestPath, ShortestPathFinder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = reference_graph()?;
    let dijkstra = Dijkstra::new();

    println!("{}", "=== Dijkstra on the reference graph ===".bright_cyan().bold());
    println!(
        "{} nodes, {} edges",
        graph.node_count().to_string().yellow(),
        graph.edge_count().to_string().yellow()
    );

    for (from, to, weight) in graph.edges() {
        println!("  {} -- {}  weight {}", from, to, weight.to_string().bright_black());
    }

    let nodes: Vec<char> = graph.nodes().copied().collect();
    println!();
    for start in &nodes {
        for end in &nodes {
            if start >= end {
                continue;
            }
            let path: ShortestPath<char, u32> = dijkstra.find(&graph, start, end)?;
            let hops: Vec<String> = path
                .nodes
                .iter()
                .map(|node| match position(*node) {
                    Some((x, y)) => format!("{}({},{})", node, x, y),
                    None => node.to_string(),
                })
                .collect();
            println!(
                "{} -> {}: {} {}",
                start.to_string().green().bold(),
                end.to_string().green().bold(),
                hops.join(" -> ").white(),
                format!("[{}]", path.distance).red().bold()
            );
        }
    }

    // Labels outside the graph are rejected
    let rejected: Result<ShortestPath<char, u32>, Error> = dijkstra.find(&graph, &'X', &'A');
    match rejected {
        Err(Error::InvalidNode(label)) => {
            println!("\n{} {}", "Rejected label:".magenta(), label);
        }
        other => println!("\nUnexpected result: {:?}", other),
    }

    Ok(())
}
