use dijkstra_viz::graph::reference::{parse_label, reference_graph};
use dijkstra_viz::graph::Graph;
use dijkstra_viz::{Dijkstra, DistanceMatrix, ShortestPath, ShortestPathFinder};
use std::env;

// Usage: path_query [START END]
//
// With two labels, prints the shortest path between them on the reference
// graph. Without arguments, prints the full distance table.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = reference_graph()?;
    let dijkstra = Dijkstra::new();
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [start, end] => {
            let start = parse_label(start)?;
            let end = parse_label(end)?;
            let path: ShortestPath<char, u32> = dijkstra.find(&graph, &start, &end)?;
            println!("Shortest path: {}", path);
        }
        [] => {
            let matrix: DistanceMatrix<char, u32> = DistanceMatrix::compute(&dijkstra, &graph)?;
            println!(
                "Reference graph: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );

            print!("{:>4}", "");
            for node in matrix.nodes() {
                print!("{:>4}", node);
            }
            println!();

            for (source, row) in matrix.rows() {
                print!("{:>4}", source);
                for distance in row {
                    match distance {
                        Some(d) => print!("{:>4}", d),
                        None => print!("{:>4}", "-"),
                    }
                }
                println!();
            }
        }
        _ => return Err("usage: path_query [START END]".into()),
    }

    Ok(())
}
