use crate::graph::{GraphBuilder, UndirectedGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates an Erdős–Rényi style random graph on nodes `0..n`
///
/// Every unordered pair is connected with probability `p`, with an integer
/// weight drawn from `1..=max_weight`. The same `seed` always yields the same
/// graph.
pub fn generate_random(
    n: usize,
    p: f64,
    max_weight: u32,
    seed: u64,
) -> Result<UndirectedGraph<usize, u32>> {
    assert!((0.0..=1.0).contains(&p), "p must be a probability");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new().nodes(0..n);

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                builder = builder.edge(u, v, rng.gen_range(1..=max_weight));
            }
        }
    }

    builder.build()
}

/// Generates a connected random graph on nodes `0..n`
///
/// A random spanning chain guarantees connectivity; `extra_edges` further
/// random pairs are added on top (duplicates collapse into one edge).
pub fn generate_connected(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
    seed: u64,
) -> Result<UndirectedGraph<usize, u32>> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    let mut builder = GraphBuilder::new().nodes(0..n);
    for pair in order.windows(2) {
        builder = builder.edge(pair[0], pair[1], rng.gen_range(1..=max_weight));
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                builder = builder.edge(u, v, rng.gen_range(1..=max_weight));
            }
        }
    }

    builder.build()
}

/// Generates a random geometric graph in the unit square
///
/// Points closer than `r` are connected, weighted by their Euclidean
/// distance. Returns the graph together with the point of each node.
pub fn generate_geometric(
    n: usize,
    r: f64,
    seed: u64,
) -> Result<(UndirectedGraph<usize, OrderedFloat<f64>>, Vec<(f64, f64)>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let mut builder = GraphBuilder::new().nodes(0..n);
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = euclidean(points[i], points[j]);
            if dist <= r {
                builder = builder.edge(i, j, OrderedFloat(dist));
            }
        }
    }

    Ok((builder.build()?, points))
}

/// Straight-line distance between two points
pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    f64::sqrt(dx * dx + dy * dy)
}
