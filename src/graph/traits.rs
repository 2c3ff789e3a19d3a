use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Bounds every node identifier has to satisfy.
///
/// Identifiers are opaque labels: they only need to be comparable, hashable
/// and printable. `Ord` fixes the tie-break order of the frontier.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Bounds every edge weight has to satisfy.
///
/// Integer weights work directly; floating point weights go through
/// `ordered_float::OrderedFloat` to get a total order.
pub trait Weight: Copy + Ord + Zero + Debug + Display {
    /// Sum of two weights, `None` when it is not representable
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self.0 + other.0;
                    if sum.is_finite() {
                        Some(OrderedFloat(sum))
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Trait representing a read-only weighted graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes, in ascending order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the edges leaving a node
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}
