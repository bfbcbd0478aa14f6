use serde::{Deserialize, Serialize};

/// Index of an edge in the network-wide arena.
pub type EdgeId = usize;

/// A weighted connection between two nodes in adjacent layers.
///
/// Stored once in the network arena and referenced by index from both
/// endpoints. The weight is fixed at construction; `carried` is rewritten by
/// the upstream node on every pass and read by the downstream node.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Edge {
    pub weight: f64,
    pub carried: f64,
}

impl Edge {
    pub fn new(weight: f64) -> Edge {
        Edge {
            weight,
            carried: 0.,
        }
    }
}
