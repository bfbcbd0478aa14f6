use serde::{Deserialize, Serialize};

use super::node::{Node, Role};

/// An ordered, fixed-size collection of same-role nodes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Layer {
    pub role: Role,
    pub nodes: Vec<Node>,
}

impl Layer {
    pub fn new(role: Role, size: usize) -> Layer {
        let nodes = (0..size).map(|_| Node::new(role)).collect();
        Layer { role, nodes }
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}
