//! Layered graph construction and forward propagation.

mod edge;
mod layer;
mod node;

pub use edge::{Edge, EdgeId};
pub use layer::Layer;
pub use node::{Node, Role};

use log::{debug, info};
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::activation::Activations;
use crate::error::NetworkError;

pub type LayerSchema = Vec<usize>;

/// A fully-connected, multi-layer feed-forward network.
///
/// Topology (node counts and the edge set) is fixed after construction.
/// Propagation mutates node values and edge carried-values in place; weights
/// and biases are never updated, so repeated passes with a stable full-length
/// input converge to a fixed point. There is no learning here.
#[derive(Serialize, Deserialize, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    edges: Vec<Edge>,
    activation: Activations,
}

impl Network {
    /// Builds a network with weights drawn from the thread RNG.
    pub fn new(
        d_in: usize,
        d_out: usize,
        hidden: LayerSchema,
        activation: Activations,
    ) -> Result<Network, NetworkError> {
        Network::with_rng(d_in, d_out, hidden, activation, &mut thread_rng())
    }

    /// Builds a network with weights drawn from the given RNG, so topology
    /// and weights are reproducible under a seeded generator.
    ///
    /// Every edge weight is sampled uniformly from the 21 discrete values
    /// {-1.0, -0.9, ..., 0.9, 1.0}.
    pub fn with_rng<R: Rng>(
        d_in: usize,
        d_out: usize,
        hidden: LayerSchema,
        activation: Activations,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        if d_in < 1 {
            return Err(NetworkError::Config(
                "input layer size must be at least 1".to_string(),
            ));
        }

        if d_out < 1 {
            return Err(NetworkError::Config(
                "output layer size must be at least 1".to_string(),
            ));
        }

        if hidden.is_empty() {
            return Err(NetworkError::Config(
                "at least one hidden layer is required".to_string(),
            ));
        }

        if let Some(size) = hidden.iter().find(|s| **s < 1) {
            return Err(NetworkError::Config(format!(
                "hidden layer size must be at least 1, got {}",
                size
            )));
        }

        let mut layers = vec![Layer::new(Role::Input, d_in)];
        for size in hidden.iter() {
            layers.push(Layer::new(Role::Hidden, *size));
        }
        layers.push(Layer::new(Role::Output, d_out));

        let mut edges: Vec<Edge> = vec![];

        for l in 0..layers.len() - 1 {
            for j in 0..layers[l].size() {
                for k in 0..layers[l + 1].size() {
                    let weight = rng.gen_range(-10i32..=10) as f64 / 10.;
                    let id = edges.len();
                    edges.push(Edge::new(weight));
                    layers[l].nodes[j].outgoing.push(id);
                    layers[l + 1].nodes[k].incoming.push(id);
                }
            }
        }

        info!(
            "connected {} layers ({} nodes, {} edges)",
            layers.len(),
            layers.iter().map(|l| l.size()).sum::<usize>(),
            edges.len()
        );

        Ok(Network {
            layers,
            edges,
            activation,
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn activation(&self) -> Activations {
        self.activation
    }

    /// Current values of the output layer, in node order.
    pub fn output(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1]
            .nodes
            .iter()
            .map(|n| n.value)
            .collect()
    }

    /// Runs `epochs` forward passes, mutating node values and edge
    /// carried-values in place.
    ///
    /// Only the first `min(input.len(), input layer size)` input nodes are
    /// assigned; any remaining input nodes keep their previous value. A
    /// mismatched input length is a positional-truncation policy, not an
    /// error.
    pub fn propagate(&mut self, input: &[f64], epochs: usize) {
        for epoch in 0..epochs {
            debug!("epoch {}/{}", epoch + 1, epochs);

            let take = input.len().min(self.layers[0].size());
            for i in 0..take {
                self.layers[0].nodes[i].value = input[i];
            }

            // Input nodes emit their value unchanged; no activation.
            for n in 0..self.layers[0].size() {
                let value = self.layers[0].nodes[n].value;
                for &id in &self.layers[0].nodes[n].outgoing {
                    self.edges[id].carried = value;
                }
            }

            for l in 1..self.layers.len() {
                for n in 0..self.layers[l].size() {
                    let mut sum = self.layers[l].nodes[n].bias.unwrap_or(0.);
                    for &id in &self.layers[l].nodes[n].incoming {
                        let edge = &self.edges[id];
                        sum += edge.carried * edge.weight;
                    }

                    let value = self.activation.apply(sum);
                    self.layers[l].nodes[n].value = value;

                    for &id in &self.layers[l].nodes[n].outgoing {
                        self.edges[id].carried = value;
                    }
                }
            }
        }
    }

    pub fn dump(&self) -> Result<Vec<u8>, NetworkError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn load(serialized: &[u8]) -> Result<Network, NetworkError> {
        Ok(bincode::deserialize(serialized)?)
    }

    pub fn dump_json(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn load_json(serialized: &str) -> Result<Network, NetworkError> {
        Ok(serde_json::from_str(serialized)?)
    }

    #[cfg(test)]
    pub(crate) fn override_weights(&mut self, weight: f64) {
        for edge in self.edges.iter_mut() {
            edge.weight = weight;
        }
    }
}
