mod activation;
mod error;
pub mod network;
pub mod render;

pub use activation::Activations;
pub use error::NetworkError;
pub use network::{LayerSchema, Network, Role};
pub use render::{colors, VisualOptions, Visualizer};
