use crate::error::NetworkError;
use crate::network::Network;

/// Fraction of the binding dimension reserved as padding on each side.
pub const PADDING_FACTOR: f32 = 0.2;

/// Derived sizing for one layer column. Recomputed per render, never stored
/// beyond the visualizer that asked for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerGeometry {
    pub row_height: f32,
    pub node_len: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
}

impl LayerGeometry {
    /// Whichever of row height and column width binds gets the 20% padding;
    /// the node fills the rest and is centered in the other dimension. Keeps
    /// nodes circular at any canvas aspect ratio.
    fn compute(height: f32, column_width: f32, node_count: usize) -> LayerGeometry {
        let row_height = height / node_count as f32;

        if row_height < column_width {
            let padding_vertical = row_height * PADDING_FACTOR;
            let node_len = row_height - padding_vertical * 2.;
            let padding_horizontal = (column_width - node_len) / 2.;
            LayerGeometry {
                row_height,
                node_len,
                padding_vertical,
                padding_horizontal,
            }
        } else {
            let padding_horizontal = column_width * PADDING_FACTOR;
            let node_len = column_width - padding_horizontal * 2.;
            let padding_vertical = (row_height - node_len) / 2.;
            LayerGeometry {
                row_height,
                node_len,
                padding_vertical,
                padding_horizontal,
            }
        }
    }
}

/// Computes per-layer geometry for the given canvas, failing fast on
/// dimensions that would make layout meaningless.
pub fn layout(
    network: &Network,
    width: u32,
    height: u32,
) -> Result<Vec<LayerGeometry>, NetworkError> {
    if width < 1 || height < 1 {
        return Err(NetworkError::Config(format!(
            "canvas dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    if network.layers().iter().any(|l| l.size() < 1) {
        return Err(NetworkError::Config(
            "cannot lay out a layer with no nodes".to_string(),
        ));
    }

    let column_width = width as f32 / network.layers().len() as f32;

    Ok(network
        .layers()
        .iter()
        .map(|layer| LayerGeometry::compute(height as f32, column_width, layer.size()))
        .collect())
}
