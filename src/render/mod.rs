//! Raster rendering of a network's current state.

mod font;
mod geometry;
mod options;

pub use geometry::{LayerGeometry, PADDING_FACTOR};
pub use options::{colors, VisualOptions};

use image::{Rgb, RgbImage};
use log::debug;

use crate::error::NetworkError;
use crate::network::{Network, Role};

/// Draws a borrowed network as a 2-D diagram: one column per layer, nodes
/// top to bottom in array order, every non-zero edge as a straight line
/// between row centers of adjacent columns.
///
/// Geometry is derived in `new` from the canvas and the network's current
/// topology; build a fresh visualizer after resizing the canvas.
pub struct Visualizer<'a> {
    network: &'a Network,
    options: VisualOptions,
    column_width: f32,
    geometry: Vec<LayerGeometry>,
}

impl<'a> Visualizer<'a> {
    pub fn new(
        network: &'a Network,
        options: VisualOptions,
    ) -> Result<Visualizer<'a>, NetworkError> {
        let geometry = geometry::layout(network, options.width, options.height)?;
        let column_width = options.width as f32 / network.layers().len() as f32;

        Ok(Visualizer {
            network,
            options,
            column_width,
            geometry,
        })
    }

    /// Produces a full image of the canvas size. Back to front: background,
    /// edges, nodes, then value labels when enabled.
    pub fn draw(&self) -> RgbImage {
        debug!(
            "drawing {} layers onto {}x{}",
            self.network.layers().len(),
            self.options.width,
            self.options.height
        );

        let mut img = RgbImage::from_pixel(
            self.options.width,
            self.options.height,
            self.options.background,
        );

        self.draw_edges(&mut img);
        self.draw_nodes(&mut img);
        if self.options.show_values {
            self.draw_values(&mut img);
        }

        img
    }

    fn draw_edges(&self, img: &mut RgbImage) {
        for l in 0..self.network.layers().len() - 1 {
            let x_cur = (l as f32 + 0.5) * self.column_width;
            let x_next = (l as f32 + 1.5) * self.column_width;

            for (row, node) in self.network.layers()[l].nodes.iter().enumerate() {
                let y_cur = (row as f32 + 0.5) * self.geometry[l].row_height;

                // Outgoing edges are stored in destination-row order.
                for (next_row, &id) in node.outgoing.iter().enumerate() {
                    let edge = self.network.edge(id);
                    if edge.weight == 0. {
                        continue;
                    }

                    let y_next = (next_row as f32 + 0.5) * self.geometry[l + 1].row_height;
                    let thickness = ((edge.weight.abs() * 10.).round() as u32).max(1);
                    draw_line(
                        img,
                        x_cur,
                        y_cur,
                        x_next,
                        y_next,
                        thickness,
                        self.options.edge_color,
                    );
                }
            }
        }
    }

    fn draw_nodes(&self, img: &mut RgbImage) {
        for (l, layer) in self.network.layers().iter().enumerate() {
            let geo = &self.geometry[l];
            let fill = match layer.role {
                Role::Input => self.options.input_color,
                Role::Hidden => self.options.hidden_color,
                Role::Output => self.options.output_color,
            };

            let x = l as f32 * self.column_width + geo.padding_horizontal;
            for row in 0..layer.size() {
                let y = row as f32 * geo.row_height + geo.padding_vertical;
                fill_circle(img, x, y, geo.node_len, fill);
            }
        }
    }

    fn draw_values(&self, img: &mut RgbImage) {
        for (l, layer) in self.network.layers().iter().enumerate() {
            let x_center = (l as f32 + 0.5) * self.column_width;

            for (row, node) in layer.nodes.iter().enumerate() {
                let y_center = (row as f32 + 0.5) * self.geometry[l].row_height;
                let label = format_value(node.value);
                let x = x_center as i32 - (font::text_width(&label) / 2) as i32;
                let y = y_center as i32 - (font::GLYPH_HEIGHT / 2) as i32;
                font::draw_text(img, &label, x, y, self.options.value_color);
            }
        }
    }
}

/// Rounds to 3 decimals with ties away from zero and prints the shortest
/// decimal form: "0.124", "-0.124", "2".
fn format_value(value: f64) -> String {
    let rounded = (value * 1000.).round() / 1000.;
    if rounded == 0. {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Bresenham over the segment's center line, stamping a disc at each step to
/// get the stroke thickness.
fn draw_line(img: &mut RgbImage, x1: f32, y1: f32, x2: f32, y2: f32, thickness: u32, color: Rgb<u8>) {
    let mut x = x1.round() as i32;
    let mut y = y1.round() as i32;
    let x_end = x2.round() as i32;
    let y_end = y2.round() as i32;

    let dx = (x_end - x).abs();
    let dy = (y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx - dy;
    let radius = (thickness / 2) as i32;

    loop {
        stamp(img, x, y, radius, color);

        if x == x_end && y == y_end {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

fn stamp(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let px = cx + dx;
            let py = cy + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Fills the circle inscribed in the square at (left, top) with the given
/// side length. Pixels outside the canvas are dropped.
fn fill_circle(img: &mut RgbImage, left: f32, top: f32, diameter: f32, color: Rgb<u8>) {
    let cx = left + diameter / 2.;
    let cy = top + diameter / 2.;
    let r = diameter / 2.;

    let x0 = (left.floor() as i32).max(0);
    let y0 = (top.floor() as i32).max(0);
    let x1 = ((left + diameter).ceil() as i32).min(img.width() as i32 - 1);
    let y1 = ((top + diameter).ceil() as i32).min(img.height() as i32 - 1);

    for py in y0..=y1 {
        for px in x0..=x1 {
            let fx = px as f32 + 0.5 - cx;
            let fy = py as f32 + 0.5 - cy;
            if fx * fx + fy * fy <= r * r {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::Activations;

    fn options_300() -> VisualOptions {
        VisualOptions {
            width: 300,
            height: 300,
            background: colors::WHITE,
            ..VisualOptions::default()
        }
    }

    fn three_layer_network() -> Network {
        Network::new(2, 2, vec![2], Activations::Identity).unwrap()
    }

    #[test]
    fn canvas_has_requested_size_and_background() {
        let network = three_layer_network();
        let img = Visualizer::new(&network, options_300()).unwrap().draw();

        assert_eq!(img.width(), 300);
        assert_eq!(img.height(), 300);
        assert_eq!(img.get_pixel(0, 0).0, colors::WHITE.0);
    }

    #[test]
    fn nodes_are_filled_with_their_role_color() {
        // 3 layers of 2 on a 300x300 canvas: column width 100, row height
        // 150, so the first node of layer l is centered at ((l+0.5)*100, 75).
        let network = three_layer_network();
        let options = options_300();
        let img = Visualizer::new(&network, options.clone()).unwrap().draw();

        assert_eq!(img.get_pixel(50, 75).0, options.input_color.0);
        assert_eq!(img.get_pixel(150, 75).0, options.hidden_color.0);
        assert_eq!(img.get_pixel(250, 75).0, options.output_color.0);
    }

    #[test]
    fn zero_weight_edges_are_never_stroked() {
        let mut network = three_layer_network();
        network.override_weights(0.);

        let img = Visualizer::new(&network, options_300()).unwrap().draw();

        assert!(!img.pixels().any(|p| p.0 == colors::BLACK.0));
    }

    #[test]
    fn nonzero_weight_edges_are_stroked() {
        let mut network = three_layer_network();
        network.override_weights(0.5);

        let img = Visualizer::new(&network, options_300()).unwrap().draw();

        assert!(img.pixels().any(|p| p.0 == colors::BLACK.0));
    }

    #[test]
    fn values_are_drawn_only_when_enabled() {
        let network = three_layer_network();
        let marker = image::Rgb([1, 2, 3]);

        let mut options = options_300();
        options.value_color = marker;
        options.show_values = false;
        let without = Visualizer::new(&network, options.clone()).unwrap().draw();
        assert!(!without.pixels().any(|p| p.0 == marker.0));

        options.show_values = true;
        let with = Visualizer::new(&network, options).unwrap().draw();
        assert!(with.pixels().any(|p| p.0 == marker.0));
    }

    #[test]
    fn degenerate_canvas_is_rejected_up_front() {
        let network = three_layer_network();
        let options = VisualOptions {
            width: 0,
            ..VisualOptions::default()
        };

        assert!(Visualizer::new(&network, options).is_err());
    }

    #[test]
    fn labels_round_three_decimals_away_from_zero() {
        assert_eq!(format_value(0.1235), "0.124");
        assert_eq!(format_value(-0.1235), "-0.124");
        assert_eq!(format_value(2.), "2");
        assert_eq!(format_value(0.), "0");
        assert_eq!(format_value(-0.0001), "0");
        assert_eq!(format_value(0.5004999), "0.5");
    }
}
