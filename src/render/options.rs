use image::Rgb;

/// Named colors used by the default palette.
pub mod colors {
    use image::Rgb;

    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const PALE_VIOLET_RED: Rgb<u8> = Rgb([219, 112, 147]);
    pub const STEEL_BLUE: Rgb<u8> = Rgb([70, 130, 180]);
    pub const PALE_GREEN: Rgb<u8> = Rgb([152, 251, 152]);
    pub const POWDER_BLUE: Rgb<u8> = Rgb([176, 224, 230]);
}

/// Rendering configuration, supplied by the caller and consumed by the
/// visualizer. The engine never produces or stores this.
#[derive(Debug, Clone)]
pub struct VisualOptions {
    pub width: u32,
    pub height: u32,
    /// Draw each node's current value at its center.
    pub show_values: bool,
    pub background: Rgb<u8>,
    pub value_color: Rgb<u8>,
    pub edge_color: Rgb<u8>,
    pub input_color: Rgb<u8>,
    pub hidden_color: Rgb<u8>,
    pub output_color: Rgb<u8>,
}

impl Default for VisualOptions {
    fn default() -> Self {
        VisualOptions {
            width: 800,
            height: 600,
            show_values: false,
            background: colors::POWDER_BLUE,
            value_color: colors::BLACK,
            edge_color: colors::BLACK,
            input_color: colors::PALE_VIOLET_RED,
            hidden_color: colors::STEEL_BLUE,
            output_color: colors::PALE_GREEN,
        }
    }
}
