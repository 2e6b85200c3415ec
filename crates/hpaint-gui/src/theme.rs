//! Window and overlay constants for the viewer.

use egui::Color32;

/// Top-level window settings.
pub mod window {
    use hilbertpaint::layout::{CLIENT_HEIGHT, CLIENT_WIDTH};

    /// Window title.
    pub const TITLE: &str = "HilbertCurve";
    /// Initial client area size, matching the pixel surface.
    pub const DEFAULT_SIZE: [f32; 2] = [CLIENT_WIDTH as f32, CLIENT_HEIGHT as f32];
}

/// Developer overlay styling.
pub mod overlay {
    use super::Color32;

    /// Overlay panel fill.
    pub const BACKGROUND: Color32 = Color32::from_rgba_premultiplied(0x0b, 0x0f, 0x22, 0xe0);
    /// Overlay border.
    pub const BORDER: Color32 = Color32::from_rgb(0x2a, 0x2f, 0x55);
    /// Overlay text.
    pub const TEXT: Color32 = Color32::from_rgb(0xe6, 0xed, 0xff);
    /// Text size.
    pub const FONT_SIZE: f32 = 13.0;
    /// Distance from the window corner.
    pub const MARGIN: f32 = 12.0;
}
