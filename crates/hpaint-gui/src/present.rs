//! Copies the pixel surface into a GPU texture and draws it.

use egui::{ColorImage, TextureHandle, TextureOptions};
use hilbertpaint::PixelSurface;

/// Name under which the surface texture is registered.
const TEXTURE_NAME: &str = "pixel-surface";

/// Owns the texture mirroring a [`PixelSurface`] and its staging buffer.
pub struct Presenter {
    /// Texture holding the most recent copy of the surface.
    texture: TextureHandle,
    /// Reusable RGBA staging bytes.
    rgba: Vec<u8>,
    /// Surface size as `[width, height]`.
    size: [usize; 2],
}

impl Presenter {
    /// Register a texture sized to `surface` and upload its current contents.
    pub fn new(ctx: &egui::Context, surface: &PixelSurface) -> Self {
        let size = [surface.width() as usize, surface.height() as usize];
        let mut rgba = Vec::new();
        surface.copy_rgba_into(&mut rgba);
        let texture = ctx.load_texture(
            TEXTURE_NAME,
            ColorImage::from_rgba_unmultiplied(size, &rgba),
            TextureOptions::NEAREST,
        );
        Self {
            texture,
            rgba,
            size,
        }
    }

    /// Re-upload the surface. Curve threads may still be writing; whatever
    /// is in the buffer at copy time is what gets shown.
    pub fn refresh(&mut self, surface: &PixelSurface) {
        surface.copy_rgba_into(&mut self.rgba);
        self.texture.set(
            ColorImage::from_rgba_unmultiplied(self.size, &self.rgba),
            TextureOptions::NEAREST,
        );
    }

    /// Stretch the texture over the whole of `ui`'s area.
    pub fn paint(&self, ui: &egui::Ui) {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter()
            .image(self.texture.id(), ui.max_rect(), uv, egui::Color32::WHITE);
    }
}
