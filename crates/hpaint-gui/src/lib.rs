//! Native window presenting the Hilbert curve animation using egui/eframe.
//!
//! The window owns the application state directly; eframe hands it back to
//! us on every frame, so no process-wide state is needed to route window
//! events. Curve threads paint into the shared surface while `update` copies
//! it to the screen.

use std::{error::Error, sync::Arc};

use anyhow::{Context, Result, anyhow};
use hilbertpaint::{
    Animation, AnimationOptions, PixelSurface,
    layout::{self, CLIENT_HEIGHT, CLIENT_WIDTH},
};
use log::info;

/// Texture upload and drawing of the surface.
pub mod present;
/// Centralized window and overlay constants.
pub mod theme;

use present::Presenter;

/// Canonical application name used across the GUI.
pub const APP_NAME: &str = "hpaint";

/// Launch configuration for the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuiOptions {
    /// Show the developer overlay (frame timing and curves still drawing).
    pub show_dev_overlay: bool,
}

/// Root eframe application.
pub struct ViewerApp {
    /// The running curves and the surface they share.
    animation: Animation,
    /// Texture mirror of the surface.
    presenter: Presenter,
    /// Whether completion has been logged.
    reported_finish: bool,
    /// Whether to show developer diagnostics overlay.
    show_dev_overlay: bool,
    /// Smoothed frame time in milliseconds (for dev overlay).
    frame_time_ms: Option<f32>,
    /// Last frame time used to compute deltas.
    last_time: Option<f64>,
}

impl ViewerApp {
    /// Prepare the surface, start every demo curve and register the texture.
    pub fn new(cc: &eframe::CreationContext<'_>, options: GuiOptions) -> Result<Self> {
        let layout = layout::demo_layout()?;
        let surface = Arc::new(
            PixelSurface::new(CLIENT_WIDTH, CLIENT_HEIGHT).context("allocating pixel surface")?,
        );
        layout.paint_backdrop(&surface);
        let presenter = Presenter::new(&cc.egui_ctx, &surface);
        let animation = Animation::launch(surface, &layout.curves, AnimationOptions::default())
            .context("starting curve runs")?;

        Ok(Self {
            animation,
            presenter,
            reported_finish: false,
            show_dev_overlay: options.show_dev_overlay,
            frame_time_ms: None,
            last_time: None,
        })
    }

    /// Smooth and store the latest frame time (ms) for dev overlay.
    fn update_frame_time(&mut self, now: f64) {
        if let Some(prev) = self.last_time {
            let ms = ((now - prev).max(0.0) * 1000.0) as f32;
            self.frame_time_ms = Some(match self.frame_time_ms {
                Some(smoothed) => smoothed * 0.85 + ms * 0.15,
                None => ms,
            });
        }
        self.last_time = Some(now);
    }

    /// Render a small overlay with frame time and the number of live curves.
    fn show_overlay(&self, ctx: &egui::Context) {
        let ms = self.frame_time_ms.unwrap_or(0.0);
        let fps = if ms > 0.0 { 1000.0 / ms } else { 0.0 };
        let screen_rect = ctx.viewport_rect();
        let pos = egui::pos2(
            screen_rect.max.x - theme::overlay::MARGIN,
            screen_rect.min.y + theme::overlay::MARGIN,
        );

        egui::Area::new(egui::Id::new("dev_overlay"))
            .order(egui::Order::Tooltip)
            .pivot(egui::Align2::RIGHT_TOP)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::overlay::BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, theme::overlay::BORDER))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(8, 6))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{ms:.1} ms  {fps:.1} fps  {} drawing",
                                self.animation.running()
                            ))
                            .color(theme::overlay::TEXT)
                            .size(theme::overlay::FONT_SIZE),
                        );
                    });
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sample completion before copying so the last strokes are presented.
        let finished = self.animation.is_finished();
        self.presenter.refresh(self.animation.surface());

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| self.presenter.paint(ui));

        if self.show_dev_overlay {
            self.update_frame_time(ctx.input(|i| i.time));
            self.show_overlay(ctx);
        }

        if !finished {
            ctx.request_repaint();
        } else if !self.reported_finish {
            self.reported_finish = true;
            info!("all {} curves finished", self.animation.len());
        }
    }
}

/// Build the app for eframe once the window and graphics context exist.
fn create_app(
    cc: &eframe::CreationContext<'_>,
    options: GuiOptions,
) -> std::result::Result<Box<dyn eframe::App>, Box<dyn Error + Send + Sync>> {
    Ok(Box::new(ViewerApp::new(cc, options)?))
}

/// Launch the native window with default options.
pub fn gui() -> Result<()> {
    gui_with_options(GuiOptions::default())
}

/// Open the window and block until the user closes it.
///
/// Failure to create the window or the application is returned before any
/// frame is presented.
pub fn gui_with_options(options: GuiOptions) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::window::DEFAULT_SIZE)
            .with_title(theme::window::TITLE),
        ..Default::default()
    };

    eframe::run_native(
        theme::window::TITLE,
        native_options,
        Box::new(move |cc| create_app(cc, options)),
    )
    .map_err(|e| anyhow!(e.to_string()))
    .context("failed to create the window")?;

    info!("{APP_NAME} window closed");
    Ok(())
}
