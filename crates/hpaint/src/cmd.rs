//! Command handlers for the `hpaint` CLI.
//!
//! These run the demo scene without a window and return plain data for
//! `main` to write out.

use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result, anyhow};
use hilbertpaint::{
    Animation, AnimationOptions, CurveConfig, Direction, PixelSurface, Step, curve,
    layout::{self, CLIENT_HEIGHT, CLIENT_WIDTH},
};
use image::RgbaImage;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

/// Convert a surface into an opaque RGBA image of the same size.
pub fn surface_image(surface: &PixelSurface) -> Result<RgbaImage> {
    let mut rgba = Vec::new();
    surface.copy_rgba_into(&mut rgba);
    RgbaImage::from_raw(surface.width(), surface.height(), rgba)
        .ok_or_else(|| anyhow!("surface buffer does not match its dimensions"))
}

/// Paint the whole demo scene as fast as possible and return the result.
///
/// Every curve thread is joined before the surface is read, so the image is
/// the completed drawing. With a seed the output is reproducible.
pub fn render(seed: Option<u64>) -> Result<RgbaImage> {
    let layout = layout::demo_layout()?;
    let surface = Arc::new(PixelSurface::new(CLIENT_WIDTH, CLIENT_HEIGHT)?);
    layout.paint_backdrop(&surface);

    let animation = Animation::launch(
        Arc::clone(&surface),
        &layout.curves,
        AnimationOptions {
            step_delay: Duration::ZERO,
            seed,
        },
    )
    .context("starting curve runs")?;
    let ends = animation.join();
    info!("rendered {} curves, final cursors {:?}", ends.len(), ends);

    surface_image(&surface)
}

/// Write the trace of one demo-sized curve of `order` at the origin to `out`,
/// one [`format_step`] line per step, as the walk produces them.
///
/// Writing stops at the first I/O error, which is returned.
pub fn write_steps<W: Write>(order: u32, seed: u64, out: &mut W) -> Result<u64> {
    let config = CurveConfig::new(order, (0, 0), layout::SEGMENT)?;
    let mut written = 0u64;
    let mut failure: Option<io::Error> = None;
    curve::walk(&config, &mut StdRng::seed_from_u64(seed), |step| {
        if failure.is_some() {
            return;
        }
        match writeln!(out, "{}", format_step(step)) {
            Ok(()) => written += 1,
            Err(e) => failure = Some(e),
        }
    });
    if let Some(e) = failure {
        return Err(e).context("writing step trace");
    }
    out.flush().context("flushing step trace")?;
    Ok(written)
}

/// One line of `steps` output.
pub fn format_step(step: &Step) -> String {
    let heading = match step.direction {
        Direction::Right => "right",
        Direction::Up => "up",
        Direction::Left => "left",
        Direction::Down => "down",
    };
    let r = step.rect;
    format!(
        "{:>5} {:<5} cell=({},{}) rect=({},{})-({},{}) color=#{:06x}",
        step.index,
        heading,
        step.cell.x,
        step.cell.y,
        r.min_x,
        r.min_y,
        r.max_x,
        r.max_y,
        step.color.pack() & 0x00ff_ffff
    )
}

#[cfg(test)]
mod tests {
    use hilbertpaint::{Color, Rect};

    use super::*;

    #[test]
    fn surface_image_keeps_pixels() -> Result<()> {
        let surface = PixelSurface::new(3, 2)?;
        surface.fill(Rect::new(2, 1, 3, 2), Color::rgb(0.0, 0.0, 1.0));
        let img = surface_image(&surface)?;
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [0, 0, 0xff, 0xff]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0xff]);
        Ok(())
    }

    /// Collect the trace the same way `write_steps` walks it.
    fn collect_steps(order: u32, seed: u64) -> Result<Vec<Step>> {
        let config = CurveConfig::new(order, (0, 0), layout::SEGMENT)?;
        let mut out = Vec::new();
        curve::walk(&config, &mut StdRng::seed_from_u64(seed), |s| out.push(*s));
        Ok(out)
    }

    /// Writer that fails after accepting `left` bytes.
    struct FailingWriter {
        left: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(self.left);
            self.left -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_steps_order_one() -> Result<()> {
        let mut out = Vec::new();
        assert_eq!(write_steps(1, 0, &mut out)?, 3);
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("    0 up    cell=(0,0) rect=(0,0)-(4,20)"));

        let trace = collect_steps(1, 0)?;
        assert_eq!(trace[0].rect, Rect::new(0, 0, 4, 20));
        let expected: Vec<String> = trace.iter().map(format_step).collect();
        assert_eq!(lines, expected);
        Ok(())
    }

    #[test]
    fn write_steps_streams_without_buffering_the_trace() -> Result<()> {
        // Order 8 has 65535 steps; a sink keeps nothing.
        let written = write_steps(8, 3, &mut io::sink())?;
        assert_eq!(written, 4u64.pow(8) - 1);
        Ok(())
    }

    #[test]
    fn write_steps_stops_at_the_first_write_error() {
        let mut out = FailingWriter { left: 100 };
        let err = write_steps(4, 0, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("closed"));
    }

    #[test]
    fn write_steps_rejects_deep_orders() {
        assert!(write_steps(hilbertpaint::curve::MAX_ORDER + 1, 0, &mut io::sink()).is_err());
    }
}
