//! The fixed demo scene: five curves of falling order and a frame.
//!
//! The curves are placed at accumulating offsets so that none of them
//! overlap. The largest curve gets a green border drawn before any curve
//! starts.

use std::time::Duration;

use crate::{
    color::Color,
    curve::CurveConfig,
    error::Result,
    surface::{PixelSurface, Rect},
};

/// Pause after every painted segment.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(20);

/// Client area width of the demo window, and of its surface.
pub const CLIENT_WIDTH: u32 = 1080;
/// Client area height of the demo window, and of its surface.
pub const CLIENT_HEIGHT: u32 = 720;

/// Surface colour before any curve is drawn.
pub const BACKGROUND: Color = Color::rgb(0.54, 0.52, 0.47);

/// Segment size shared by every demo curve.
pub const SEGMENT: (i32, i32) = (20, 4);
/// Pixel offset of the first curve.
pub const BASE_OFFSET: (i32, i32) = (30, 30);
/// Gap left between neighbouring curves.
pub const CURVE_GAP: i32 = 50;
/// Vertical advance between the two smallest curves.
pub const SMALL_ROW_ADVANCE: i32 = 100;

/// Border colour around the largest curve.
pub const FRAME_COLOR: Color = Color::rgb(0.4, 0.8, 0.0);
/// Border thickness.
pub const FRAME_WIDTH: u32 = 5;
/// Distance from the border's outer edge to the curve origin.
pub const FRAME_INSET: i32 = 10;

/// Where the next curve's origin goes once a curve has been placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Right by the placed curve's span plus [`CURVE_GAP`].
    Across,
    /// Down by the placed curve's span plus [`CURVE_GAP`].
    Below,
    /// Down by [`SMALL_ROW_ADVANCE`].
    Row,
}

/// Demo curves in launch order, each with the move that follows it.
pub const PLACEMENTS: [(u32, Advance); 5] = [
    (5, Advance::Across),
    (4, Advance::Below),
    (3, Advance::Across),
    (2, Advance::Row),
    (1, Advance::Row),
];

/// A bordered rectangle drawn once before the curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameDecoration {
    /// Outer bounds of the border.
    pub rect: Rect,
    /// Border colour.
    pub color: Color,
    /// Border thickness in pixels.
    pub width: u32,
}

/// A complete scene: backdrop plus the curves to animate over it.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Colour the surface is cleared to.
    pub background: Color,
    /// Optional border painted on top of the background.
    pub frame: Option<FrameDecoration>,
    /// Curves in launch order.
    pub curves: Vec<CurveConfig>,
}

impl Layout {
    /// Clear `surface` and draw the frame. Curves are not touched.
    pub fn paint_backdrop(&self, surface: &PixelSurface) {
        surface.clear(self.background);
        if let Some(frame) = self.frame {
            surface.frame(frame.rect, frame.color, frame.width);
        }
    }
}

/// Pixel span of a curve grid along one axis.
const fn span(order: u32) -> i32 {
    (1 << order) * SEGMENT.0
}

/// Lay curves out from [`BASE_OFFSET`], moving the origin after each one as
/// its slot says.
fn place(placements: &[(u32, Advance)]) -> Result<Vec<CurveConfig>> {
    let (mut x, mut y) = BASE_OFFSET;
    let mut curves = Vec::with_capacity(placements.len());
    for &(order, advance) in placements {
        curves.push(CurveConfig::new(order, (x, y), SEGMENT)?);
        match advance {
            Advance::Across => x += span(order) + CURVE_GAP,
            Advance::Below => y += span(order) + CURVE_GAP,
            Advance::Row => y += SMALL_ROW_ADVANCE,
        }
    }
    Ok(curves)
}

/// Build the demo scene.
///
/// The order-5 curve sits top left inside its frame. The order-4 curve goes to
/// its right. Below that come the order-3 curve, then the order-2 curve to its
/// right, then the order-1 curve under the order-2 curve.
pub fn demo_layout() -> Result<Layout> {
    let curves = place(&PLACEMENTS)?;

    let first = PLACEMENTS[0].0;
    let frame_min = (BASE_OFFSET.0 - FRAME_INSET, BASE_OFFSET.1 - FRAME_INSET);
    let frame = FrameDecoration {
        rect: Rect::new(
            frame_min.0,
            frame_min.1,
            frame_min.0 + span(first),
            frame_min.1 + span(first),
        ),
        color: FRAME_COLOR,
        width: FRAME_WIDTH,
    };

    Ok(Layout {
        background: BACKGROUND,
        frame: Some(frame),
        curves,
    })
}
