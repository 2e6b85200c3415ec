//! Recursive Hilbert curve generation.
//!
//! The curve is produced by the textbook turtle recursion: each order expands
//! into four sub-curves of the order below joined by three unit steps. Every
//! step moves a grid cursor one cell and yields the rectangle that draws that
//! segment on screen.

use std::{thread, time::Duration};

use rand::Rng;

use crate::{
    color::Color,
    error::{Error, Result},
    surface::{PixelSurface, Rect},
};

/// Deepest order a configuration accepts. Bounds both recursion depth and the
/// `4^order - 1` step count.
pub const MAX_ORDER: u32 = 12;

/// Heading of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards +x.
    Right,
    /// Towards +y.
    Up,
    /// Towards -x.
    Left,
    /// Towards -y.
    Down,
}

impl Direction {
    /// Interpret a count of quarter turns, taken modulo 4 (negative counts
    /// included).
    pub const fn from_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Self::Right,
            1 => Self::Up,
            2 => Self::Left,
            _ => Self::Down,
        }
    }

    /// Quarter turns from [`Direction::Right`], in `0..4`.
    pub const fn turns(self) -> i32 {
        match self {
            Self::Right => 0,
            Self::Up => 1,
            Self::Left => 2,
            Self::Down => 3,
        }
    }

    /// Whether the step runs along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    /// Cursor displacement for one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Up => (0, 1),
            Self::Left => (-1, 0),
            Self::Down => (0, -1),
        }
    }
}

/// Handedness of a (sub-)curve. Flipping it mirrors the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// `+1`: turns are added to the heading.
    Positive,
    /// `-1`: turns are subtracted from the heading.
    Negative,
}

impl Rotation {
    /// `+1` or `-1`.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// The mirrored rotation.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// Grid position of a curve run, in segment units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CurveCursor {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl CurveCursor {
    /// A cursor at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cursor one step further in `direction`.
    pub const fn advanced(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Everything one curve run needs. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveConfig {
    /// Pixel position of grid cell `(0, 0)`.
    origin: (i32, i32),
    /// Segment length along its own axis, which is also the grid pitch.
    segment_width: i32,
    /// Segment thickness across its axis.
    segment_height: i32,
    /// Initial heading.
    direction: Direction,
    /// Initial handedness.
    rotation: Rotation,
    /// Recursion order.
    order: u32,
}

impl CurveConfig {
    /// A curve of `order` at pixel `origin`, drawn with `segment`
    /// (`(width, height)`) rectangles, heading right with positive rotation.
    pub fn new(order: u32, origin: (i32, i32), segment: (i32, i32)) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(Error::Order {
                order,
                max: MAX_ORDER,
            });
        }
        let (segment_width, segment_height) = segment;
        if segment_width <= 0 || segment_height <= 0 {
            return Err(Error::Segment(format!(
                "{segment_width}x{segment_height} must be positive in both axes"
            )));
        }
        Ok(Self {
            origin,
            segment_width,
            segment_height,
            direction: Direction::Right,
            rotation: Rotation::Positive,
            order,
        })
    }

    /// The same curve starting with a different heading and handedness.
    pub fn with_heading(self, direction: Direction, rotation: Rotation) -> Self {
        Self {
            direction,
            rotation,
            ..self
        }
    }

    /// Recursion order.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Pixel position of grid cell `(0, 0)`.
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    /// `(width, height)` of a horizontal segment.
    pub fn segment(&self) -> (i32, i32) {
        (self.segment_width, self.segment_height)
    }

    /// Initial heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Initial handedness.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Number of steps a full run emits: `4^order - 1`.
    pub fn step_count(&self) -> u64 {
        4u64.pow(self.order) - 1
    }

    /// Rectangle painted when stepping from `cursor` in `direction`.
    ///
    /// Steps towards +x/+y hang off the cursor's pixel position; steps towards
    /// -x/-y end there. Vertical steps swap width and height.
    pub fn segment_rect(&self, cursor: CurveCursor, direction: Direction) -> Rect {
        let (w, h) = (self.segment_width, self.segment_height);
        let x = self.origin.0 + cursor.x * w;
        let y = self.origin.1 + cursor.y * w;
        match direction {
            Direction::Right => Rect::new(x, y, x + w, y + h),
            Direction::Up => Rect::new(x, y, x + h, y + w),
            Direction::Left => Rect::new(x - w, y - h, x, y),
            Direction::Down => Rect::new(x - h, y - w, x, y),
        }
    }
}

/// One emitted step of a curve run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Position in the run, from zero.
    pub index: u64,
    /// Heading of the step.
    pub direction: Direction,
    /// Cursor before the step.
    pub cell: CurveCursor,
    /// Pixel rectangle for the segment.
    pub rect: Rect,
    /// Colour drawn for the segment, fresh for every step.
    pub color: Color,
}

/// Recursion state for a single run.
struct Walker<'a, R, F> {
    /// Geometry of the run.
    config: &'a CurveConfig,
    /// Current grid position.
    cursor: CurveCursor,
    /// Steps emitted so far.
    emitted: u64,
    /// Colour source.
    rng: &'a mut R,
    /// Step consumer.
    on_step: F,
}

impl<R: Rng, F: FnMut(&Step)> Walker<'_, R, F> {
    /// Expand one order of the curve starting with heading `turns`.
    fn hilbert(&mut self, turns: i32, rotation: Rotation, order: u32) {
        if order == 0 {
            return;
        }
        let turn = rotation.sign();

        let mut turns = (turns + turn).rem_euclid(4);
        self.hilbert(turns, rotation.reversed(), order - 1);
        self.step(turns);

        turns = (turns - turn).rem_euclid(4);
        self.hilbert(turns, rotation, order - 1);
        self.step(turns);

        self.hilbert(turns, rotation, order - 1);
        turns = (turns - turn).rem_euclid(4);
        self.step(turns);

        self.hilbert(turns, rotation.reversed(), order - 1);
    }

    /// Emit a segment from the cursor and move the cursor past it.
    fn step(&mut self, turns: i32) {
        let direction = Direction::from_turns(turns);
        let step = Step {
            index: self.emitted,
            direction,
            cell: self.cursor,
            rect: self.config.segment_rect(self.cursor, direction),
            color: Color::random(&mut *self.rng),
        };
        (self.on_step)(&step);
        self.cursor = self.cursor.advanced(direction);
        self.emitted += 1;
    }
}

/// Run the curve described by `config`, calling `on_step` for every segment
/// in drawing order. Returns the final cursor.
///
/// Colours are drawn from `rng`, three channels per step.
pub fn walk<R, F>(config: &CurveConfig, rng: &mut R, on_step: F) -> CurveCursor
where
    R: Rng,
    F: FnMut(&Step),
{
    let mut walker = Walker {
        config,
        cursor: CurveCursor::default(),
        emitted: 0,
        rng,
        on_step,
    };
    walker.hilbert(config.direction.turns(), config.rotation, config.order);
    debug_assert_eq!(walker.emitted, config.step_count());
    walker.cursor
}

/// Paint the curve into `surface` one segment at a time, sleeping
/// `step_delay` after each segment. Returns the final cursor.
///
/// The sleep only paces the animation; a zero delay paints as fast as
/// possible.
pub fn paint<R: Rng>(
    config: &CurveConfig,
    surface: &PixelSurface,
    rng: &mut R,
    step_delay: Duration,
) -> CurveCursor {
    walk(config, rng, |step| {
        surface.fill(step.rect, step.color);
        if !step_delay.is_zero() {
            thread::sleep(step_delay);
        }
    })
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::error;

    fn trace(config: &CurveConfig) -> Vec<Step> {
        let mut steps = Vec::new();
        walk(config, &mut StdRng::seed_from_u64(0), |s| steps.push(*s));
        steps
    }

    #[test]
    fn direction_wraps_negative_turns() {
        assert_eq!(Direction::from_turns(-1), Direction::Down);
        assert_eq!(Direction::from_turns(-6), Direction::Left);
        assert_eq!(Direction::from_turns(5), Direction::Up);
        for d in [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ] {
            assert_eq!(Direction::from_turns(d.turns()), d);
        }
    }

    #[test]
    fn rotation_reverses() {
        assert_eq!(Rotation::Positive.reversed(), Rotation::Negative);
        assert_eq!(Rotation::Negative.sign(), -1);
    }

    #[test]
    fn config_validation() {
        assert!(matches!(
            CurveConfig::new(MAX_ORDER + 1, (0, 0), (10, 2)),
            Err(Error::Order { .. })
        ));
        assert!(matches!(
            CurveConfig::new(1, (0, 0), (0, 2)),
            Err(Error::Segment(_))
        ));
        assert!(matches!(
            CurveConfig::new(1, (0, 0), (10, -2)),
            Err(Error::Segment(_))
        ));
        assert!(CurveConfig::new(MAX_ORDER, (0, 0), (1, 1)).is_ok());
    }

    #[test]
    fn order_zero_is_a_leaf() -> error::Result<()> {
        let config = CurveConfig::new(0, (5, 5), (10, 2))?;
        assert!(trace(&config).is_empty());
        assert_eq!(config.step_count(), 0);
        Ok(())
    }

    #[test]
    fn order_one_trace() -> error::Result<()> {
        let config = CurveConfig::new(1, (0, 0), (10, 2))?;
        let steps = trace(&config);
        let got: Vec<(Direction, CurveCursor, Rect)> =
            steps.iter().map(|s| (s.direction, s.cell, s.rect)).collect();
        assert_eq!(
            got,
            vec![
                (Direction::Up, CurveCursor::new(0, 0), Rect::new(0, 0, 2, 10)),
                (Direction::Right, CurveCursor::new(0, 1), Rect::new(0, 10, 10, 12)),
                (Direction::Down, CurveCursor::new(1, 1), Rect::new(8, 0, 10, 10)),
            ]
        );
        Ok(())
    }

    #[test]
    fn order_two_trace() -> error::Result<()> {
        let config = CurveConfig::new(2, (0, 0), (10, 2))?;
        let steps = trace(&config);
        let dirs: String = steps
            .iter()
            .map(|s| match s.direction {
                Direction::Right => 'R',
                Direction::Up => 'U',
                Direction::Left => 'L',
                Direction::Down => 'D',
            })
            .collect();
        assert_eq!(dirs, "RULUURDRURDDLDR");
        assert_eq!(steps[3].rect, Rect::new(0, 10, 2, 20));
        assert_eq!(steps[14].rect, Rect::new(20, 0, 30, 2));
        let indices: Vec<u64> = steps.iter().map(|s| s.index).collect();
        assert_eq!(indices, (0..15).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn origin_offsets_rects() -> error::Result<()> {
        let config = CurveConfig::new(1, (100, 50), (10, 2))?;
        assert_eq!(trace(&config)[0].rect, Rect::new(100, 50, 102, 60));
        Ok(())
    }

    #[test]
    fn final_cursor() -> error::Result<()> {
        let mut rng = StdRng::seed_from_u64(3);
        for order in 1..=5 {
            let config = CurveConfig::new(order, (0, 0), (10, 2))?;
            let end = walk(&config, &mut rng, |_| {});
            assert_eq!(end, CurveCursor::new((1 << order) - 1, 0));
        }
        let mirrored = CurveConfig::new(3, (0, 0), (10, 2))?
            .with_heading(Direction::Up, Rotation::Positive);
        assert_eq!(walk(&mirrored, &mut rng, |_| {}), CurveCursor::new(0, 7));
        Ok(())
    }

    #[test]
    fn paint_fills_each_segment() -> error::Result<()> {
        let surface = PixelSurface::new(100, 100)?;
        let config = CurveConfig::new(1, (0, 0), (10, 2))?;
        let mut rng = StdRng::seed_from_u64(11);
        paint(&config, &surface, &mut rng, Duration::ZERO);

        let mut replay = StdRng::seed_from_u64(11);
        let colors: Vec<u32> = (0..3).map(|_| Color::random(&mut replay).pack()).collect();
        assert_eq!(surface.pixel(1, 5), Some(colors[0]));
        assert_eq!(surface.pixel(5, 11), Some(colors[1]));
        assert_eq!(surface.pixel(9, 5), Some(colors[2]));
        assert_eq!(surface.pixel(50, 50), Some(0));
        Ok(())
    }
}
