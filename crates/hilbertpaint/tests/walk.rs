//! Integration tests for the shape of generated curves at every order.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use hilbertpaint::{CurveConfig, CurveCursor, Direction, Rotation, curve, error};
    use rand::{SeedableRng, rngs::StdRng};

    /// Cursor positions visited by a run, including the start.
    fn visited(config: &CurveConfig) -> Vec<CurveCursor> {
        let mut cells = vec![CurveCursor::default()];
        let end = curve::walk(config, &mut StdRng::seed_from_u64(0), |s| {
            cells.push(s.cell.advanced(s.direction));
        });
        assert_eq!(cells.last(), Some(&end));
        cells
    }

    fn counts_steps(order: u32) -> error::Result<()> {
        let config = CurveConfig::new(order, (0, 0), (10, 2))?;
        let mut count = 0u64;
        curve::walk(&config, &mut StdRng::seed_from_u64(1), |_| count += 1);
        assert_eq!(count, 4u64.pow(order) - 1);
        assert_eq!(count, config.step_count());
        Ok(())
    }

    fn fills_the_grid(order: u32, direction: Direction, rotation: Rotation) -> error::Result<()> {
        let config = CurveConfig::new(order, (0, 0), (10, 2))?.with_heading(direction, rotation);
        let cells = visited(&config);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len(), "cell revisited at order {order}");
        assert_eq!(cells.len() as u64, 4u64.pow(order));

        let side = 1i32 << order;
        let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
        for c in &cells {
            assert!((0..side).contains(&(c.x - min_x)));
            assert!((0..side).contains(&(c.y - min_y)));
        }
        for pair in cells.windows(2) {
            let d = (pair[1].x - pair[0].x).abs() + (pair[1].y - pair[0].y).abs();
            assert_eq!(d, 1);
        }
        Ok(())
    }

    macro_rules! order_tests {
        ($($order:expr),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<step_count_order_ $order>]() -> error::Result<()> {
                        counts_steps($order)
                    }

                    #[test]
                    fn [<fills_grid_order_ $order>]() -> error::Result<()> {
                        for direction in [Direction::Right, Direction::Up, Direction::Left, Direction::Down] {
                            for rotation in [Rotation::Positive, Rotation::Negative] {
                                fills_the_grid($order, direction, rotation)?;
                            }
                        }
                        Ok(())
                    }
                }
            )*
        };
    }

    order_tests! { 0, 1, 2, 3, 4, 5, 6 }

    #[test]
    fn step_counts_for_demo_orders() -> error::Result<()> {
        let expected = [0u64, 3, 15, 63, 255, 1023];
        for (order, want) in expected.iter().enumerate() {
            assert_eq!(CurveConfig::new(order as u32, (0, 0), (1, 1))?.step_count(), *want);
        }
        Ok(())
    }

    #[test]
    fn order_one_is_a_cup() -> error::Result<()> {
        let cells = visited(&CurveConfig::new(1, (0, 0), (10, 2))?);
        assert_eq!(
            cells,
            vec![
                CurveCursor::new(0, 0),
                CurveCursor::new(0, 1),
                CurveCursor::new(1, 1),
                CurveCursor::new(1, 0),
            ]
        );
        Ok(())
    }

    #[test]
    fn order_two_reference_path() -> error::Result<()> {
        let cells = visited(&CurveConfig::new(2, (0, 0), (10, 2))?);
        let path: Vec<(i32, i32)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            path,
            vec![
                (0, 0), (1, 0), (1, 1), (0, 1),
                (0, 2), (0, 3), (1, 3), (1, 2),
                (2, 2), (2, 3), (3, 3), (3, 2),
                (3, 1), (2, 1), (2, 0), (3, 0),
            ]
        );
        Ok(())
    }

    #[test]
    fn segment_shape_follows_axis() -> error::Result<()> {
        let config = CurveConfig::new(3, (40, 40), (10, 2))?;
        curve::walk(&config, &mut StdRng::seed_from_u64(2), |s| {
            let (w, h) = (s.rect.width(), s.rect.height());
            if s.direction.is_horizontal() {
                assert_eq!((w, h), (10, 2));
            } else {
                assert_eq!((w, h), (2, 10));
            }
        });
        Ok(())
    }

    #[test]
    fn colors_are_fresh_per_step() -> error::Result<()> {
        let config = CurveConfig::new(4, (0, 0), (10, 2))?;
        let mut colors = HashSet::new();
        curve::walk(&config, &mut StdRng::seed_from_u64(5), |s| {
            colors.insert(s.color.pack());
        });
        // 255 draws from 2^24 colours.
        assert!(colors.len() > 250);
        Ok(())
    }
}
