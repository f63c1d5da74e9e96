use segview::{draw_circle, draw_rect, Circle, Color, Rect};

const BG: u32 = 0;

fn ink() -> Color {
    Color::new(0xff, 0x00, 0x00)
}

fn lit(buffer: &[u32], width: usize) -> Vec<(i32, i32)> {
    buffer
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p != BG)
        .map(|(i, _)| ((i % width) as i32, (i / width) as i32))
        .collect()
}

fn inside(rect: &Rect, x: i32, y: i32) -> bool {
    let (x, y) = (x as i64, y as i64);
    let (left, top) = (rect.position.x as i64, rect.position.y as i64);
    x >= left && x < left + rect.size.x as i64 && y >= top && y < top + rect.size.y as i64
}

#[cfg(test)]
mod raster_tests {
    use super::*;

    #[test]
    fn test_rect_inside_buffer_fills_exact_extent() {
        let (w, h) = (10, 8);
        let mut buffer = vec![BG; w * h];
        let rect = Rect::new(2, 3, 4, 2);

        draw_rect(&mut buffer, w, h, &rect, ink());

        let pixels = lit(&buffer, w);
        assert_eq!(pixels.len(), 8);
        assert!(pixels.iter().all(|&(x, y)| inside(&rect, x, y)));
        assert_eq!(buffer[2 + 3 * w], ink().packed());
    }

    #[test]
    fn test_rect_is_clipped_to_buffer() {
        let (w, h) = (6, 5);
        for rect in [
            Rect::new(-2, -2, 4, 4),
            Rect::new(4, 3, 10, 10),
            Rect::new(-5, 1, 20, 1),
            Rect::new(-10, -10, 3, 3),
            Rect::new(6, 0, 2, 2),
        ] {
            let mut buffer = vec![BG; w * h];
            draw_rect(&mut buffer, w, h, &rect, ink());

            let expected: Vec<(i32, i32)> = (0..h as i32)
                .flat_map(|y| (0..w as i32).map(move |x| (x, y)))
                .filter(|&(x, y)| inside(&rect, x, y))
                .collect();
            assert_eq!(lit(&buffer, w), expected, "rect {:?}", rect);
        }
    }

    #[test]
    fn test_rect_with_empty_size_draws_nothing() {
        let mut buffer = vec![BG; 16];
        draw_rect(&mut buffer, 4, 4, &Rect::new(1, 1, 0, 3), ink());
        draw_rect(&mut buffer, 4, 4, &Rect::new(1, 1, -2, 3), ink());
        assert!(buffer.iter().all(|&p| p == BG));
    }

    #[test]
    fn test_circle_boundary_is_inclusive() {
        let (w, h) = (11, 11);
        let mut buffer = vec![BG; w * h];
        let circle = Circle::new(5, 5, 3);

        draw_circle(&mut buffer, w, h, &circle, ink());

        // 3² + 0² == 3², on the boundary
        assert_ne!(buffer[8 + 5 * w], BG);
        assert_ne!(buffer[5 + 2 * w], BG);
        // 3² + 1² > 3²
        assert_eq!(buffer[8 + 6 * w], BG);
        // corner of the bounding square
        assert_eq!(buffer[8 + 8 * w], BG);

        let pixels = lit(&buffer, w);
        assert!(pixels.iter().all(|&(x, y)| circle.covers(x, y)));
        assert_eq!(pixels.len(), 29);
    }

    #[test]
    fn test_circle_radius_zero_is_single_pixel() {
        let mut buffer = vec![BG; 9];
        draw_circle(&mut buffer, 3, 3, &Circle::new(1, 1, 0), ink());
        assert_eq!(lit(&buffer, 3), vec![(1, 1)]);
    }

    #[test]
    fn test_circle_is_clipped_without_wraparound() {
        let (w, h) = (5, 5);
        let mut buffer = vec![BG; w * h];
        let circle = Circle::new(0, 0, 2);

        draw_circle(&mut buffer, w, h, &circle, ink());

        let pixels = lit(&buffer, w);
        assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]);
        // nothing bled onto the right edge of the previous row
        assert_eq!(buffer[w - 1], BG);
    }

    #[test]
    fn test_far_off_circles_draw_nothing() {
        let (w, h) = (4, 4);
        for circle in [
            Circle::new(i32::MAX, 0, 2),
            Circle::new(i32::MIN, i32::MIN, 3),
            Circle::new(0, i32::MAX, i32::MAX - 1),
            Circle::new(i32::MIN, 0, i32::MAX - 1),
        ] {
            let mut buffer = vec![BG; w * h];
            draw_circle(&mut buffer, w, h, &circle, ink());
            assert!(buffer.iter().all(|&p| p == BG), "circle {:?}", circle);
        }
    }

    #[test]
    fn test_huge_circle_covers_whole_buffer() {
        let (w, h) = (4, 3);
        let mut buffer = vec![BG; w * h];
        draw_circle(&mut buffer, w, h, &Circle::new(1, 1, i32::MAX), ink());
        assert!(buffer.iter().all(|&p| p == ink().packed()));
    }

    #[test]
    fn test_circle_reaching_in_from_far_away() {
        let (w, h) = (4, 4);
        let mut buffer = vec![BG; w * h];
        // the boundary passes exactly through (0, 0)
        let r = 1 << 20;
        draw_circle(&mut buffer, w, h, &Circle::new(-r, 0, r), ink());

        let pixels = lit(&buffer, w);
        assert!(pixels.contains(&(0, 0)));
        assert!(!pixels.contains(&(1, 0)));
        assert!(!pixels.contains(&(0, 1)));
    }
}
