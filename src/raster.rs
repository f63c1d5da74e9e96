// ============================================================================
// PRIMITIVES
// ============================================================================

use crate::config::Color;
use crate::error::ConfigError;

/// Pixel-space coordinate, also used for sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub position: Point,
    pub size: Point,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            position: Point::new(x, y),
            size: Point::new(w, h),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }

    /// Inclusive disk test on integer offsets.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.covers_at(x as i64, y as i64)
    }

    fn covers_at(&self, x: i64, y: i64) -> bool {
        let dx = x - self.center.x as i64;
        let dy = y - self.center.y as i64;
        let r = self.radius as i64;
        r >= 0 && dx.abs() <= r && dy.abs() <= r && dx * dx + dy * dy <= r * r
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// Borrowed view of a packed-pixel buffer with clipping writes.
pub struct Canvas<'a> {
    frame: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u32], width: usize, height: usize) -> Self {
        // never index past the slice even if the caller overstates the height
        let height = if width == 0 {
            0
        } else {
            height.min(frame.len() / width)
        };
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.frame.fill(color.packed());
    }

    /// Fills every pixel of `rect` that lies inside the canvas.
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let Some((x0, x1)) = clip_span(rect.position.x.into(), rect.size.x.into(), self.width)
        else {
            return;
        };
        let Some((y0, y1)) = clip_span(rect.position.y.into(), rect.size.y.into(), self.height)
        else {
            return;
        };

        let packed = color.packed();
        for y in y0..y1 {
            let row = y * self.width;
            self.frame[row + x0..row + x1].fill(packed);
        }
    }

    /// Fills the blocky disk `dx² + dy² <= r²` around the circle center.
    /// Only the bounding square's overlap with the canvas is visited.
    pub fn fill_circle(&mut self, circle: &Circle, color: Color) {
        let r = circle.radius as i64;
        let side = 2 * r + 1;
        let Some((x0, x1)) = clip_span(circle.center.x as i64 - r, side, self.width) else {
            return;
        };
        let Some((y0, y1)) = clip_span(circle.center.y as i64 - r, side, self.height) else {
            return;
        };

        let packed = color.packed();
        for y in y0..y1 {
            for x in x0..x1 {
                if circle.covers_at(x as i64, y as i64) {
                    self.frame[x + y * self.width] = packed;
                }
            }
        }
    }
}

/// Intersects `[start, start + len)` with `[0, limit)`.
fn clip_span(start: i64, len: i64, limit: usize) -> Option<(usize, usize)> {
    let lo = start.max(0);
    let hi = (start + len).min(limit as i64);
    (lo < hi).then(|| (lo as usize, hi as usize))
}

/// Narrows a derived layout coordinate back to pixel space.
pub(crate) fn coord(value: i64) -> Result<i32, ConfigError> {
    i32::try_from(value).map_err(|_| ConfigError::Geometry(value))
}

// ============================================================================
// FREE-FUNCTION ENTRY POINTS
// ============================================================================

pub fn draw_rect(buffer: &mut [u32], width: usize, height: usize, rect: &Rect, color: Color) {
    Canvas::new(buffer, width, height).fill_rect(rect, color);
}

pub fn draw_circle(buffer: &mut [u32], width: usize, height: usize, circle: &Circle, color: Color) {
    Canvas::new(buffer, width, height).fill_circle(circle, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(-3, 5, 10), Some((0, 2)));
        assert_eq!(clip_span(8, 5, 10), Some((8, 10)));
        assert_eq!(clip_span(10, 5, 10), None);
        assert_eq!(clip_span(2, -1, 10), None);
        assert_eq!(clip_span(i32::MAX as i64 - 2, 5, 10), None);
    }

    #[test]
    fn test_coord_rejects_out_of_range() {
        assert_eq!(coord(-7), Ok(-7));
        assert_eq!(
            coord(i32::MAX as i64 + 1),
            Err(ConfigError::Geometry(i32::MAX as i64 + 1))
        );
    }

    #[test]
    fn test_canvas_height_bounded_by_slice() {
        let mut buffer = vec![0u32; 12];
        let canvas = Canvas::new(&mut buffer, 4, 10);
        assert_eq!(canvas.height(), 3);
    }
}
