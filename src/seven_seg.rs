// ============================================================================
// SEVEN-SEGMENT DIGITS
// ============================================================================

use crate::config::Color;
use crate::error::ConfigError;
use crate::raster::{coord, Canvas, Point, Rect};

pub const SEGMENT_COUNT: usize = 8;

/// Largest digit group the 8-bit select byte can address.
pub const MAX_DIGITS: usize = 8;

/// Segment names in bit order: bit 0 is `A`, bit 7 the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Dp,
}

impl Segment {
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Segment bytes for hexadecimal digits, `{dp, g, f, e, d, c, b, a}`.
const GLYPHS: [u8; 16] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
];

/// Segment byte that shows `value` as a hex digit; only the low nibble is used.
pub const fn glyph(value: u8) -> u8 {
    GLYPHS[(value & 0x0f) as usize]
}

/// One digit: eight fixed rectangles and their on/off flags.
#[derive(Debug, Clone)]
pub struct SegmentDigit {
    segments: [Rect; SEGMENT_COUNT],
    lit: [bool; SEGMENT_COUNT],
}

impl SegmentDigit {
    /// Lays out the glyph at `origin` from segment length `w` and thickness `h`.
    /// Fails if any segment corner leaves the `i32` pixel space.
    pub fn new(origin: Point, w: i32, h: i32) -> Result<Self, ConfigError> {
        let (x, y) = (origin.x as i64, origin.y as i64);
        let (w, h) = (w as i64, h as i64);
        let rect = |rx: i64, ry: i64, rw: i64, rh: i64| -> Result<Rect, ConfigError> {
            Ok(Rect::new(coord(rx)?, coord(ry)?, coord(rw)?, coord(rh)?))
        };

        let segments = [
            rect(x, y, w, h)?,                             // a
            rect(x + w, y, h, w)?,                         // b
            rect(x + w, y + w, h, w)?,                     // c
            rect(x, y + w * 2 - h, w, h)?,                 // d
            rect(x - h, y + w, h, w)?,                     // e
            rect(x - h, y, h, w)?,                         // f
            rect(x, y + w - h / 2, w, h)?,                 // g
            rect(x + w + h + h / 2, y + w * 2 - h, h, h)?, // dp
        ];

        Ok(Self {
            segments,
            lit: [false; SEGMENT_COUNT],
        })
    }

    /// Bit `i` of `bits` switches segment `i`.
    pub fn set_segments(&mut self, bits: u8) {
        for (i, lit) in self.lit.iter_mut().enumerate() {
            *lit = (bits >> i) & 1 == 1;
        }
    }

    pub fn segments(&self) -> u8 {
        self.lit
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &lit)| acc | ((lit as u8) << i))
    }

    pub fn is_lit(&self, segment: Segment) -> bool {
        self.lit[segment.index()]
    }

    pub fn rect(&self, segment: Segment) -> Rect {
        self.segments[segment.index()]
    }

    /// Off segments are painted too, in the dim color.
    pub fn draw(&self, canvas: &mut Canvas, on: Color, off: Color) {
        for (rect, &lit) in self.segments.iter().zip(&self.lit) {
            canvas.fill_rect(rect, if lit { on } else { off });
        }
    }
}

/// Digits laid out left to right at a pitch of `w + 6h`.
#[derive(Debug, Clone)]
pub struct DigitGroup {
    digits: Vec<SegmentDigit>,
}

impl DigitGroup {
    pub fn new(origin: Point, count: usize, w: i32, h: i32) -> Result<Self, ConfigError> {
        if !count.is_power_of_two() || count > MAX_DIGITS {
            return Err(ConfigError::DigitCount(count));
        }

        let pitch = Self::pitch(w, h)? as i64;
        let digits = (0..count as i64)
            .map(|i| {
                let x = coord(origin.x as i64 + pitch * i)?;
                SegmentDigit::new(Point::new(x, origin.y), w, h)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { digits })
    }

    pub fn pitch(w: i32, h: i32) -> Result<i32, ConfigError> {
        coord(w as i64 + h as i64 * 6)
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digit(&self, index: usize) -> Option<&SegmentDigit> {
        self.digits.get(index)
    }

    /// Out-of-range indices wrap through the power-of-two mask.
    pub fn set_digit(&mut self, index: usize, value: u8) {
        let mask = self.digits.len() - 1;
        self.digits[index & mask].set_segments(value);
    }

    pub fn draw(&self, canvas: &mut Canvas, on: Color, off: Color) {
        for digit in &self.digits {
            digit.draw(canvas, on, off);
        }
    }
}
