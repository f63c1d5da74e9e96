use bon::Builder;

use crate::error::ConfigError;
use crate::raster::{coord, Point};
use crate::seven_seg::MAX_DIGITS;

/// Color of a drawn primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA word as it sits in the frame buffer (byte order r, g, b, a).
    pub const fn packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, 0xff])
    }

    pub const fn from_packed(value: u32) -> Self {
        let [r, g, b, _] = value.to_le_bytes();
        Self { r, g, b }
    }
}

// ============================================================================
// DISPLAY CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Builder)]
pub struct DisplayConfig {
    #[builder(default = "segview".to_string())]
    pub title: String,

    // Frame buffer
    #[builder(default = 600)]
    pub width: usize,
    #[builder(default = 300)]
    pub height: usize,
    #[builder(default = 2)]
    pub window_scale: u32,
    #[builder(default = Color::new(0x20, 0x20, 0x20))]
    pub background: Color,

    /// Ticks per simulated second; drives the redraw cadence.
    #[builder(default = 1024)]
    pub frequency: u32,

    // Digit bus
    #[builder(default = 5)]
    pub segment_scale: i32,
    #[builder(default = Point::new(20, 20))]
    pub digit_origin: Point,
    #[builder(default = 4)]
    pub digit_count: usize,
    #[builder(default = Color::new(0xff, 0x00, 0x00))]
    pub segment_on: Color,
    #[builder(default = Color::new(0x42, 0x00, 0x00))]
    pub segment_off: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DisplayConfig {
    pub fn segment_length(&self) -> Result<i32, ConfigError> {
        coord(self.segment_scale as i64 * 5)
    }

    pub fn segment_thickness(&self) -> i32 {
        self.segment_scale
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyFrame {
                width: self.width,
                height: self.height,
            });
        }
        if self.segment_scale <= 0 {
            return Err(ConfigError::SegmentScale(self.segment_scale));
        }
        self.segment_length()?;
        if self.frequency == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if self.window_scale == 0 {
            return Err(ConfigError::WindowScale);
        }
        if !self.digit_count.is_power_of_two() || self.digit_count > MAX_DIGITS {
            return Err(ConfigError::DigitCount(self.digit_count));
        }
        Ok(())
    }
}

// ============================================================================
// REGISTER CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Builder)]
pub struct RegisterConfig {
    #[builder(default = "".to_string(), into)]
    pub label: String,
    pub origin: Point,
    #[builder(default = 6)]
    pub radius: i32,
    pub bits: u32,
    #[builder(default = Color::new(0x00, 0xff, 0x00))]
    pub on_color: Color,
    #[builder(default = Color::new(0x00, 0x42, 0x00))]
    pub off_color: Color,
}

impl RegisterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bits == 0 || self.bits > u32::BITS {
            return Err(ConfigError::RegisterWidth(self.bits));
        }
        if self.radius < 0 {
            return Err(ConfigError::Radius(self.radius));
        }
        Ok(())
    }
}

/// Register rows of the extended board: program counter, flags, control
/// word and the two accumulators.
#[derive(Debug, Clone)]
pub struct ExtendedLayout {
    pub counter: RegisterConfig,
    pub flags: RegisterConfig,
    pub control: RegisterConfig,
    pub a: RegisterConfig,
    pub b: RegisterConfig,
}

impl ExtendedLayout {
    const RADIUS: i32 = 6;

    pub fn for_frame(width: usize, height: usize) -> Self {
        // right-aligned column wide enough for an 8-bit row
        let right = width as i32 - (Self::RADIUS * 3 * 8) - 15;
        let bottom = height as i32 - 30;

        let green = (Color::new(0x00, 0xff, 0x00), Color::new(0x00, 0x42, 0x00));
        let row = |label: &str, origin: Point, bits: u32, (on, off): (Color, Color)| {
            RegisterConfig::builder()
                .label(label)
                .origin(origin)
                .radius(Self::RADIUS)
                .bits(bits)
                .on_color(on)
                .off_color(off)
                .build()
        };

        Self {
            counter: row("counter", Point::new(right, 30), 4, green),
            flags: row(
                "flags",
                Point::new(right, 60),
                2,
                (Color::new(0x00, 0xff, 0xff), Color::new(0x00, 0x42, 0x42)),
            ),
            control: row(
                "control",
                Point::new(10, bottom),
                16,
                (Color::new(0x00, 0x00, 0xff), Color::new(0x00, 0x00, 0x42)),
            ),
            a: row("a", Point::new(right, 90), 8, green),
            b: row("b", Point::new(right, 120), 8, green),
        }
    }
}
