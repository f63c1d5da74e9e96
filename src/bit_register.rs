// ============================================================================
// BIT REGISTER INDICATORS
// ============================================================================

use crate::config::Color;
use crate::error::ConfigError;
use crate::raster::{coord, Canvas, Circle, Point};

/// A row of round indicators showing an unsigned value, most significant bit
/// leftmost.
#[derive(Debug, Clone)]
pub struct BitRegister {
    cells: Vec<Circle>,
    value: u32,
}

impl BitRegister {
    pub fn new(origin: Point, radius: i32, bits: u32) -> Result<Self, ConfigError> {
        if bits == 0 || bits > u32::BITS {
            return Err(ConfigError::RegisterWidth(bits));
        }
        if radius < 0 {
            return Err(ConfigError::Radius(radius));
        }

        let pitch = radius as i64 * 3;
        let cells = (0..bits as i64)
            .map(|i| Ok(Circle::new(coord(origin.x as i64 + pitch * i)?, origin.y, radius)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { cells, value: 0 })
    }

    pub fn bits(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Stored as-is; bits above the register width are never shown.
    pub fn set_register(&mut self, value: u32) {
        self.value = value;
    }

    pub fn cell(&self, slot: usize) -> Option<&Circle> {
        self.cells.get(slot)
    }

    /// Whether display slot `slot` (0 = leftmost) is on.
    pub fn is_lit(&self, slot: usize) -> bool {
        let bits = self.cells.len();
        if slot >= bits {
            return false;
        }
        (self.value >> (bits - 1 - slot)) & 1 == 1
    }

    pub fn draw(&self, canvas: &mut Canvas, on: Color, off: Color) {
        for (slot, cell) in self.cells.iter().enumerate() {
            canvas.fill_circle(cell, if self.is_lit(slot) { on } else { off });
        }
    }
}
