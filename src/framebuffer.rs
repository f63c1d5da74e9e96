use crate::config::Color;
use crate::error::ConfigError;
use crate::raster::Canvas;

/// Fixed-size packed RGBA pixel store owned by the display driver.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyFrame { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![background.packed(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(x + y * self.width).copied()
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.pixels, self.width, self.height)
    }

    /// Copies the frame into an RGBA8 texture, stopping at whichever ends first.
    pub fn write_rgba(&self, out: &mut [u8]) {
        for (dst, src) in out.chunks_exact_mut(4).zip(&self.pixels) {
            dst.copy_from_slice(&src.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_background() {
        let frame = FrameBuffer::new(3, 2, Color::new(0x20, 0x20, 0x20)).unwrap();
        assert_eq!(frame.pixels().len(), 6);
        assert!(frame.pixels().iter().all(|&p| p == 0xff202020));
        assert_eq!(frame.pixel(3, 0), None);
    }

    #[test]
    fn test_write_rgba_byte_order() {
        let mut frame = FrameBuffer::new(1, 1, Color::new(0x11, 0x22, 0x33)).unwrap();
        frame.canvas().clear(Color::new(0xff, 0x00, 0x42));
        let mut texture = [0u8; 4];
        frame.write_rgba(&mut texture);
        assert_eq!(texture, [0xff, 0x00, 0x42, 0xff]);
    }

    #[test]
    fn test_empty_frame_rejected() {
        assert!(FrameBuffer::new(0, 10, Color::new(0, 0, 0)).is_err());
    }
}
