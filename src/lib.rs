// ============================================================================
// CRATE LAYOUT
// ============================================================================
//
// Renders the live state of a multiplexed seven-segment bus and a handful of
// bit registers into a pixel buffer, redrawing at ~60 Hz of simulated time
// while the bus is decoded on every simulation tick.

pub mod bit_register;
pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod logging;
pub mod present;
pub mod raster;
pub mod seven_seg;
pub mod signal;
pub mod throttle;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use bit_register::BitRegister;
pub use config::{Color, DisplayConfig, ExtendedLayout, RegisterConfig};
pub use driver::{DisplayDriver, FrameStatus, RegisterLane};
pub use error::{ConfigError, DisplayError};
pub use framebuffer::FrameBuffer;
pub use present::{HeadlessPresenter, PresentStatus, Presenter, WindowPresenter};
pub use raster::{draw_circle, draw_rect, Canvas, Circle, Point, Rect};
pub use seven_seg::{glyph, DigitGroup, Segment, SegmentDigit};
pub use signal::SignalSource;
pub use throttle::FrameThrottle;
