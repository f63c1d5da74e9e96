use thiserror::Error;

/// Rejected construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("frame buffer must not be empty (got {width}x{height})")]
    EmptyFrame { width: usize, height: usize },

    #[error("segment scale must be positive (got {0})")]
    SegmentScale(i32),

    #[error("simulation clock frequency must be non-zero")]
    ZeroFrequency,

    #[error("window scale must be positive")]
    WindowScale,

    #[error("digit count must be a power of two between 1 and 8 (got {0})")]
    DigitCount(usize),

    #[error("register width must be between 1 and 32 bits (got {0})")]
    RegisterWidth(u32),

    #[error("indicator radius must not be negative (got {0})")]
    Radius(i32),

    #[error("layout coordinate {0} does not fit in pixel space")]
    Geometry(i64),
}

/// Everything that can stop the display driver.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("invalid display configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("presentation surface error: {0}")]
    Surface(#[from] pixels::Error),
}
