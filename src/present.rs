// ============================================================================
// PRESENTATION SURFACES
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowBuilder;

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::framebuffer::FrameBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentStatus {
    Continue,
    CloseRequested,
}

/// Final stage of a redraw: takes a finished frame and shows it.
pub trait Presenter {
    fn present(&mut self, frame: &FrameBuffer) -> Result<PresentStatus, DisplayError>;
}

/// Keeps presented frames in memory instead of showing them.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    frames: u64,
    last_frame: Option<Vec<u32>>,
    close_after: Option<u64>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a close request once `frames` frames have been presented.
    pub fn closing_after(frames: u64) -> Self {
        Self {
            close_after: Some(frames),
            ..Self::default()
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&[u32]> {
        self.last_frame.as_deref()
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, frame: &FrameBuffer) -> Result<PresentStatus, DisplayError> {
        self.frames += 1;
        let copy = self.last_frame.get_or_insert_with(Vec::new);
        copy.clear();
        copy.extend_from_slice(frame.pixels());

        match self.close_after {
            Some(limit) if self.frames >= limit => Ok(PresentStatus::CloseRequested),
            _ => Ok(PresentStatus::Continue),
        }
    }
}

/// A fixed-size window backed by a `pixels` surface.
///
/// The event loop is never handed control; pending events are pumped after
/// each presented frame so the caller keeps driving the simulation.
pub struct WindowPresenter {
    pixels: Pixels<'static>,
    event_loop: EventLoop<()>,
}

impl WindowPresenter {
    pub fn open(config: &DisplayConfig) -> Result<Self, DisplayError> {
        config.validate()?;

        let event_loop = EventLoop::new()?;
        let scale = config.window_scale as f64;
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(
                config.width as f64 * scale,
                config.height as f64 * scale,
            ))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = Arc::new(window);

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(config.width as u32, config.height as u32, surface_texture)?;

        log::info!(
            "opened {}x{} window '{}' for a {}x{} frame",
            size.width,
            size.height,
            config.title,
            config.width,
            config.height
        );

        Ok(Self { pixels, event_loop })
    }
}

impl Presenter for WindowPresenter {
    fn present(&mut self, frame: &FrameBuffer) -> Result<PresentStatus, DisplayError> {
        frame.write_rgba(self.pixels.frame_mut());
        self.pixels.render()?;

        let mut close_requested = false;
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, target| {
                if let Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } = event
                {
                    close_requested = true;
                    target.exit();
                }
            });

        if close_requested || matches!(status, PumpStatus::Exit(_)) {
            log::debug!("window close requested");
            return Ok(PresentStatus::CloseRequested);
        }
        Ok(PresentStatus::Continue)
    }
}
