// ============================================================================
// DISPLAY DRIVER
// ============================================================================

use crate::bit_register::BitRegister;
use crate::config::{Color, DisplayConfig, RegisterConfig};
use crate::error::{ConfigError, DisplayError};
use crate::framebuffer::FrameBuffer;
use crate::present::{PresentStatus, Presenter};
use crate::seven_seg::DigitGroup;
use crate::signal::SignalSource;
use crate::throttle::FrameThrottle;

/// Outcome of one `process` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Digit bus decoded, no redraw this tick.
    Decoded,
    /// Digit bus decoded and a full frame presented.
    Presented,
    /// A frame was presented and the presentation surface asked to close.
    CloseRequested,
}

/// A bit register row bound to the signal it shows.
pub struct RegisterLane {
    label: String,
    leds: BitRegister,
    source: Box<dyn SignalSource>,
    on: Color,
    off: Color,
}

impl RegisterLane {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn leds(&self) -> &BitRegister {
        &self.leds
    }
}

/// Turns sampled circuit signals into frames.
///
/// Call [`DisplayDriver::process`] once per simulation tick. Every call latches
/// the multiplexed digit bus; every `frequency / 60` calls the whole frame is
/// redrawn and handed to the presenter.
pub struct DisplayDriver<P: Presenter> {
    frame: FrameBuffer,
    digits: DigitGroup,
    registers: Vec<RegisterLane>,
    segments: Box<dyn SignalSource>,
    select: Box<dyn SignalSource>,
    throttle: FrameThrottle,
    segment_on: Color,
    segment_off: Color,
    presenter: P,
    frames_presented: u64,
}

impl<P: Presenter> DisplayDriver<P> {
    /// `segments` carries the lit segments of the selected digit (bit 0 = a),
    /// `select` has bit `i` set while digit `i` is driven.
    pub fn new(
        config: &DisplayConfig,
        segments: impl SignalSource + 'static,
        select: impl SignalSource + 'static,
        presenter: P,
    ) -> Result<Self, DisplayError> {
        config.validate()?;

        let frame = FrameBuffer::new(config.width, config.height, config.background)?;
        let digits = DigitGroup::new(
            config.digit_origin,
            config.digit_count,
            config.segment_length()?,
            config.segment_thickness(),
        )?;
        let throttle = FrameThrottle::from_frequency(config.frequency)?;

        log::info!(
            "display driver ready: {}x{} frame, {} digits, redraw every {} ticks",
            config.width,
            config.height,
            config.digit_count,
            throttle.ticks_per_redraw()
        );

        Ok(Self {
            frame,
            digits,
            registers: Vec::new(),
            segments: Box::new(segments),
            select: Box::new(select),
            throttle,
            segment_on: config.segment_on,
            segment_off: config.segment_off,
            presenter,
            frames_presented: 0,
        })
    }

    /// Adds a bit register row fed from `source`. Rows draw in attach order.
    pub fn attach_register(
        &mut self,
        config: &RegisterConfig,
        source: impl SignalSource + 'static,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        let leds = BitRegister::new(config.origin, config.radius, config.bits)?;

        log::debug!(
            "attached {}-bit register '{}' at ({}, {})",
            config.bits,
            config.label,
            config.origin.x,
            config.origin.y
        );

        self.registers.push(RegisterLane {
            label: config.label.clone(),
            leds,
            source: Box::new(source),
            on: config.on_color,
            off: config.off_color,
        });
        Ok(())
    }

    pub fn with_register(
        mut self,
        config: &RegisterConfig,
        source: impl SignalSource + 'static,
    ) -> Result<Self, ConfigError> {
        self.attach_register(config, source)?;
        Ok(self)
    }

    /// Advances one simulation tick.
    pub fn process(&mut self) -> Result<FrameStatus, DisplayError> {
        let mut status = FrameStatus::Decoded;
        if self.throttle.advance() {
            status = self.redraw()?;
        }

        self.decode();
        Ok(status)
    }

    fn redraw(&mut self) -> Result<FrameStatus, DisplayError> {
        let mut canvas = self.frame.canvas();
        self.digits.draw(&mut canvas, self.segment_on, self.segment_off);

        for lane in &mut self.registers {
            lane.leds.set_register(lane.source.read());
            lane.leds.draw(&mut canvas, lane.on, lane.off);
        }

        let presented = self.presenter.present(&self.frame)?;
        self.frames_presented += 1;
        log::trace!("presented frame {}", self.frames_presented);

        Ok(match presented {
            PresentStatus::Continue => FrameStatus::Presented,
            PresentStatus::CloseRequested => FrameStatus::CloseRequested,
        })
    }

    /// Latches the segment byte into every digit whose select bit is set.
    /// Ascending order, so with several bits high the last one processed wins.
    fn decode(&mut self) {
        let select = self.select.read();
        if select == 0 {
            return;
        }

        let segments = self.segments.read() as u8;
        for i in 0..self.digits.len() {
            if (select >> i) & 1 == 1 {
                self.digits.set_digit(i, segments);
            }
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn digits(&self) -> &DigitGroup {
        &self.digits
    }

    pub fn registers(&self) -> &[RegisterLane] {
        &self.registers
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn ticks_per_redraw(&self) -> u32 {
        self.throttle.ticks_per_redraw()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}
