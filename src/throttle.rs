use crate::error::ConfigError;

/// Target redraws per simulated second.
pub const REDRAW_RATE_HZ: u32 = 60;

/// Counts simulation ticks and reports when a redraw is due.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    tick: u32,
    ticks_per_redraw: u32,
}

impl FrameThrottle {
    pub fn from_frequency(frequency: u32) -> Result<Self, ConfigError> {
        if frequency == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        Ok(Self {
            tick: 0,
            ticks_per_redraw: frequency / REDRAW_RATE_HZ,
        })
    }

    pub fn ticks_per_redraw(&self) -> u32 {
        self.ticks_per_redraw
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Advances one tick. Returns `true` when this tick completes a redraw
    /// period, in which case the counter restarts at zero.
    pub fn advance(&mut self) -> bool {
        self.tick += 1;
        if self.tick >= self.ticks_per_redraw {
            self.tick = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_once_per_period() {
        let mut throttle = FrameThrottle::from_frequency(1024).unwrap();
        assert_eq!(throttle.ticks_per_redraw(), 17);

        let due: Vec<usize> = (1..=51).filter(|_| throttle.advance()).collect();
        assert_eq!(due, vec![17, 34, 51]);
        assert_eq!(throttle.tick(), 0);
    }

    #[test]
    fn test_slow_clock_redraws_every_tick() {
        let mut throttle = FrameThrottle::from_frequency(30).unwrap();
        assert_eq!(throttle.ticks_per_redraw(), 0);
        assert!((0..5).all(|_| throttle.advance()));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert_eq!(
            FrameThrottle::from_frequency(0).unwrap_err(),
            ConfigError::ZeroFrequency
        );
    }
}
