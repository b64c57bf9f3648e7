use std::time::Instant;

/// Frame clock for driving trajectory playback in real time.
///
/// Tracks delta time between ticks and caps it, so a stall (debugger pause,
/// window drag) produces one ordinary step instead of teleporting every
/// object far along its path.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: f32,
}

impl Clock {
    /// Create a clock starting now. Deltas are capped at `max_delta` seconds.
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
        }
    }

    /// Delta time in seconds since the last tick, capped, advancing the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(0.25)
    }
}

/// Deterministic fixed-step time source for offline sampling: yields the same
/// delta `steps` times. Used by the sampler binary so its output is
/// reproducible run to run.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    dt: f32,
    remaining: u32,
}

impl FixedStep {
    /// Split `duration` seconds into steps at the given rate (Hz).
    pub fn over(duration: f32, rate: f32) -> Self {
        Self {
            dt: 1.0 / rate,
            remaining: (duration * rate).ceil() as u32,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl Iterator for FixedStep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.dt)
    }
}
