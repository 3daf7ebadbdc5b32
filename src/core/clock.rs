use std::time::Instant;

use crate::traits::FrameClock;

/// Timing for one tick: frame number, seconds since start, seconds since last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall-clock game clock, monotonic via `Instant`
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Seconds since the clock started
    pub fn time(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Restart delta measurement without touching elapsed time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Clock {
    fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        let time = now.duration_since(self.start).as_secs_f32();
        self.last_tick = now;

        let info = FrameInfo::new(self.frame_number, time, delta);
        self.frame_number += 1;
        info
    }
}

/// Deterministic clock advancing a fixed step per tick.
/// The first tick reports time 0 and delta 0.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    frame_number: u64,
}

impl FixedStepClock {
    /// Clock ticking at `hz` frames per second
    pub fn new(hz: f32) -> Self {
        Self {
            step: 1.0 / hz,
            frame_number: 0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl FrameClock for FixedStepClock {
    fn tick(&mut self) -> FrameInfo {
        let number = self.frame_number;
        // Multiply instead of accumulating to avoid drift over long runs
        let time = number as f32 * self.step;
        let delta = if number == 0 { 0.0 } else { self.step };
        self.frame_number += 1;
        FrameInfo::new(number, time, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        assert!(frame.delta >= 0.009);
        assert!(frame.time >= frame.delta);
        assert_eq!(frame.number, 0);
    }

    #[test]
    fn clock_resets_delta_only() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let frame = clock.tick();
        assert!(frame.delta < frame.time);
    }

    #[test]
    fn fixed_step_clock_is_deterministic() {
        let mut clock = FixedStepClock::new(50.0);

        let first = clock.tick();
        assert_eq!(first, FrameInfo::new(0, 0.0, 0.0));

        let second = clock.tick();
        assert_eq!(second.number, 1);
        assert!((second.time - 0.02).abs() < 1e-6);
        assert!((second.delta - 0.02).abs() < 1e-6);

        for _ in 0..98 {
            clock.tick();
        }
        let hundredth = clock.tick();
        assert!((hundredth.time - 2.0).abs() < 1e-4);
    }
}
