use crate::core::clock::FrameInfo;

/// Source of per-tick timing supplied by the host frame loop
pub trait FrameClock {
    /// Advance one frame and return its timing
    fn tick(&mut self) -> FrameInfo;
}
