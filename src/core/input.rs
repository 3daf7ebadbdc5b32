use glam::Vec2;

/// Zoom deltas pre-sampled by the host for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomInput {
    /// Mouse wheel delta, positive zooms in
    pub scroll: f32,
    /// Previous minus current touch separation, present only during a two-finger pinch
    pub pinch: Option<f32>,
}

impl ZoomInput {
    pub fn scroll(scroll: f32) -> Self {
        Self { scroll, pinch: None }
    }

    pub fn pinch(pinch: f32) -> Self {
        Self {
            scroll: 0.0,
            pinch: Some(pinch),
        }
    }
}

/// Touch point with its movement since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub position: Vec2,
    pub delta: Vec2,
}

impl TouchPoint {
    pub fn new(position: Vec2, delta: Vec2) -> Self {
        Self { position, delta }
    }

    fn previous(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Collects raw pointer events between frames and reduces them to a `ZoomInput`
#[derive(Debug, Clone, Default)]
pub struct PointerSampler {
    /// Scroll accumulated since the last sample
    scroll: f32,
    /// Touches reported for the current frame
    touches: Vec<TouchPoint>,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mouse wheel delta
    pub fn push_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Replace the active touch list for this frame
    pub fn set_touches(&mut self, touches: &[TouchPoint]) {
        self.touches.clear();
        self.touches.extend_from_slice(touches);
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Pinch delta, only defined for exactly two touches
    pub fn pinch_delta(&self) -> Option<f32> {
        match self.touches.as_slice() {
            [a, b] => {
                let previous = (a.previous() - b.previous()).length();
                let current = (a.position - b.position).length();
                Some(previous - current)
            }
            _ => None,
        }
    }

    /// Take this frame's input and reset per-frame state
    pub fn sample(&mut self) -> ZoomInput {
        let input = ZoomInput {
            scroll: self.scroll,
            pinch: self.pinch_delta(),
        };
        self.scroll = 0.0;
        self.touches.clear();
        input
    }
}
