pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod traits;

pub use config::{ConfigError, EconomyConfig, MotionConfig, OrbitConfig, PatrolConfig, SceneConfig};
pub use crate::core::clock::{Clock, FixedStepClock, FrameInfo};
pub use crate::core::input::{PointerSampler, TouchPoint, ZoomInput};
pub use crate::core::orbit::{OrbitCameraController, OrbitState};
pub use crate::core::patrol::{PatrolState, WaypointPatrolController, WaypointSet};
pub use crate::core::scene::{FrameSample, MotionScene};
pub use crate::core::transform::Transform;
pub use error::{EconomyError, MotionError};
