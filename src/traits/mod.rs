pub mod frame;
pub mod noise;
pub mod random;
pub mod spawner;
pub mod store;
pub mod transform;

pub use frame::*;
pub use noise::*;
pub use random::*;
pub use spawner::*;
pub use store::*;
pub use transform::*;
