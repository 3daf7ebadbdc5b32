pub mod clock;
pub mod grid_layout;
pub mod input;
pub mod orbit;
pub mod patrol;
pub mod rewards;
pub mod scene;
pub mod store;
pub mod transform;
pub mod wallet;
pub mod zoom;
