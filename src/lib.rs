pub mod cli;
pub mod clock;
pub mod math;
pub mod scene;
pub mod trajectory;

pub use scene::TrajectoryConfig;
pub use trajectory::{InterpolationMode, Trajectory};
