mod bezier;
mod linear;
mod spline;

pub use bezier::bezier_point;
pub use linear::linear_point;
pub use spline::spline_point;
