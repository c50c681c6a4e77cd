mod walk;

pub use walk::{FigurePose, ORBIT_RADIUS, Side, WalkAnimation};

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
