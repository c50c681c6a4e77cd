/// Scene tilt angles in degrees, each kept inside `[0, 360)`.
///
/// `h_angle` tilts the orbit plane about the X axis, `v_angle` spins it
/// about the Y axis; both are applied after the fixed -130 Z offset.
#[derive(Debug, Clone)]
pub struct CameraState {
    pub h_angle: f32,
    pub v_angle: f32,
}

impl CameraState {
    pub fn new(h_angle: f32, v_angle: f32) -> Self {
        Self { h_angle, v_angle }
    }

    pub fn reset(&mut self) {
        self.h_angle = 0.0;
        self.v_angle = 0.0;
    }

    pub fn get_orientation(&self) -> (f32, f32) {
        (self.h_angle, self.v_angle)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
