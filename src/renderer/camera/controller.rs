use winit::keyboard::NamedKey;

use super::CameraState;
use crate::animation::wrap_degrees;

/// Degrees added to one tilt angle per arrow-key press.
pub const KEY_STEP_DEG: f32 = 2.0;

/// Maps the four arrow keys onto the two scene tilt angles. Every press
/// moves exactly one angle by exactly `KEY_STEP_DEG`; host key-repeat is
/// taken as-is and there is no chord handling.
pub struct CameraController {
    state: CameraState,
}

impl CameraController {
    pub fn new(state: CameraState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Applies one key press; returns false for keys this controller ignores.
    pub fn on_key(&mut self, key: &NamedKey) -> bool {
        match key {
            NamedKey::ArrowLeft => {
                self.state.v_angle = wrap_degrees(self.state.v_angle - KEY_STEP_DEG);
                true
            }
            NamedKey::ArrowRight => {
                self.state.v_angle = wrap_degrees(self.state.v_angle + KEY_STEP_DEG);
                true
            }
            NamedKey::ArrowUp => {
                self.state.h_angle = wrap_degrees(self.state.h_angle - KEY_STEP_DEG);
                true
            }
            NamedKey::ArrowDown => {
                self.state.h_angle = wrap_degrees(self.state.h_angle + KEY_STEP_DEG);
                true
            }
            _ => false,
        }
    }

    /// Restores the default head-on orientation.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(CameraState::default())
    }

    #[test]
    fn each_press_moves_exactly_one_angle() {
        let mut camera = controller();
        assert!(camera.on_key(&NamedKey::ArrowRight));
        assert_eq!(camera.state().v_angle, KEY_STEP_DEG);
        assert_eq!(camera.state().h_angle, 0.0);

        let mut camera = controller();
        assert!(camera.on_key(&NamedKey::ArrowDown));
        assert_eq!(camera.state().h_angle, KEY_STEP_DEG);
        assert_eq!(camera.state().v_angle, 0.0);
    }

    #[test]
    fn opposite_presses_cancel() {
        let mut camera = controller();
        camera.on_key(&NamedKey::ArrowLeft);
        camera.on_key(&NamedKey::ArrowRight);
        assert_eq!(camera.state().v_angle, 0.0);

        camera.on_key(&NamedKey::ArrowUp);
        camera.on_key(&NamedKey::ArrowDown);
        assert_eq!(camera.state().h_angle, 0.0);
    }

    #[test]
    fn angles_wrap_into_range() {
        let mut camera = controller();
        camera.on_key(&NamedKey::ArrowLeft);
        assert_eq!(camera.state().v_angle, 360.0 - KEY_STEP_DEG);

        for _ in 0..400 {
            camera.on_key(&NamedKey::ArrowDown);
        }
        let (h, v) = camera.state().get_orientation();
        assert!((0.0..360.0).contains(&h));
        assert!((0.0..360.0).contains(&v));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut camera = controller();
        assert!(!camera.on_key(&NamedKey::Enter));
        assert_eq!(camera.state().get_orientation(), (0.0, 0.0));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut camera = controller();
        camera.on_key(&NamedKey::ArrowUp);
        camera.on_key(&NamedKey::ArrowLeft);
        camera.reset();
        assert_eq!(camera.state().get_orientation(), (0.0, 0.0));
    }
}
