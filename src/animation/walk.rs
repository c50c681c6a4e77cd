use super::wrap_degrees;

/// Degrees the figure advances along its circular path per tick.
pub const ORBIT_STEP_DEG: f32 = 0.5;
/// Degrees the leg and arm swing phases advance per tick.
pub const LEG_STEP_DEG: f32 = 5.0;
/// Radius of the circular path.
pub const ORBIT_RADIUS: f32 = 80.0;

/// Which leg is currently lifted off the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Snapshot of the walk cycle consumed by the scene builder.
#[derive(Debug, Clone, Copy)]
pub struct FigurePose {
    /// Position along the circular path, degrees in `[0, 360)`.
    pub orbit_deg: f32,
    /// Magnitude of the current leg/arm swing, degrees in `[0, 90]`.
    pub swing_deg: f32,
    pub lifted: Side,
}

impl FigurePose {
    /// Pose at tick zero: orbit angle 0, both legs neutral.
    #[cfg(test)]
    pub fn neutral() -> Self {
        Self {
            orbit_deg: 0.0,
            swing_deg: 0.0,
            lifted: Side::Left,
        }
    }
}

/// Open-loop oscillators driving the walk. Three independent phase angles,
/// each advanced by a fixed step per tick and kept inside its wrap range.
pub struct WalkAnimation {
    /// Position along the circular path, `[0, 360)`.
    orbit_angle: f32,
    /// Leg swing phase. Climbs through `[0, 180)` and is mirrored at 90 so
    /// the stored value oscillates between -90 and 90; its magnitude is the
    /// hip rotation applied to the lifted leg.
    swing_angle: f32,
    /// Lifted-leg selector phase, `[0, 360)`; the 180 threshold picks the side.
    stride_angle: f32,
}

impl WalkAnimation {
    pub fn new() -> Self {
        Self {
            orbit_angle: 0.0,
            swing_angle: 0.0,
            stride_angle: 0.0,
        }
    }

    /// Advances all phases by one frame.
    pub fn tick(&mut self) {
        self.orbit_angle = wrap_degrees(self.orbit_angle + ORBIT_STEP_DEG);

        let mut swing = self.swing_angle + LEG_STEP_DEG;
        if swing >= 180.0 {
            swing = 0.0;
        }
        if swing >= 90.0 {
            swing = -swing;
        }
        self.swing_angle = swing;

        self.stride_angle = wrap_degrees(self.stride_angle + LEG_STEP_DEG);
    }

    pub fn pose(&self) -> FigurePose {
        FigurePose {
            orbit_deg: self.orbit_angle,
            swing_deg: self.swing_angle.abs(),
            lifted: if self.stride_angle < 180.0 {
                Side::Left
            } else {
                Side::Right
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_pose_before_first_tick() {
        let walk = WalkAnimation::new();
        let pose = walk.pose();
        assert_eq!(pose.orbit_deg, 0.0);
        assert_eq!(pose.swing_deg, 0.0);
        assert_eq!(pose.lifted, Side::Left);
    }

    #[test]
    fn orbit_phase_is_step_times_ticks_mod_360() {
        let mut walk = WalkAnimation::new();
        for n in 1..=2000u32 {
            walk.tick();
            let expected = (n as f32 * ORBIT_STEP_DEG) % 360.0;
            assert_relative_eq!(walk.pose().orbit_deg, expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn orbit_phase_returns_to_zero_after_full_cycle() {
        let mut walk = WalkAnimation::new();
        let ticks_per_orbit = (360.0 / ORBIT_STEP_DEG) as u32;
        for _ in 0..ticks_per_orbit {
            walk.tick();
        }
        assert_eq!(walk.pose().orbit_deg, 0.0);
    }

    #[test]
    fn swing_magnitude_stays_within_ninety_degrees() {
        let mut walk = WalkAnimation::new();
        for _ in 0..10_000 {
            walk.tick();
            let pose = walk.pose();
            assert!((0.0..=90.0).contains(&pose.swing_deg));
        }
    }

    #[test]
    fn lifted_leg_flips_every_half_stride() {
        let mut walk = WalkAnimation::new();
        let ticks_per_flip = (180.0 / LEG_STEP_DEG) as u32;
        let mut last = walk.pose().lifted;
        let mut flips = Vec::new();
        for n in 1..=144u32 {
            walk.tick();
            let lifted = walk.pose().lifted;
            if lifted != last {
                flips.push(n);
                last = lifted;
            }
        }
        assert_eq!(flips, vec![
            ticks_per_flip,
            ticks_per_flip * 2,
            ticks_per_flip * 3,
            ticks_per_flip * 4,
        ]);
    }

    #[test]
    fn swing_is_periodic() {
        let mut walk = WalkAnimation::new();
        let mut magnitudes = Vec::new();
        for _ in 0..72 {
            walk.tick();
            magnitudes.push(walk.pose().swing_deg);
        }
        // One full swing period: 0..90 up, 90..0 down, twice.
        let mut again = Vec::new();
        for _ in 0..72 {
            walk.tick();
            again.push(walk.pose().swing_deg);
        }
        assert_eq!(magnitudes, again);
    }
}
