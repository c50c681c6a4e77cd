//! The articulated figure: a fixed hierarchy of flat-colored cuboids, all
//! offset from a shared root at the figure's feet. Only the legs and arms
//! carry an extra local pivot (hip/knee, shoulder); everything else is a
//! plain translate-scale of the unit cube.

use super::SceneBatch;
use crate::animation::{FigurePose, Side};

/// Lateral hip offset of the lifted leg, sign picked by `Side`.
const LEG_SHIFT: f32 = 3.0;
/// Lateral shoulder offset of the swinging arm.
const ARM_SHIFT: f32 = 7.0;

/// Draws the whole body in strict order: head, eyes, neck, torso, lifted
/// leg, planted leg, swinging arm, static arm.
pub fn draw_body(batch: &mut SceneBatch, pose: &FigurePose) {
    draw_body_part(batch, [4.0, 4.0, 4.0], [0.0, 0.0, 38.5], [25, 202, 173]);

    draw_body_part(batch, [0.5, 0.5, 0.5], [-1.0, 2.5, 41.5], [0, 0, 0]);
    draw_body_part(batch, [0.5, 0.5, 0.5], [1.0, 2.5, 41.5], [0, 0, 0]);

    draw_body_part(batch, [0.5, 0.5, 0.5], [0.0, 0.0, 38.0], [255, 255, 255]);

    draw_body_part(batch, [12.0, 8.0, 16.0], [0.0, 0.0, 22.0], [209, 186, 116]);

    let leg_shift = match pose.lifted {
        Side::Left => -LEG_SHIFT,
        Side::Right => LEG_SHIFT,
    };

    // Lifted leg: swings from the hip (pivot at z=22), with the lower
    // segment counter-bent at the knee.
    batch.push();
    batch.translate(leg_shift, 0.0, 22.0);
    batch.rotate_x_deg(pose.swing_deg);
    batch.translate(0.0, 0.0, -22.0);
    draw_leg(batch, -pose.swing_deg);
    batch.pop();

    // Planted leg: no rotation.
    batch.push();
    batch.translate(-leg_shift, 0.0, 0.0);
    draw_leg(batch, 0.0);
    batch.pop();

    // Arms alternate against the legs: the side opposite the lifted leg
    // swings by the same magnitude, the other hangs straight.
    let arm_shift = match pose.lifted {
        Side::Left => ARM_SHIFT,
        Side::Right => -ARM_SHIFT,
    };

    batch.push();
    batch.translate(arm_shift, 0.0, 38.0);
    batch.rotate_x_deg(pose.swing_deg);
    draw_body_part(batch, [2.0, 2.0, 18.0], [0.0, 0.0, -18.0], [224, 96, 108]);
    batch.pop();

    batch.push();
    batch.translate(-arm_shift, 0.0, 0.0);
    draw_body_part(batch, [2.0, 2.0, 18.0], [0.0, 0.0, 20.0], [224, 96, 108]);
    batch.pop();
}

/// One leg: thigh, knee joint, then shin and foot rotated `knee_deg` about
/// a pivot at the knee height.
fn draw_leg(batch: &mut SceneBatch, knee_deg: f32) {
    draw_body_part(batch, [2.0, 2.0, 10.0], [0.0, 0.0, 12.0], [255, 0, 0]);
    draw_body_part(batch, [3.0, 3.0, 1.0], [0.0, 0.0, 11.0], [255, 165, 79]);

    batch.push();
    batch.translate(0.0, 0.0, 11.0);
    batch.rotate_x_deg(knee_deg);
    batch.translate(0.0, 0.0, -11.0);
    draw_body_part(batch, [2.0, 2.0, 10.0], [0.0, 0.0, 1.0], [190, 237, 199]);
    draw_body_part(batch, [3.0, 3.0, 1.0], [0.0, 0.0, 0.0], [255, 165, 79]);
    batch.pop();
}

/// A unit cuboid stretched to `dims` at `offset` from the figure root.
fn draw_body_part(batch: &mut SceneBatch, dims: [f32; 3], offset: [f32; 3], rgb: [u8; 3]) {
    batch.push();
    batch.set_color_u8(rgb[0], rgb[1], rgb[2]);
    batch.translate(offset[0], offset[1], offset[2]);
    batch.scale(dims[0], dims[1], dims[2]);
    draw_unit_cube(batch);
    batch.pop();
}

/// Unit cube spanning x,y in [-0.5, 0.5] and z in [0, 1]: six quad faces.
fn draw_unit_cube(batch: &mut SceneBatch) {
    // -X and +X faces.
    batch.quad(
        [-0.5, -0.5, 1.0],
        [-0.5, -0.5, 0.0],
        [-0.5, 0.5, 0.0],
        [-0.5, 0.5, 1.0],
    );
    batch.quad(
        [0.5, -0.5, 1.0],
        [0.5, -0.5, 0.0],
        [0.5, 0.5, 0.0],
        [0.5, 0.5, 1.0],
    );

    // -Y and +Y faces.
    batch.quad(
        [-0.5, -0.5, 1.0],
        [-0.5, -0.5, 0.0],
        [0.5, -0.5, 0.0],
        [0.5, -0.5, 1.0],
    );
    batch.quad(
        [-0.5, 0.5, 1.0],
        [-0.5, 0.5, 0.0],
        [0.5, 0.5, 0.0],
        [0.5, 0.5, 1.0],
    );

    // Bottom (z=0) and top (z=1) faces.
    batch.quad(
        [-0.5, 0.5, 0.0],
        [-0.5, -0.5, 0.0],
        [0.5, -0.5, 0.0],
        [0.5, 0.5, 0.0],
    );
    batch.quad(
        [-0.5, 0.5, 1.0],
        [-0.5, -0.5, 1.0],
        [0.5, -0.5, 1.0],
        [0.5, 0.5, 1.0],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_cube_emits_six_faces() {
        let mut batch = SceneBatch::new();
        draw_unit_cube(&mut batch);
        assert_eq!(batch.finish().len(), 36);
    }

    #[test]
    fn neutral_pose_keeps_both_feet_on_the_ground() {
        let mut batch = SceneBatch::new();
        draw_body(&mut batch, &FigurePose::neutral());
        let min_z = batch
            .finish()
            .iter()
            .map(|v| v.position[2])
            .fold(f32::INFINITY, f32::min);
        assert_relative_eq!(min_z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn swing_keeps_planted_foot_grounded() {
        let pose = FigurePose {
            swing_deg: 60.0,
            ..FigurePose::neutral()
        };
        let mut batch = SceneBatch::new();
        draw_body(&mut batch, &pose);
        let vertices = batch.finish();

        // The planted foot still touches z=0.
        let min_z = vertices
            .iter()
            .map(|v| v.position[2])
            .fold(f32::INFINITY, f32::min);
        assert_relative_eq!(min_z, 0.0, epsilon = 1e-3);

        let max_reach = vertices
            .iter()
            .map(|v| v.position[1].abs())
            .fold(0.0f32, f32::max);
        assert!(max_reach > 10.0, "swung limbs should reach away from the body");
    }

    #[test]
    fn head_tops_the_figure() {
        let mut batch = SceneBatch::new();
        draw_body(&mut batch, &FigurePose::neutral());
        let max_z = batch
            .finish()
            .iter()
            .map(|v| v.position[2])
            .fold(f32::NEG_INFINITY, f32::max);
        // Head offset 38.5 plus its unit-cube height scaled to 4.
        assert_relative_eq!(max_z, 42.5, epsilon = 1e-4);
    }
}
