use std::f32::consts::TAU;

use super::SceneBatch;

/// Rim vertices used to approximate the disc.
const DISC_SEGMENTS: usize = 100;

/// Filled regular polygon in the ground (x/y) plane, centered at the origin.
/// Purely decorative; it marks the circle the figure walks on.
pub fn draw_path_disc(batch: &mut SceneBatch, radius: f32, color: [f32; 3]) {
    batch.push();
    batch.set_color(color);

    let rim = |i: usize| {
        let theta = TAU * i as f32 / DISC_SEGMENTS as f32;
        [radius * theta.cos(), radius * theta.sin(), 0.0]
    };

    // Fan from the first rim vertex, like a convex GL_POLYGON.
    for i in 1..DISC_SEGMENTS - 1 {
        batch.triangle(rim(0), rim(i), rim(i + 1));
    }

    batch.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_fans_into_fixed_triangle_count() {
        let mut batch = SceneBatch::new();
        draw_path_disc(&mut batch, 80.0, [1.0; 3]);
        assert_eq!(batch.finish().len(), (DISC_SEGMENTS - 2) * 3);
    }

    #[test]
    fn disc_lies_in_ground_plane_at_given_radius() {
        let mut batch = SceneBatch::new();
        draw_path_disc(&mut batch, 80.0, [1.0; 3]);
        for v in batch.finish() {
            assert_eq!(v.position[2], 0.0);
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!(r <= 80.0 + 1e-3);
        }
    }
}
