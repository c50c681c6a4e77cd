mod batch;
mod figure;
mod ground;

pub use batch::SceneBatch;

use crate::animation::{FigurePose, ORBIT_RADIUS};
use crate::renderer::SceneVertex;

/// Per-frame scene toggles, fed from the persisted display settings.
pub struct SceneOptions {
    pub show_path: bool,
    /// Path disc color, linear RGB in `[0, 1]`.
    pub path_color: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_path: true,
            path_color: [214.0 / 255.0, 213.0 / 255.0, 183.0 / 255.0],
        }
    }
}

/// Rebuilds the whole frame: the path disc at the origin, then the figure
/// rotated to its orbit angle and pushed out to the path radius. The
/// rotate-then-translate order means the figure faces radially outward
/// rather than along its direction of travel, matching the original motion.
pub fn build_scene(pose: &FigurePose, options: &SceneOptions) -> Vec<SceneVertex> {
    let mut batch = SceneBatch::new();

    if options.show_path {
        ground::draw_path_disc(&mut batch, ORBIT_RADIUS, options.path_color);
    }

    batch.push();
    batch.rotate_z_deg(pose.orbit_deg);
    batch.translate(ORBIT_RADIUS, 0.0, 0.0);
    figure::draw_body(&mut batch, pose);
    batch.pop();

    batch.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Side;
    use approx::assert_relative_eq;

    fn centroid(vertices: &[SceneVertex]) -> [f32; 3] {
        let mut sum = [0.0f32; 3];
        for v in vertices {
            for (acc, p) in sum.iter_mut().zip(v.position) {
                *acc += p;
            }
        }
        sum.map(|s| s / vertices.len() as f32)
    }

    fn figure_only(pose: &FigurePose) -> Vec<SceneVertex> {
        let options = SceneOptions {
            show_path: false,
            ..SceneOptions::default()
        };
        build_scene(pose, &options)
    }

    #[test]
    fn vertex_counts_are_fixed_per_frame() {
        // 15 cuboid body parts at 36 vertices each.
        let figure = figure_only(&FigurePose::neutral());
        assert_eq!(figure.len(), 15 * 36);

        // The 100-gon disc fans into 98 triangles.
        let full = build_scene(&FigurePose::neutral(), &SceneOptions::default());
        assert_eq!(full.len(), 15 * 36 + 98 * 3);
    }

    #[test]
    fn neutral_figure_sits_on_positive_x_axis() {
        let vertices = figure_only(&FigurePose::neutral());
        let center = centroid(&vertices);
        assert!((center[0] - ORBIT_RADIUS).abs() < 2.0);
        assert_relative_eq!(center[1], 0.0, epsilon = 1.0);
        assert!(center[2] > 0.0);
    }

    #[test]
    fn orbit_angle_rotates_figure_about_vertical_axis() {
        let quarter = FigurePose {
            orbit_deg: 90.0,
            ..FigurePose::neutral()
        };
        let center = centroid(&figure_only(&quarter));
        assert_relative_eq!(center[0], 0.0, epsilon = 1.0);
        assert!((center[1] - ORBIT_RADIUS).abs() < 2.0);
    }

    #[test]
    fn lifted_side_mirrors_the_figure() {
        let left = FigurePose {
            lifted: Side::Left,
            swing_deg: 45.0,
            ..FigurePose::neutral()
        };
        let right = FigurePose {
            lifted: Side::Right,
            ..left
        };
        let left_vertices = figure_only(&left);
        let right_vertices = figure_only(&right);
        assert_eq!(left_vertices.len(), right_vertices.len());
        assert_ne!(
            left_vertices.iter().map(|v| v.position).collect::<Vec<_>>(),
            right_vertices.iter().map(|v| v.position).collect::<Vec<_>>()
        );
    }
}
