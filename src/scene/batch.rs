use nalgebra_glm as glm;

use crate::renderer::SceneVertex;

/// Immediate-mode style geometry accumulator: an explicit matrix stack plus
/// a current flat color, collecting pre-transformed triangles for one frame.
/// Vertices are transformed on the CPU at emission time, so there is no
/// retained geometry and no hidden global transform state.
pub struct SceneBatch {
    current: glm::Mat4,
    saved: Vec<glm::Mat4>,
    color: [f32; 3],
    vertices: Vec<SceneVertex>,
}

impl SceneBatch {
    pub fn new() -> Self {
        Self {
            current: glm::Mat4::identity(),
            saved: Vec::new(),
            color: [1.0, 1.0, 1.0],
            vertices: Vec::new(),
        }
    }

    /// Saves the current transform.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the transform saved by the matching `push`.
    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(matrix) => self.current = matrix,
            None => debug_assert!(false, "pop without matching push"),
        }
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.current = glm::translate(&self.current, &glm::vec3(x, y, z));
    }

    pub fn rotate_x_deg(&mut self, degrees: f32) {
        self.current = glm::rotate(&self.current, degrees.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
    }

    pub fn rotate_z_deg(&mut self, degrees: f32) {
        self.current = glm::rotate(&self.current, degrees.to_radians(), &glm::vec3(0.0, 0.0, 1.0));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.current = glm::scale(&self.current, &glm::vec3(x, y, z));
    }

    /// Flat color from an 8-bit RGB triple.
    pub fn set_color_u8(&mut self, r: u8, g: u8, b: u8) {
        self.color = [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0];
    }

    /// Flat color in linear `[0, 1]` components.
    pub fn set_color(&mut self, rgb: [f32; 3]) {
        self.color = rgb;
    }

    pub fn triangle(&mut self, a: [f32; 3], b: [f32; 3], c: [f32; 3]) {
        self.vertex(a);
        self.vertex(b);
        self.vertex(c);
    }

    /// Emits a quad face as two triangles sharing the `a`-`c` diagonal.
    pub fn quad(&mut self, a: [f32; 3], b: [f32; 3], c: [f32; 3], d: [f32; 3]) {
        self.triangle(a, b, c);
        self.triangle(a, c, d);
    }

    fn vertex(&mut self, p: [f32; 3]) {
        let transformed = self.current * glm::vec4(p[0], p[1], p[2], 1.0);
        self.vertices.push(SceneVertex {
            position: [transformed.x, transformed.y, transformed.z],
            color: self.color,
        });
    }

    pub fn finish(self) -> Vec<SceneVertex> {
        self.vertices
    }
}
