pub mod camera;
mod renderer;
mod vertex;

pub use renderer::Renderer;
pub use vertex::SceneVertex;
