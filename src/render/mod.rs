pub mod surface;
pub mod canvas;
pub mod draw;

pub use surface::Renderer;
pub use canvas::CanvasRenderer;
pub use draw::{draw_garden, draw_plant};
