//! Render-side GPU objects: the placeholder geometry and the active program.

mod geometry;
mod resources;

pub use geometry::{Geometry, PLACEHOLDER_VERTICES};
pub use resources::RenderResources;
