//! Pixel-space types shared by the context and the frame loop.

mod viewport;

pub use viewport::Viewport;
