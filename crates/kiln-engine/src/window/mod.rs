//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and drives the [`GraphicsProgram`] from it.
//!
//! [`GraphicsProgram`]: crate::core::GraphicsProgram

mod runtime;

pub use runtime::Runtime;
