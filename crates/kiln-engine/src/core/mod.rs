//! Per-frame loop and the composition root that owns it.
//!
//! The runtime feeds [`GraphicsProgram::frame`] with translated events and acts
//! on the returned [`LoopControl`].

mod app;
mod config;
mod frame_loop;
mod program;

pub use app::{LoopControl, Present, QuitKeyPolicy};
pub use config::HarnessConfig;
pub use frame_loop::{FrameLoop, STRIP_VERTEX_COUNT, TIME_UNIFORM};
pub use program::GraphicsProgram;
