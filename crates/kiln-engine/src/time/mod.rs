//! Time subsystem.
//!
//! The harness has no wall-clock time input; its shaders animate off a frame
//! counter that the frame loop advances once per presented frame.

mod tick;

pub use tick::TickCounter;
