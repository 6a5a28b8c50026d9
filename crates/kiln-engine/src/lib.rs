//! Kiln engine crate.
//!
//! Window and GL context bring-up, shader program lifecycle and the frame loop
//! behind the `kiln` harness binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod shader;
