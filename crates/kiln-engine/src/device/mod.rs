//! Graphics device: window + GL context bring-up and the driver seam.
//!
//! This module is responsible for:
//! - creating the window, GL config, context and window surface
//! - resolving GL entry points into a [`GlowDriver`]
//! - recording every bring-up step in a [`SetupReport`]

mod context;
mod driver;
mod init;
#[cfg(test)]
pub(crate) mod mock;
mod setup;

pub use context::GraphicsContext;
pub use driver::{
    BufferId, Driver, GlInfo, GlowDriver, ProgramId, ShaderId, Topology, UniformLocation,
    VertexArrayId,
};
pub use init::ContextConfig;
pub use setup::{SetupError, SetupReport, SetupState, SetupStep, StepOutcome};
