use crate::device::ContextConfig;
use crate::input::Key;
use crate::shader::ShaderPaths;

use super::app::QuitKeyPolicy;

/// Everything the harness needs to build and drive a [`GraphicsProgram`].
///
/// [`GraphicsProgram`]: super::GraphicsProgram
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub context: ContextConfig,
    pub shaders: ShaderPaths,
    pub quit_key: Key,
    pub quit_policy: QuitKeyPolicy,
    /// Abort startup when any setup step fails instead of running degraded.
    pub strict: bool,
}

impl HarnessConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            context: ContextConfig {
                width,
                height,
                ..ContextConfig::default()
            },
            ..Self::default()
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            context: ContextConfig::default(),
            shaders: ShaderPaths::default(),
            quit_key: Key::Q,
            quit_policy: QuitKeyPolicy::Graceful,
            strict: false,
        }
    }
}
