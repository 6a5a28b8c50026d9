use super::ShaderStage;

/// Failures in the shader-program lifecycle.
///
/// None of these carry a live driver object: whatever was allocated for the
/// failed step has already been released when the error is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to allocate {object}: {reason}")]
    Allocation { object: &'static str, reason: String },

    #[error("{stage} compilation failed!\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program did not link!\n{log}")]
    Link { log: String },
}
