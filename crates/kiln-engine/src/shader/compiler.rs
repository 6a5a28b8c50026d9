use std::fmt;

use crate::device::{Driver, ShaderId};

use super::ShaderError;

/// Pipeline stage a shader object is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "GL_VERTEX_SHADER",
            ShaderStage::Fragment => "GL_FRAGMENT_SHADER",
        })
    }
}

/// A compiled shader object.
///
/// Not `Clone`: the object is deleted by whoever consumes it, normally
/// [`link`](super::link).
#[derive(Debug, PartialEq, Eq)]
pub struct Shader {
    pub(crate) id: ShaderId,
    stage: ShaderStage,
}

impl Shader {
    pub fn id(&self) -> ShaderId {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Deletes the shader object without linking it.
    pub fn delete<D: Driver + ?Sized>(self, driver: &D) {
        driver.delete_shader(self.id);
    }
}

/// Compiles `source` as a shader of the given stage.
///
/// On failure the driver's info log is logged with the stage tag, the shader
/// object is deleted, and the log is returned in the error.
pub fn compile<D: Driver + ?Sized>(
    driver: &D,
    stage: ShaderStage,
    source: &str,
) -> Result<Shader, ShaderError> {
    let id = driver
        .create_shader(stage)
        .map_err(|reason| ShaderError::Allocation {
            object: "shader object",
            reason,
        })?;

    driver.shader_source(id, source);
    driver.compile_shader(id);

    if !driver.shader_compile_status(id) {
        let log = driver.shader_info_log(id);
        log::error!("{stage} compilation failed!\n{}", log.trim_end());
        driver.delete_shader(id);
        return Err(ShaderError::Compile { stage, log });
    }

    log::debug!("compiled {stage} ({} bytes of source)", source.len());
    Ok(Shader { id, stage })
}
