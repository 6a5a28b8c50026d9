use crate::device::{Driver, ProgramId};

use super::compiler::{Shader, ShaderStage, compile};
use super::ShaderError;

/// A linked (or failed-to-link) program object.
#[derive(Debug, PartialEq, Eq)]
pub struct Program {
    id: ProgramId,
}

impl Program {
    pub fn id(&self) -> ProgramId {
        self.id
    }

    pub fn delete<D: Driver + ?Sized>(self, driver: &D) {
        driver.delete_program(self.id);
    }
}

/// Result of building a program.
///
/// `program` is handed back even when `status` is an error, as long as the
/// program object itself could be allocated: a program that failed to link
/// still becomes the active program and renders nothing useful.
#[derive(Debug)]
pub struct LinkedProgram {
    pub program: Option<Program>,
    pub status: Result<(), ShaderError>,
}

impl LinkedProgram {
    /// True when the program linked and can be drawn with.
    pub fn is_usable(&self) -> bool {
        self.program.is_some() && self.status.is_ok()
    }
}

/// Links the given shaders into a new program.
///
/// A `None` shader is a stage that failed to compile; it is never attached and
/// the link is left to fail in the driver. Shaders are detached and deleted
/// after linking whatever the outcome.
pub fn link<D: Driver + ?Sized>(
    driver: &D,
    vertex: Option<Shader>,
    fragment: Option<Shader>,
) -> LinkedProgram {
    let shaders: Vec<Shader> = vertex.into_iter().chain(fragment).collect();

    let id = match driver.create_program() {
        Ok(id) => id,
        Err(reason) => {
            log::error!("failed to allocate shader program: {reason}");
            for shader in shaders {
                shader.delete(driver);
            }
            return LinkedProgram {
                program: None,
                status: Err(ShaderError::Allocation {
                    object: "program object",
                    reason,
                }),
            };
        }
    };

    for shader in &shaders {
        driver.attach_shader(id, shader.id);
    }

    driver.link_program(id);
    driver.validate_program(id);

    for shader in &shaders {
        driver.detach_shader(id, shader.id);
    }
    for shader in shaders {
        shader.delete(driver);
    }

    let status = if driver.program_link_status(id) {
        log::debug!("shader program {:?} linked", id);
        Ok(())
    } else {
        let log = driver.program_info_log(id);
        log::error!("shader program did not link!\n{}", log.trim_end());
        Err(ShaderError::Link { log })
    };

    LinkedProgram {
        program: Some(Program { id }),
        status,
    }
}

/// Compiles both stages and links them.
///
/// The first failure, compile or link, becomes the status.
pub fn build_program<D: Driver + ?Sized>(
    driver: &D,
    vertex_source: &str,
    fragment_source: &str,
) -> LinkedProgram {
    let vertex = compile(driver, ShaderStage::Vertex, vertex_source);
    let fragment = compile(driver, ShaderStage::Fragment, fragment_source);

    let compile_error = match (&vertex, &fragment) {
        (Err(e), _) | (Ok(_), Err(e)) => Some(e.clone()),
        _ => None,
    };

    let mut linked = link(driver, vertex.ok(), fragment.ok());
    if let Some(err) = compile_error {
        linked.status = Err(err);
    }
    linked
}
