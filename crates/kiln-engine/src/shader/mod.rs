//! Shader-program lifecycle: source loading, compilation, linking.
//!
//! Ownership follows the driver objects. `compile` hands out a [`Shader`],
//! `link` consumes it (the object is deleted right after linking) and hands
//! out a [`Program`], which the caller keeps until teardown.

mod compiler;
mod error;
mod linker;
mod source;

pub use compiler::{Shader, ShaderStage, compile};
pub use error::ShaderError;
pub use linker::{LinkedProgram, Program, build_program, link};
pub use source::{ShaderPaths, ShaderSources, load_source};
