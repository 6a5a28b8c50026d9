use std::num::NonZeroU32;

use glow::HasContext;

use crate::coords::Viewport;
use crate::shader::ShaderStage;

/// Driver-side shader object name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub NonZeroU32);

/// Driver-side program object name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(pub NonZeroU32);

/// Driver-side vertex array object name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexArrayId(pub NonZeroU32);

/// Driver-side buffer object name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub NonZeroU32);

/// Location of a uniform in a linked program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation(pub u32);

/// Primitive topology for `draw_arrays`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    TriangleStrip,
}

impl Topology {
    fn gl_enum(self) -> u32 {
        match self {
            Topology::TriangleStrip => glow::TRIANGLE_STRIP,
        }
    }
}

/// Identification strings reported by the driver.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language: String,
}

/// The graphics driver entry points the harness uses.
///
/// Object creation returns the driver's error text on failure. Info-log
/// queries return an empty string when the driver has no log.
///
/// All calls require the context that produced the driver to be current on
/// the calling thread.
pub trait Driver {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, String>;
    fn shader_source(&self, shader: ShaderId, source: &str);
    fn compile_shader(&self, shader: ShaderId);
    fn shader_compile_status(&self, shader: ShaderId) -> bool;
    fn shader_info_log(&self, shader: ShaderId) -> String;
    fn delete_shader(&self, shader: ShaderId);

    fn create_program(&self) -> Result<ProgramId, String>;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);
    fn detach_shader(&self, program: ProgramId, shader: ShaderId);
    fn link_program(&self, program: ProgramId);
    fn validate_program(&self, program: ProgramId);
    fn program_link_status(&self, program: ProgramId) -> bool;
    fn program_info_log(&self, program: ProgramId) -> String;
    fn use_program(&self, program: Option<ProgramId>);
    fn delete_program(&self, program: ProgramId);

    fn create_vertex_array(&self) -> Result<VertexArrayId, String>;
    fn bind_vertex_array(&self, vao: Option<VertexArrayId>);
    fn delete_vertex_array(&self, vao: VertexArrayId);

    fn create_buffer(&self) -> Result<BufferId, String>;
    fn bind_array_buffer(&self, buffer: Option<BufferId>);
    /// Uploads `data` into the bound array buffer with static usage.
    fn upload_static_array_buffer(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: BufferId);

    /// Enables attribute `index` and points it at the bound array buffer as
    /// tightly packed `i32` components.
    fn enable_integer_attribute(&self, index: u32, components: i32);

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation>;
    /// Sets an integer uniform on the bound program; `None` is a no-op.
    fn uniform_1_i32(&self, location: Option<UniformLocation>, value: i32);

    fn viewport(&self, viewport: Viewport);
    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);

    fn info(&self) -> GlInfo;
}

/// `Driver` over a loaded `glow::Context`.
pub struct GlowDriver {
    gl: glow::Context,
}

impl GlowDriver {
    /// Wraps a context whose function pointers were resolved against the
    /// context that is current on this thread.
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }
}

impl Driver for GlowDriver {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { self.gl.create_shader(kind) }.map(|s| ShaderId(s.0))
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        unsafe { self.gl.shader_source(glow::NativeShader(shader.0), source) }
    }

    fn compile_shader(&self, shader: ShaderId) {
        unsafe { self.gl.compile_shader(glow::NativeShader(shader.0)) }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        unsafe { self.gl.get_shader_compile_status(glow::NativeShader(shader.0)) }
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        unsafe { self.gl.get_shader_info_log(glow::NativeShader(shader.0)) }
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe { self.gl.delete_shader(glow::NativeShader(shader.0)) }
    }

    fn create_program(&self) -> Result<ProgramId, String> {
        unsafe { self.gl.create_program() }.map(|p| ProgramId(p.0))
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe {
            self.gl
                .attach_shader(glow::NativeProgram(program.0), glow::NativeShader(shader.0))
        }
    }

    fn detach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe {
            self.gl
                .detach_shader(glow::NativeProgram(program.0), glow::NativeShader(shader.0))
        }
    }

    fn link_program(&self, program: ProgramId) {
        unsafe { self.gl.link_program(glow::NativeProgram(program.0)) }
    }

    fn validate_program(&self, program: ProgramId) {
        unsafe { self.gl.validate_program(glow::NativeProgram(program.0)) }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        unsafe { self.gl.get_program_link_status(glow::NativeProgram(program.0)) }
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        unsafe { self.gl.get_program_info_log(glow::NativeProgram(program.0)) }
    }

    fn use_program(&self, program: Option<ProgramId>) {
        unsafe { self.gl.use_program(program.map(|p| glow::NativeProgram(p.0))) }
    }

    fn delete_program(&self, program: ProgramId) {
        unsafe { self.gl.delete_program(glow::NativeProgram(program.0)) }
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, String> {
        unsafe { self.gl.create_vertex_array() }.map(|v| VertexArrayId(v.0))
    }

    fn bind_vertex_array(&self, vao: Option<VertexArrayId>) {
        unsafe {
            self.gl
                .bind_vertex_array(vao.map(|v| glow::NativeVertexArray(v.0)))
        }
    }

    fn delete_vertex_array(&self, vao: VertexArrayId) {
        unsafe { self.gl.delete_vertex_array(glow::NativeVertexArray(vao.0)) }
    }

    fn create_buffer(&self) -> Result<BufferId, String> {
        unsafe { self.gl.create_buffer() }.map(|b| BufferId(b.0))
    }

    fn bind_array_buffer(&self, buffer: Option<BufferId>) {
        unsafe {
            self.gl
                .bind_buffer(glow::ARRAY_BUFFER, buffer.map(|b| glow::NativeBuffer(b.0)))
        }
    }

    fn upload_static_array_buffer(&self, data: &[u8]) {
        unsafe {
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn delete_buffer(&self, buffer: BufferId) {
        unsafe { self.gl.delete_buffer(glow::NativeBuffer(buffer.0)) }
    }

    fn enable_integer_attribute(&self, index: u32, components: i32) {
        unsafe {
            self.gl.enable_vertex_attrib_array(index);
            self.gl
                .vertex_attrib_pointer_i32(index, components, glow::INT, 0, 0);
        }
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation> {
        unsafe {
            self.gl
                .get_uniform_location(glow::NativeProgram(program.0), name)
        }
        .map(|l| UniformLocation(l.0))
    }

    fn uniform_1_i32(&self, location: Option<UniformLocation>, value: i32) {
        let location = location.map(|l| glow::NativeUniformLocation(l.0));
        unsafe { self.gl.uniform_1_i32(location.as_ref(), value) }
    }

    fn viewport(&self, viewport: Viewport) {
        let (x, y, w, h) = viewport.gl_rect();
        unsafe { self.gl.viewport(x, y, w, h) }
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(topology.gl_enum(), first, count) }
    }

    fn info(&self) -> GlInfo {
        unsafe {
            GlInfo {
                vendor: self.gl.get_parameter_string(glow::VENDOR),
                renderer: self.gl.get_parameter_string(glow::RENDERER),
                version: self.gl.get_parameter_string(glow::VERSION),
                shading_language: self
                    .gl
                    .get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            }
        }
    }
}
