//! Recording `Driver` for tests that need no GL context.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroU32;

use super::driver::{
    BufferId, Driver, GlInfo, ProgramId, ShaderId, Topology, UniformLocation, VertexArrayId,
};
use crate::coords::Viewport;
use crate::core::Present;
use crate::shader::ShaderStage;

pub(crate) const COMPILE_ERROR_LOG: &str = "0:1(1): error: syntax error, unexpected end of file";
pub(crate) const LINK_ERROR_LOG: &str = "error: linking with uncompiled/unspecialized shader";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    AttachShader(ProgramId, ShaderId),
    DetachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    ValidateProgram(ProgramId),
    UseProgram(Option<ProgramId>),
    DeleteProgram(ProgramId),
    CreateVertexArray(VertexArrayId),
    BindVertexArray(Option<VertexArrayId>),
    DeleteVertexArray(VertexArrayId),
    CreateBuffer(BufferId),
    BindArrayBuffer(Option<BufferId>),
    UploadStatic(Vec<u8>),
    DeleteBuffer(BufferId),
    IntegerAttribute(u32, i32),
    Uniform1i(Option<UniformLocation>, i32),
    Viewport(Viewport),
    DrawArrays(Topology, i32, i32),
}

/// Driver double that tracks object lifetimes.
///
/// A shader compiles when its source is non-empty and its stage is not marked
/// as failing. A program links when exactly one compiled vertex and one
/// compiled fragment shader are attached and link failure is not forced.
#[derive(Default)]
pub(crate) struct MockDriver {
    next_id: Cell<u32>,
    calls: RefCell<Vec<Call>>,

    shaders: RefCell<HashMap<ShaderId, MockShader>>,
    live_shaders: RefCell<HashSet<ShaderId>>,
    shader_deletes: RefCell<HashMap<ShaderId, u32>>,
    invalid_attaches: Cell<u32>,

    live_programs: RefCell<HashSet<ProgramId>>,
    attached: RefCell<HashMap<ProgramId, Vec<ShaderId>>>,
    linked: RefCell<HashSet<ProgramId>>,

    failing_stages: RefCell<HashSet<ShaderStage>>,
    fail_link: Cell<bool>,
    fail_program_alloc: Cell<bool>,
    omit_time_uniform: Cell<bool>,
}

#[derive(Default)]
struct MockShader {
    stage: Option<ShaderStage>,
    source: String,
    compiled: bool,
}

impl MockDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_compile(&self, stage: ShaderStage) {
        self.failing_stages.borrow_mut().insert(stage);
    }

    pub(crate) fn fail_link(&self) {
        self.fail_link.set(true);
    }

    pub(crate) fn fail_program_alloc(&self) {
        self.fail_program_alloc.set(true);
    }

    pub(crate) fn omit_time_uniform(&self) {
        self.omit_time_uniform.set(true);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn live_shader_count(&self) -> usize {
        self.live_shaders.borrow().len()
    }

    pub(crate) fn live_program_count(&self) -> usize {
        self.live_programs.borrow().len()
    }

    pub(crate) fn delete_count(&self, shader: ShaderId) -> u32 {
        self.shader_deletes.borrow().get(&shader).copied().unwrap_or(0)
    }

    pub(crate) fn invalid_attaches(&self) -> u32 {
        self.invalid_attaches.get()
    }

    pub(crate) fn created_shaders(&self) -> Vec<ShaderId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::CreateShader(_, id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn draw_calls(&self) -> Vec<(Topology, i32, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DrawArrays(t, first, count) => Some((*t, *first, *count)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn uniform_pushes(&self) -> Vec<(Option<UniformLocation>, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Uniform1i(loc, v) => Some((*loc, *v)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> NonZeroU32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        NonZeroU32::new(id).unwrap()
    }
}

impl Driver for MockDriver {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, String> {
        let id = ShaderId(self.alloc());
        self.shaders.borrow_mut().insert(
            id,
            MockShader {
                stage: Some(stage),
                ..MockShader::default()
            },
        );
        self.live_shaders.borrow_mut().insert(id);
        self.record(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        if let Some(s) = self.shaders.borrow_mut().get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: ShaderId) {
        let failing = self.failing_stages.borrow();
        if let Some(s) = self.shaders.borrow_mut().get_mut(&shader) {
            let stage_ok = s.stage.is_some_and(|stage| !failing.contains(&stage));
            s.compiled = stage_ok && !s.source.trim().is_empty();
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.shaders.borrow().get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            COMPILE_ERROR_LOG.to_string()
        }
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.live_shaders.borrow_mut().remove(&shader);
        *self.shader_deletes.borrow_mut().entry(shader).or_insert(0) += 1;
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<ProgramId, String> {
        if self.fail_program_alloc.get() {
            return Err("out of memory".to_string());
        }
        let id = ProgramId(self.alloc());
        self.live_programs.borrow_mut().insert(id);
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        if !self.live_shaders.borrow().contains(&shader) {
            self.invalid_attaches.set(self.invalid_attaches.get() + 1);
        }
        self.attached
            .borrow_mut()
            .entry(program)
            .or_default()
            .push(shader);
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: ProgramId, shader: ShaderId) {
        if let Some(list) = self.attached.borrow_mut().get_mut(&program) {
            list.retain(|s| *s != shader);
        }
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: ProgramId) {
        let attached = self.attached.borrow();
        let shaders = self.shaders.borrow();
        let stages: Vec<ShaderStage> = attached
            .get(&program)
            .into_iter()
            .flatten()
            .filter_map(|id| shaders.get(id))
            .filter(|s| s.compiled)
            .filter_map(|s| s.stage)
            .collect();

        let complete = stages.len() == 2
            && stages.contains(&ShaderStage::Vertex)
            && stages.contains(&ShaderStage::Fragment);

        if complete && !self.fail_link.get() {
            self.linked.borrow_mut().insert(program);
        }
        self.record(Call::LinkProgram(program));
    }

    fn validate_program(&self, program: ProgramId) {
        self.record(Call::ValidateProgram(program));
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        self.linked.borrow().contains(&program)
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            LINK_ERROR_LOG.to_string()
        }
    }

    fn use_program(&self, program: Option<ProgramId>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: ProgramId) {
        self.live_programs.borrow_mut().remove(&program);
        self.record(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, String> {
        let id = VertexArrayId(self.alloc());
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<VertexArrayId>) {
        self.record(Call::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: VertexArrayId) {
        self.record(Call::DeleteVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<BufferId, String> {
        let id = BufferId(self.alloc());
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<BufferId>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn upload_static_array_buffer(&self, data: &[u8]) {
        self.record(Call::UploadStatic(data.to_vec()));
    }

    fn delete_buffer(&self, buffer: BufferId) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn enable_integer_attribute(&self, index: u32, components: i32) {
        self.record(Call::IntegerAttribute(index, components));
    }

    fn uniform_location(&self, program: ProgramId, _name: &str) -> Option<UniformLocation> {
        if self.program_link_status(program) && !self.omit_time_uniform.get() {
            Some(UniformLocation(0))
        } else {
            None
        }
    }

    fn uniform_1_i32(&self, location: Option<UniformLocation>, value: i32) {
        self.record(Call::Uniform1i(location, value));
    }

    fn viewport(&self, viewport: Viewport) {
        self.record(Call::Viewport(viewport));
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(Call::DrawArrays(topology, first, count));
    }

    fn info(&self) -> GlInfo {
        GlInfo {
            vendor: "kiln".to_string(),
            renderer: "mock".to_string(),
            version: "3.3 (Core Profile)".to_string(),
            shading_language: "3.30".to_string(),
        }
    }
}

/// Presentation double counting buffer swaps.
#[derive(Default)]
pub(crate) struct MockSurface {
    swaps: Cell<u32>,
}

impl MockSurface {
    pub(crate) fn swaps(&self) -> u32 {
        self.swaps.get()
    }
}

impl Present for MockSurface {
    fn present(&self) {
        self.swaps.set(self.swaps.get() + 1);
    }
}
