use crate::device::Driver;
use crate::shader::{LinkedProgram, Program, ShaderSources, build_program};

use super::geometry::Geometry;

/// GPU objects owned by the composition root.
///
/// Holds at most one program: building a new one replaces (and deletes) the
/// previous occupant of the slot.
#[derive(Debug, Default)]
pub struct RenderResources {
    program: Option<Program>,
    geometry: Option<Geometry>,
}

impl RenderResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the geometry, builds the program from `sources` and makes it
    /// current.
    ///
    /// Compile and link failures are logged and leave a degraded program in
    /// the slot; they do not fail setup. Returns `false` only when a driver
    /// object could not be allocated.
    pub fn setup<D: Driver + ?Sized>(&mut self, driver: &D, sources: &ShaderSources) -> bool {
        let mut ok = true;

        match Geometry::upload(driver) {
            Ok(geometry) => {
                if let Some(old) = self.geometry.replace(geometry) {
                    old.delete(driver);
                }
            }
            Err(e) => {
                log::error!("failed to upload geometry: {e}");
                ok = false;
            }
        }

        let linked = build_program(driver, &sources.vertex, &sources.fragment);
        ok &= linked.program.is_some();
        self.install(driver, linked);

        ok
    }

    /// Puts the program of `linked` in the active slot and binds it.
    pub fn install<D: Driver + ?Sized>(&mut self, driver: &D, linked: LinkedProgram) {
        if let Err(e) = &linked.status {
            log::warn!("rendering with a degraded shader program: {e}");
        }

        if let Some(old) = self.program.take() {
            old.delete(driver);
        }
        self.program = linked.program;
        driver.use_program(self.program.as_ref().map(Program::id));
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Deletes every owned object. Safe to call more than once.
    pub fn release<D: Driver + ?Sized>(&mut self, driver: &D) {
        if let Some(program) = self.program.take() {
            driver.use_program(None);
            program.delete(driver);
        }
        if let Some(geometry) = self.geometry.take() {
            geometry.delete(driver);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::{Call, MockDriver};
    use crate::shader::ShaderStage;

    fn sources() -> ShaderSources {
        ShaderSources {
            vertex: "void main() {}\n".to_string(),
            fragment: "void main() {}\n".to_string(),
        }
    }

    #[test]
    fn setup_binds_the_linked_program() {
        let driver = MockDriver::new();
        let mut res = RenderResources::new();

        assert!(res.setup(&driver, &sources()));

        let id = res.program().unwrap().id();
        assert!(driver.calls().contains(&Call::UseProgram(Some(id))));
        assert!(res.geometry().is_some());
        assert_eq!(driver.live_shader_count(), 0);
    }

    #[test]
    fn compile_failure_does_not_fail_setup() {
        let driver = MockDriver::new();
        driver.fail_compile(ShaderStage::Vertex);
        let mut res = RenderResources::new();

        assert!(res.setup(&driver, &sources()));
        assert!(res.program().is_some());
    }

    #[test]
    fn program_allocation_failure_fails_setup() {
        let driver = MockDriver::new();
        driver.fail_program_alloc();
        let mut res = RenderResources::new();

        assert!(!res.setup(&driver, &sources()));
        assert!(res.program().is_none());
        assert!(driver.calls().contains(&Call::UseProgram(None)));
    }

    #[test]
    fn rebuilding_replaces_the_single_program() {
        let driver = MockDriver::new();
        let mut res = RenderResources::new();
        res.setup(&driver, &sources());
        let first = res.program().unwrap().id();

        res.setup(&driver, &sources());

        assert_ne!(res.program().unwrap().id(), first);
        assert!(driver.calls().contains(&Call::DeleteProgram(first)));
        assert_eq!(driver.live_program_count(), 1);
    }

    #[test]
    fn release_is_idempotent() {
        let driver = MockDriver::new();
        let mut res = RenderResources::new();
        res.setup(&driver, &sources());

        res.release(&driver);
        let after_first = driver.calls().len();
        res.release(&driver);

        assert_eq!(driver.calls().len(), after_first);
        assert_eq!(driver.live_program_count(), 0);
        assert!(res.program().is_none());
        assert!(res.geometry().is_none());
    }
}
