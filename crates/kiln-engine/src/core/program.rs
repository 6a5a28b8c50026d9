use winit::event_loop::ActiveEventLoop;

use crate::device::{GraphicsContext, SetupReport};
use crate::input::LoopEvent;
use crate::render::RenderResources;

use super::app::LoopControl;
use super::config::HarnessConfig;
use super::frame_loop::FrameLoop;

/// Composition root: the context, the GPU objects drawn with it and the loop
/// that drives them.
///
/// Built once per run by the runtime. GPU objects are released before the
/// context that owns them.
pub struct GraphicsProgram {
    resources: RenderResources,
    frame_loop: FrameLoop,
    context: GraphicsContext,
}

impl GraphicsProgram {
    /// Brings up the context and runs render setup.
    ///
    /// Never fails; inspect [`GraphicsProgram::report`] for the outcome.
    pub fn new(event_loop: &ActiveEventLoop, config: &HarnessConfig) -> Self {
        let mut context = GraphicsContext::create(event_loop, &config.context);
        let mut resources = RenderResources::new();

        let sources = config.shaders.load();
        context.finish_setup(|driver| resources.setup(driver, &sources));

        let frame_loop = FrameLoop::new(context.viewport(), config.quit_key, config.quit_policy);

        Self {
            resources,
            frame_loop,
            context,
        }
    }

    pub fn report(&self) -> &SetupReport {
        self.context.report()
    }

    pub fn tick(&self) -> i32 {
        self.frame_loop.tick()
    }

    /// Runs one loop iteration over `events`.
    pub fn frame<I>(&mut self, events: I) -> LoopControl
    where
        I: IntoIterator<Item = LoopEvent>,
    {
        self.frame_loop.iterate(
            events,
            self.context.driver(),
            &self.context,
            &self.resources,
        )
    }

    pub fn request_redraw(&self) {
        if let Some(window) = self.context.window() {
            window.request_redraw();
        }
    }

    /// Deletes the program and geometry, then tears the context down.
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(driver) = self.context.driver() {
            self.resources.release(driver);
        }
        self.context.teardown();
    }
}

impl Drop for GraphicsProgram {
    fn drop(&mut self) {
        self.teardown();
    }
}
