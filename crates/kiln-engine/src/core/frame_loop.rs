use crate::coords::Viewport;
use crate::device::{Driver, Topology};
use crate::input::{Key, LoopEvent};
use crate::render::RenderResources;
use crate::shader::Program;
use crate::time::TickCounter;

use super::app::{LoopControl, Present, QuitKeyPolicy};

/// Uniform the tick is pushed to.
pub const TIME_UNIFORM: &str = "iTime";

/// Vertices submitted by the per-frame draw call.
pub const STRIP_VERTEX_COUNT: i32 = 5;

/// Per-frame update/render driver.
///
/// One [`iterate`](FrameLoop::iterate) call is one loop iteration: drain
/// events, advance the tick, push it, draw, present.
#[derive(Debug)]
pub struct FrameLoop {
    tick: TickCounter,
    viewport: Viewport,
    quit_key: Key,
    quit_policy: QuitKeyPolicy,
    quit_requested: bool,
}

impl FrameLoop {
    pub fn new(viewport: Viewport, quit_key: Key, quit_policy: QuitKeyPolicy) -> Self {
        Self {
            tick: TickCounter::new(),
            viewport,
            quit_key,
            quit_policy,
            quit_requested: false,
        }
    }

    pub fn tick(&self) -> i32 {
        self.tick.value()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Consumes every pending event.
    ///
    /// Returns `ForceExit` as soon as the quit key is seen under the abrupt
    /// policy; remaining events are dropped.
    pub fn drain_events<I>(&mut self, events: I) -> LoopControl
    where
        I: IntoIterator<Item = LoopEvent>,
    {
        for event in events {
            match event {
                LoopEvent::Quit => self.quit_requested = true,
                LoopEvent::KeyDown(key) if key == self.quit_key => match self.quit_policy {
                    QuitKeyPolicy::Graceful => self.quit_requested = true,
                    QuitKeyPolicy::Abrupt => return LoopControl::ForceExit,
                },
                LoopEvent::KeyDown(_) => {}
            }
        }

        if self.quit_requested {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    /// Advances the tick and pushes it to `program`.
    ///
    /// Without a driver or program only the tick advances. A program without
    /// the time uniform gets a push to no location, which drivers ignore.
    pub fn update<D>(&mut self, driver: Option<&D>, program: Option<&Program>)
    where
        D: Driver + ?Sized,
    {
        let tick = self.tick.advance();

        if let (Some(driver), Some(program)) = (driver, program) {
            let location = driver.uniform_location(program.id(), TIME_UNIFORM);
            driver.uniform_1_i32(location, tick);
        }
    }

    /// Sets the viewport and issues the frame's single draw call.
    ///
    /// The color and depth buffers are not cleared.
    pub fn render<D>(&self, driver: &D, resources: &RenderResources)
    where
        D: Driver + ?Sized,
    {
        driver.viewport(self.viewport);

        if let Some(program) = resources.program() {
            driver.use_program(Some(program.id()));
        }
        if let Some(geometry) = resources.geometry() {
            geometry.bind(driver);
        }

        driver.draw_arrays(Topology::TriangleStrip, 0, STRIP_VERTEX_COUNT);
    }

    /// Runs one loop iteration.
    ///
    /// A quit seen while draining still lets this frame run; the caller stops
    /// iterating once `Quit` is returned.
    pub fn iterate<I, D, P>(
        &mut self,
        events: I,
        driver: Option<&D>,
        surface: &P,
        resources: &RenderResources,
    ) -> LoopControl
    where
        I: IntoIterator<Item = LoopEvent>,
        D: Driver + ?Sized,
        P: Present + ?Sized,
    {
        let control = self.drain_events(events);
        if control == LoopControl::ForceExit {
            return control;
        }

        self.update(driver, resources.program());

        if let Some(driver) = driver {
            self.render(driver, resources);
            surface.present();
        }

        control
    }
}
