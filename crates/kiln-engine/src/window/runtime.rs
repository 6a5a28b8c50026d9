use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{GraphicsProgram, HarnessConfig, LoopControl};
use crate::input::LoopEvent;
use crate::input::platform::winit::translate_window_event;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs the frame loop until quit and tears down.
    ///
    /// Returns an error when the event loop cannot be created, or when
    /// `config.strict` is set and setup reported a failure.
    pub fn run(config: HarnessConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct AppState {
    config: HarnessConfig,
    program: Option<GraphicsProgram>,
    started: bool,

    pending: Vec<LoopEvent>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            program: None,
            started: false,
            pending: Vec::new(),
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn teardown(&mut self) {
        if let Some(mut program) = self.program.take() {
            program.teardown();
            log::info!("shut down after {} frames", program.tick());
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Resumed can fire more than once on some platforms; build only once.
        if self.started {
            return;
        }
        self.started = true;

        let program = GraphicsProgram::new(event_loop, &self.config);

        if self.config.strict {
            if let Err(e) = program.report().clone().into_result() {
                self.failure = Some(anyhow::Error::new(e).context("strict startup failed"));
                self.program = Some(program);
                self.teardown();
                self.request_exit(event_loop);
                return;
            }
        }

        program.request_redraw();
        self.program = Some(program);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            self.pending.push(ev);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(program) = self.program.as_mut() else {
            return;
        };

        match program.frame(self.pending.drain(..)) {
            LoopControl::Continue => program.request_redraw(),
            LoopControl::Quit => self.request_exit(event_loop),
            LoopControl::ForceExit => {
                log::info!("quit key pressed, exiting immediately");
                std::process::exit(0);
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
