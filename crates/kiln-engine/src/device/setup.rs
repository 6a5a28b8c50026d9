use std::fmt;

use super::driver::Driver;

/// One fallible step of context bring-up, in execution order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SetupStep {
    Window,
    Context,
    Functions,
    Render,
}

impl SetupStep {
    /// State the context is in once this step has succeeded.
    pub fn reached(self) -> SetupState {
        match self {
            SetupStep::Window => SetupState::WindowCreated,
            SetupStep::Context => SetupState::ContextCreated,
            SetupStep::Functions => SetupState::FunctionsResolved,
            SetupStep::Render => SetupState::Ready,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SetupState {
    Uninitialized,
    WindowCreated,
    ContextCreated,
    FunctionsResolved,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StepOutcome {
    pub step: SetupStep,
    /// `None` when the step succeeded.
    pub error: Option<String>,
}

/// Accumulated outcome of context bring-up.
///
/// Every step is recorded, including steps attempted after an earlier one
/// failed, so the report lists all setup problems at once.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SetupReport {
    outcomes: Vec<StepOutcome>,
}

/// Setup finished with at least one failed step.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{summary}")]
pub struct SetupError {
    summary: String,
}

impl SetupReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeeded(&mut self, step: SetupStep) {
        self.outcomes.push(StepOutcome { step, error: None });
    }

    pub fn failed(&mut self, step: SetupStep, message: impl Into<String>) {
        self.outcomes.push(StepOutcome {
            step,
            error: Some(message.into()),
        });
    }

    /// Records `result` for `step` and passes the success value through.
    pub fn record<T, E: fmt::Display>(&mut self, step: SetupStep, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => {
                self.succeeded(step);
                Some(v)
            }
            Err(e) => {
                self.failed(step, e.to_string());
                None
            }
        }
    }

    /// Runs a step that needs the output of an earlier one.
    ///
    /// Without its prerequisite the step is recorded as failed with `missing`
    /// and `run` is not called.
    pub fn attempt<P, T, E, F>(
        &mut self,
        step: SetupStep,
        prerequisite: Option<P>,
        missing: &str,
        run: F,
    ) -> Option<T>
    where
        E: fmt::Display,
        F: FnOnce(P) -> Result<T, E>,
    {
        match prerequisite {
            Some(p) => self.record(step, run(p)),
            None => {
                self.failed(step, missing);
                None
            }
        }
    }

    /// Runs render setup with the loaded driver.
    ///
    /// `setup` returning `false` fails the step. Without a driver the step
    /// fails and `setup` is not called.
    pub fn run_render_step<D, F>(&mut self, driver: Option<&D>, setup: F)
    where
        D: Driver + ?Sized,
        F: FnOnce(&D) -> bool,
    {
        self.attempt(
            SetupStep::Render,
            driver,
            "unable to initialize OpenGL: GL entry points unavailable",
            |driver| {
                if setup(driver) {
                    Ok(())
                } else {
                    Err("unable to initialize OpenGL")
                }
            },
        );
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn state(&self) -> SetupState {
        if self.outcomes.iter().any(|o| o.error.is_some()) {
            return SetupState::Failed;
        }
        self.outcomes
            .last()
            .map_or(SetupState::Uninitialized, |o| o.step.reached())
    }

    /// True once every step, render setup included, has succeeded.
    pub fn is_ready(&self) -> bool {
        self.state() == SetupState::Ready
    }

    /// Error messages in the order the steps ran.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| o.error.as_deref())
    }

    /// All error messages as one block, terminated by a final verdict line.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for msg in self.diagnostics() {
            out.push_str(msg);
            out.push('\n');
        }
        out.push_str("failed to initialize");
        out
    }

    /// Emits the report: one error block on failure, one line otherwise.
    pub fn log(&self) {
        if self.state() == SetupState::Failed {
            log::error!("{}", self.summary());
        } else {
            log::info!("no windowing, loader, or OpenGL errors detected");
        }
    }

    pub fn into_result(self) -> Result<(), SetupError> {
        if self.state() == SetupState::Failed {
            Err(SetupError {
                summary: self.summary(),
            })
        } else {
            Ok(())
        }
    }
}
