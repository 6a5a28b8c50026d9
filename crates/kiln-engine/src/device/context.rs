use std::fmt;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::coords::Viewport;
use crate::core::Present;

use super::driver::{Driver, GlowDriver};
use super::init::ContextConfig;
use super::setup::{SetupReport, SetupStep};

/// Owns the window, the GL surface/context pair and the loaded driver.
///
/// Construction never fails outright. Each bring-up step is attempted in order
/// and recorded in a [`SetupReport`]; a step whose prerequisite is missing is
/// recorded as failed too. Callers inspect [`GraphicsContext::report`] to
/// decide whether rendering will do anything.
pub struct GraphicsContext {
    window: Option<Window>,
    surface: Option<Surface<WindowSurface>>,
    context: Option<PossiblyCurrentContext>,
    driver: Option<GlowDriver>,
    viewport: Viewport,
    report: SetupReport,
}

impl GraphicsContext {
    /// Runs the window, context and entry-point steps.
    ///
    /// The render step is left to [`GraphicsContext::finish_setup`].
    pub fn create(event_loop: &ActiveEventLoop, config: &ContextConfig) -> Self {
        let mut report = SetupReport::new();

        let (window, gl_config) = report
            .record(SetupStep::Window, create_window(event_loop, config))
            .unzip();

        let (surface, context) = report
            .attempt(
                SetupStep::Context,
                window.as_ref().zip(gl_config.as_ref()),
                "OpenGL context could not be created: no window to bind to",
                |(window, gl_config)| create_context(window, gl_config, config),
            )
            .unzip();

        let driver = report.attempt(
            SetupStep::Functions,
            context.as_ref(),
            "failed to resolve GL entry points: no current context",
            |context| load_driver(&context.display()),
        );

        if let Some(driver) = &driver {
            let info = driver.info();
            log::info!("Vendor: {}", info.vendor);
            log::info!("Renderer: {}", info.renderer);
            log::info!("Version: {}", info.version);
            log::info!("Shading language: {}", info.shading_language);
        }

        let viewport = window
            .as_ref()
            .map(|w| {
                let size = w.inner_size();
                Viewport::new(size.width, size.height)
            })
            .filter(|v| v.is_valid())
            .unwrap_or_else(|| config.viewport());

        Self {
            window,
            surface,
            context,
            driver,
            viewport,
            report,
        }
    }

    /// Runs the render step with the loaded driver and logs the full report.
    ///
    /// `setup` returning `false` marks the step failed. Without a driver the
    /// step fails without calling `setup`.
    pub fn finish_setup<F>(&mut self, setup: F)
    where
        F: FnOnce(&GlowDriver) -> bool,
    {
        self.report.run_render_step(self.driver.as_ref(), setup);
        self.report.log();
    }

    pub fn report(&self) -> &SetupReport {
        &self.report
    }

    pub fn driver(&self) -> Option<&GlowDriver> {
        self.driver.as_ref()
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Drawable size in physical pixels.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Releases the driver, surface, context and window, in that order.
    ///
    /// GL objects created through the driver must be deleted before this runs.
    /// Calling it again is a no-op.
    pub fn teardown(&mut self) {
        let window = self.window.take();
        if window.is_none() && self.context.is_none() {
            return;
        }

        self.driver = None;
        self.surface = None;
        self.context = None;
        drop(window);

        log::debug!("graphics context torn down");
    }
}

impl Present for GraphicsContext {
    fn present(&self) {
        if let (Some(surface), Some(context)) = (&self.surface, &self.context) {
            if let Err(e) = surface.swap_buffers(context) {
                log::warn!("buffer swap failed: {e}");
            }
        }
    }
}

impl Drop for GraphicsContext {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn create_window(
    event_loop: &ActiveEventLoop,
    config: &ContextConfig,
) -> Result<(Window, Config), String> {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    let template = ConfigTemplateBuilder::new().with_depth_size(config.depth_bits);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs))
        .build(event_loop, template, pick_config)
        .map_err(|e| format!("window could not be created: {e}"))?;

    let window =
        window.ok_or_else(|| "window could not be created: no window returned".to_string())?;

    Ok((window, gl_config))
}

/// Prefers the config with the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // DisplayBuilder only calls the picker after finding at least one config
    // matching the template; with none it returns an error before this runs.
    most_samples(configs, |c| c.num_samples())
        .expect("display builder passed an empty config list")
}

/// First item with the highest sample count.
fn most_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.reduce(|best, c| if samples(&c) > samples(&best) { c } else { best })
}

fn create_context(
    window: &Window,
    gl_config: &Config,
    config: &ContextConfig,
) -> Result<(Surface<WindowSurface>, PossiblyCurrentContext), String> {
    fn fail(e: impl fmt::Display) -> String {
        format!("OpenGL context could not be created: {e}")
    }

    let raw_handle = window.window_handle().map_err(fail)?.as_raw();

    let (major, minor) = config.gl_version;
    let attrs = ContextAttributesBuilder::new()
        .with_profile(GlProfile::Core)
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .build(Some(raw_handle));

    let display = gl_config.display();
    let not_current = unsafe { display.create_context(gl_config, &attrs) }.map_err(fail)?;

    let surface_attrs = window
        .build_surface_attributes(Default::default())
        .map_err(fail)?;
    let surface =
        unsafe { display.create_window_surface(gl_config, &surface_attrs) }.map_err(fail)?;

    let context = not_current.make_current(&surface).map_err(fail)?;

    if config.vsync {
        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("vsync unavailable: {e}");
        }
    }

    Ok((surface, context))
}

fn load_driver(display: &Display) -> Result<GlowDriver, String> {
    if display.get_proc_address(c"glCreateShader").is_null() {
        return Err("failed to resolve GL entry points: glCreateShader is missing".to_string());
    }

    let gl = unsafe { glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name)) };
    Ok(GlowDriver::new(gl))
}
