use glutin::{self, Api, ContextBuilder, EventsLoop, GlContext, GlProfile, GlRequest, GlWindow, WindowBuilder};
use std::fmt;

use crate::config::WindowConfig;
use crate::gl_api::context::{MissingFunction, NativeGl};
use crate::render::{PresentError, Surface};

#[derive(Debug)]
pub enum WindowError {
    Creation(String),
    Context(String),
    FunctionsNotLoaded(MissingFunction),
}

impl From<MissingFunction> for WindowError {
    fn from(err: MissingFunction) -> Self {
        WindowError::FunctionsNotLoaded(err)
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WindowError::Creation(ref msg) => write!(f, "could not open window: {}", msg),
            WindowError::Context(ref msg) => write!(f, "could not make the GL context current: {}", msg),
            WindowError::FunctionsNotLoaded(_) => write!(f, "could not load OpenGL functions"),
        }
    }
}

impl ::std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            WindowError::FunctionsNotLoaded(ref err) => Some(err),
            _ => None,
        }
    }
}

/// The OS window and its GL context. The context stays current on the
/// creating thread until this is dropped.
pub struct Window {
    events_loop: EventsLoop,
    gl_window: GlWindow,
    close_requested: bool,
}

impl Window {
    pub fn open(config: &WindowConfig) -> Result<Self, WindowError> {
        let events_loop = EventsLoop::new();
        // Pinning min and max to the same size keeps the window from being resized.
        let window = WindowBuilder::new()
            .with_title(config.title.clone())
            .with_dimensions(config.width, config.height)
            .with_min_dimensions(config.width, config.height)
            .with_max_dimensions(config.width, config.height);
        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, config.gl_version))
            .with_gl_profile(GlProfile::Core)
            .with_pixel_format(config.color_bits, config.alpha_bits)
            .with_vsync(config.vsync);

        let gl_window = GlWindow::new(window, context, &events_loop)
            .map_err(|err| WindowError::Creation(err.to_string()))?;

        unsafe { gl_window.make_current() }.map_err(|err| WindowError::Context(err.to_string()))?;

        debug!(
            "opened {}x{} window requesting GL {}.{} core",
            config.width, config.height, config.gl_version.0, config.gl_version.1
        );
        Ok(Window {
            events_loop,
            gl_window,
            close_requested: false,
        })
    }

    /// Loads the GL function pointers for this window's context.
    pub fn load_gl(&self) -> Result<NativeGl, WindowError> {
        let gl_window = &self.gl_window;
        let gl = NativeGl::load_with(|symbol| gl_window.get_proc_address(symbol) as *const _)?;
        Ok(gl)
    }

    fn poll_events(&mut self) {
        let mut closed = false;
        self.events_loop.poll_events(|event| {
            if let glutin::Event::WindowEvent { event, .. } = event {
                match event {
                    glutin::WindowEvent::CloseRequested | glutin::WindowEvent::Destroyed => closed = true,
                    _ => (),
                }
            }
        });
        if closed {
            debug!("window close requested");
            self.close_requested = true;
        }
    }
}

impl Surface for Window {
    fn present(&mut self) -> Result<(), PresentError> {
        self.gl_window
            .swap_buffers()
            .map_err(|err| PresentError(err.to_string()))?;
        self.poll_events();
        Ok(())
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }
}
