use gl;
use std::fmt;

use crate::config::ShaderPaths;
use crate::gl_api::context::Gl;
use crate::gl_api::error::GlError;
use crate::gl_api::shader::load_shader_program;
use crate::gl_api::shader::program::{Program, ProgramError};
use crate::triangle::{load_triangle, TriangleVao};

pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresentError(pub String);

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "could not present frame: {}", self.0)
    }
}

impl ::std::error::Error for PresentError {}

#[derive(Debug)]
pub enum RenderError {
    Gl(GlError),
    Present(PresentError),
}

impl From<GlError> for RenderError {
    fn from(err: GlError) -> Self {
        RenderError::Gl(err)
    }
}

impl From<PresentError> for RenderError {
    fn from(err: PresentError) -> Self {
        RenderError::Present(err)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RenderError::Gl(_) => write!(f, "GL error while rendering"),
            RenderError::Present(ref err) => write!(f, "{}", err),
        }
    }
}

impl ::std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            RenderError::Gl(ref err) => Some(err),
            RenderError::Present(_) => None,
        }
    }
}

/// Somewhere finished frames go.
pub trait Surface {
    /// Shows the frame just drawn and processes pending window events.
    fn present(&mut self) -> Result<(), PresentError>;
    fn close_requested(&self) -> bool;
}

/// The program and geometry drawn every frame.
pub struct Scene<'g, G: Gl + ?Sized> {
    gl: &'g G,
    program: Program<'g, G>,
    vao: TriangleVao<'g, G>,
}

impl<'g, G: Gl + ?Sized> Scene<'g, G> {
    pub fn load(gl: &'g G, shaders: &ShaderPaths) -> Result<Self, ProgramError> {
        let program = load_shader_program(gl, &shaders.vertex, &shaders.fragment)?;
        let vao = load_triangle(gl, &program)?;
        Ok(Scene { gl, program, vao })
    }

    pub fn program(&self) -> &Program<'g, G> {
        &self.program
    }

    pub fn vao(&self) -> &TriangleVao<'g, G> {
        &self.vao
    }

    /// Draws the triangle and presents it. Every frame is the same.
    pub fn render_frame<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        let [r, g, b, a] = CLEAR_COLOR;
        self.gl.clear_color(r, g, b, a)?;
        self.gl.clear(gl::COLOR_BUFFER_BIT)?;

        self.program.bind()?;
        self.vao.bind()?;
        self.gl.draw_arrays(gl::TRIANGLES, 0, self.vao.vertex_count() as i32)?;

        surface.present()?;

        self.vao.unbind()?;
        self.program.unbind()?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Renders until `surface` asks to close. Returns the number of frames drawn.
pub fn run<'g, G, S>(surface: &mut S, scene: &Scene<'g, G>) -> Result<u64, RenderError>
where
    G: Gl + ?Sized,
    S: Surface + ?Sized,
{
    let mut state = LoopState::Running;
    let mut frames = 0u64;
    debug!("rendering program {} with vao {}", scene.program().id(), scene.vao().id());

    while state == LoopState::Running {
        if surface.close_requested() {
            state = LoopState::Closed;
        } else {
            scene.render_frame(surface)?;
            frames += 1;
        }
    }

    info!("window closed after {} frames", frames);
    Ok(frames)
}
