use gl;
use gl::types::*;
use std::fmt;

use super::shader::{CompiledShader, ShaderError};
use crate::gl_api::context::Gl;
use crate::gl_api::error::GlError;

#[derive(Debug)]
pub enum ProgramError {
    Creation,
    Shader(ShaderError),
    /// Linking failed; carries the program info log.
    Link(String),
    MissingAttribute(String),
    Gl(GlError),
}

impl From<GlError> for ProgramError {
    fn from(err: GlError) -> Self {
        ProgramError::Gl(err)
    }
}

impl From<ShaderError> for ProgramError {
    fn from(err: ShaderError) -> Self {
        ProgramError::Shader(err)
    }
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ProgramError::Creation => write!(f, "could not create program object"),
            ProgramError::Shader(ref err) => write!(f, "{}", err),
            ProgramError::Link(ref log) => write!(f, "failed to link shader program:\n{}", log),
            ProgramError::MissingAttribute(ref name) => {
                write!(f, "program has no active vertex attribute named `{}`", name)
            }
            ProgramError::Gl(_) => write!(f, "GL error while building program"),
        }
    }
}

impl ::std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            // Displayed transparently, so skip straight to its cause.
            ProgramError::Shader(ref err) => ::std::error::Error::source(err),
            ProgramError::Gl(ref err) => Some(err),
            _ => None,
        }
    }
}

/// A program object that may not be linked yet.
#[derive(Debug)]
pub struct RawProgram<'g, G: Gl + ?Sized> {
    gl: &'g G,
    id: GLuint,
}

impl<'g, G: Gl + ?Sized> RawProgram<'g, G> {
    pub fn new(gl: &'g G) -> Result<Self, ProgramError> {
        match gl.create_program()? {
            0 => Err(ProgramError::Creation),
            id => Ok(RawProgram { gl, id }),
        }
    }

    pub fn attach_shader(&self, shader: &CompiledShader<'g, G>) -> Result<(), ProgramError> {
        debug!("attaching {} shader {} to program {}", shader.shader_type(), shader.id(), self.id);
        self.gl.attach_shader(self.id, shader.id())?;
        Ok(())
    }

    pub fn detach_shader(&self, shader: &CompiledShader<'g, G>) -> Result<(), ProgramError> {
        self.gl.detach_shader(self.id, shader.id())?;
        Ok(())
    }

    /// Issues the link. Whether it worked is only known after `into_linked`.
    pub fn link(&self) -> Result<(), ProgramError> {
        self.gl.link_program(self.id)?;
        Ok(())
    }

    pub fn into_linked(self) -> Result<Program<'g, G>, ProgramError> {
        let status = self.gl.program_parameter(self.id, gl::LINK_STATUS)?;
        if status == gl::FALSE as GLint {
            let log = self.gl.program_info_log(self.id)?;
            return Err(ProgramError::Link(log));
        }
        Ok(Program { raw: self })
    }
}

impl<'g, G: Gl + ?Sized> Drop for RawProgram<'g, G> {
    fn drop(&mut self) {
        if let Err(err) = self.gl.delete_program(self.id) {
            warn!("failed to delete program {}: {}", self.id, err);
        }
    }
}

/// A successfully linked program.
#[derive(Debug)]
pub struct Program<'g, G: Gl + ?Sized> {
    raw: RawProgram<'g, G>,
}

impl<'g, G: Gl + ?Sized> Program<'g, G> {
    pub fn id(&self) -> GLuint {
        self.raw.id
    }

    pub fn bind(&self) -> Result<(), GlError> {
        self.raw.gl.use_program(self.raw.id)
    }

    pub fn unbind(&self) -> Result<(), GlError> {
        self.raw.gl.use_program(0)
    }

    pub fn attrib_location(&self, name: &str) -> Result<GLuint, ProgramError> {
        match self.raw.gl.attrib_location(self.raw.id, name)? {
            location if location < 0 => Err(ProgramError::MissingAttribute(name.to_owned())),
            location => Ok(location as GLuint),
        }
    }
}
