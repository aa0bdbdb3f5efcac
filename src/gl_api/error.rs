use gl;
use gl::types::GLenum;
use std::fmt;

pub type GlResult<T> = Result<T, GlError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GlError {
    code: GLenum,
}

impl GlError {
    pub fn new(code: GLenum) -> Self {
        GlError { code }
    }

    fn get_raw() -> GLenum {
        unsafe { gl::GetError() }
    }

    /// `None` for `GL_NO_ERROR`, otherwise the error the code names.
    pub fn from_code(code: GLenum) -> Option<GlError> {
        match code {
            gl::NO_ERROR => None,
            code => Some(GlError::new(code)),
        }
    }

    pub fn map_value<T>(val: T) -> GlResult<T> {
        match Self::from_code(Self::get_raw()) {
            None => Ok(val),
            // GL specification states that it is undefined to issue any GL
            // calls after an out of memory error is received.
            Some(GlError { code: gl::OUT_OF_MEMORY }) => ::std::process::abort(),
            Some(err) => Err(err),
        }
    }

    fn name(&self) -> &'static str {
        match self.code {
            gl::INVALID_ENUM => "GL_INVALID_ENUM",
            gl::INVALID_VALUE => "GL_INVALID_VALUE",
            gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
            gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
            gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
            _ => "unknown GL error",
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.code)
    }
}

impl ::std::error::Error for GlError {}

macro_rules! gl_call {
    ($name:ident($($args:expr),*)) => {{
        $crate::gl_api::error::GlError::map_value(::gl::$name($($args),*))
    }}
}
