use gl;
use std::fmt;

use super::context::Gl;
use super::error::{GlError, GlResult};

/// What the driver says about itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContextInfo {
    pub version: String,
    pub glsl_version: String,
    pub vendor: String,
    pub renderer: String,
    pub major: i32,
    pub minor: i32,
}

#[derive(Debug)]
pub enum VersionError {
    Unsupported { wanted: (u8, u8), got: (i32, i32) },
    Gl(GlError),
}

impl From<GlError> for VersionError {
    fn from(err: GlError) -> Self {
        VersionError::Gl(err)
    }
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            VersionError::Unsupported { wanted, got } => write!(
                f,
                "couldn't get a GL {}.{} core profile (context is {}.{})",
                wanted.0, wanted.1, got.0, got.1
            ),
            VersionError::Gl(_) => write!(f, "GL error while querying the context version"),
        }
    }
}

impl ::std::error::Error for VersionError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            VersionError::Gl(ref err) => Some(err),
            _ => None,
        }
    }
}

impl ContextInfo {
    pub fn query<G: Gl + ?Sized>(gl: &G) -> GlResult<Self> {
        Ok(ContextInfo {
            version: gl.get_string(gl::VERSION)?,
            glsl_version: gl.get_string(gl::SHADING_LANGUAGE_VERSION)?,
            vendor: gl.get_string(gl::VENDOR)?,
            renderer: gl.get_string(gl::RENDERER)?,
            major: gl.get_integer(gl::MAJOR_VERSION)?,
            minor: gl.get_integer(gl::MINOR_VERSION)?,
        })
    }

    pub fn log(&self) {
        info!("OpenGL Version: {}", self.version);
        info!("GLSL Version: {}", self.glsl_version);
        info!("Vendor: {}", self.vendor);
        info!("Renderer: {}", self.renderer);
    }

    /// Fails unless the context is at least `wanted`.
    pub fn require(&self, wanted: (u8, u8)) -> Result<(), VersionError> {
        let wanted_i = (i32::from(wanted.0), i32::from(wanted.1));
        if (self.major, self.minor) < wanted_i {
            Err(VersionError::Unsupported { wanted, got: (self.major, self.minor) })
        } else {
            Ok(())
        }
    }
}
