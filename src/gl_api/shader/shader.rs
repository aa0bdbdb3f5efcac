use gl;
use gl::types::*;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::gl_api::context::Gl;
use crate::gl_api::error::GlError;

pub type ShaderResult<T> = Result<T, ShaderError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum ShaderType {
    Vertex = gl::VERTEX_SHADER,
    Fragment = gl::FRAGMENT_SHADER,
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderType::Vertex => write!(f, "vertex"),
            ShaderType::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug)]
pub enum ShaderError {
    /// The source file could not be read. Nothing was sent to the GPU.
    Io { path: PathBuf, source: io::Error },
    /// The driver rejected the source; `log` is its full info log.
    Compile { name: String, log: String },
    Creation(ShaderType),
    Gl(GlError),
}

impl From<GlError> for ShaderError {
    fn from(err: GlError) -> Self {
        ShaderError::Gl(err)
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderError::Io { ref path, .. } => write!(f, "could not load shader from file {}", path.display()),
            ShaderError::Compile { ref name, ref log } => {
                write!(f, "compile error in shader {}:\n{}", name, log)
            }
            ShaderError::Creation(ty) => write!(f, "could not create {} shader object", ty),
            ShaderError::Gl(_) => write!(f, "GL error while building shader"),
        }
    }
}

impl ::std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            ShaderError::Io { ref source, .. } => Some(source),
            ShaderError::Gl(ref err) => Some(err),
            _ => None,
        }
    }
}

/// A shader object that has not been compiled yet.
#[derive(Debug)]
pub struct Shader<'g, G: Gl + ?Sized> {
    gl: &'g G,
    pub(crate) id: GLuint,
    pub shader_type: ShaderType,
}

impl<'g, G: Gl + ?Sized> Shader<'g, G> {
    pub fn new(gl: &'g G, shader_type: ShaderType) -> ShaderResult<Self> {
        match gl.create_shader(shader_type as GLenum)? {
            0 => Err(ShaderError::Creation(shader_type)),
            id => Ok(Shader { gl, id, shader_type }),
        }
    }

    pub fn source(&self, source: &str) -> ShaderResult<()> {
        self.gl.shader_source(self.id, source)?;
        Ok(())
    }

    /// Compiles the attached source. `name` only shows up in the error, so
    /// the file name is the useful thing to pass.
    pub fn compile(self, name: &str) -> ShaderResult<CompiledShader<'g, G>> {
        self.gl.compile_shader(self.id)?;
        let status = self.gl.shader_parameter(self.id, gl::COMPILE_STATUS)?;

        if status == gl::FALSE as GLint {
            // `self` drops on the way out, deleting the failed object.
            let log = self.gl.shader_info_log(self.id)?;
            return Err(ShaderError::Compile { name: name.to_owned(), log });
        }

        debug!("compiled {} shader {} ({})", self.shader_type, self.id, name);
        Ok(CompiledShader { shader: self })
    }
}

impl<'g, G: Gl + ?Sized> Drop for Shader<'g, G> {
    fn drop(&mut self) {
        if let Err(err) = self.gl.delete_shader(self.id) {
            warn!("failed to delete shader {}: {}", self.id, err);
        }
    }
}

/// A shader whose compile status has been checked.
#[derive(Debug)]
pub struct CompiledShader<'g, G: Gl + ?Sized> {
    shader: Shader<'g, G>,
}

impl<'g, G: Gl + ?Sized> CompiledShader<'g, G> {
    pub fn id(&self) -> GLuint {
        self.shader.id
    }

    pub fn shader_type(&self) -> ShaderType {
        self.shader.shader_type
    }
}

/// Reads `path` and compiles it as a `shader_type` shader.
///
/// The file is read before any GL object exists, so a missing file is
/// reported as an `Io` error without touching the context.
pub fn load_shader<'g, G, P>(gl: &'g G, path: P, shader_type: ShaderType) -> ShaderResult<CompiledShader<'g, G>>
where
    G: Gl + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_owned(),
        source,
    })?;

    let shader = Shader::new(gl, shader_type)?;
    shader.source(&source)?;
    shader.compile(&path.display().to_string())
}
