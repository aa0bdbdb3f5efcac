//! The GL entry points this program uses, behind a trait so that everything
//! above it can run against something other than a live driver.

use gl;
use gl::types::*;
use std::ffi::{CStr, CString};
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_void;

use super::error::{GlError, GlResult};

/// A current OpenGL context.
///
/// Object handles are plain `GLuint`s; the owning wrappers in `shader`,
/// `buffer` and `vertex_array` are responsible for deleting them.
pub trait Gl {
    fn create_shader(&self, ty: GLenum) -> GlResult<GLuint>;
    /// Submits `source` with an explicit length, so no terminator is needed.
    fn shader_source(&self, shader: GLuint, source: &str) -> GlResult<()>;
    fn compile_shader(&self, shader: GLuint) -> GlResult<()>;
    fn shader_parameter(&self, shader: GLuint, pname: GLenum) -> GlResult<GLint>;
    fn shader_info_log(&self, shader: GLuint) -> GlResult<String>;
    fn delete_shader(&self, shader: GLuint) -> GlResult<()>;

    fn create_program(&self) -> GlResult<GLuint>;
    fn attach_shader(&self, program: GLuint, shader: GLuint) -> GlResult<()>;
    fn detach_shader(&self, program: GLuint, shader: GLuint) -> GlResult<()>;
    fn link_program(&self, program: GLuint) -> GlResult<()>;
    fn program_parameter(&self, program: GLuint, pname: GLenum) -> GlResult<GLint>;
    fn program_info_log(&self, program: GLuint) -> GlResult<String>;
    /// Binding program 0 unbinds whatever is current.
    fn use_program(&self, program: GLuint) -> GlResult<()>;
    /// Returns -1 when the program has no active attribute called `name`.
    fn attrib_location(&self, program: GLuint, name: &str) -> GlResult<GLint>;
    fn delete_program(&self, program: GLuint) -> GlResult<()>;

    fn gen_vertex_array(&self) -> GlResult<GLuint>;
    fn bind_vertex_array(&self, vao: GLuint) -> GlResult<()>;
    fn delete_vertex_array(&self, vao: GLuint) -> GlResult<()>;

    fn gen_buffer(&self) -> GlResult<GLuint>;
    fn bind_buffer(&self, target: GLenum, buffer: GLuint) -> GlResult<()>;
    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) -> GlResult<()>;
    fn delete_buffer(&self, buffer: GLuint) -> GlResult<()>;

    fn enable_vertex_attrib_array(&self, index: GLuint) -> GlResult<()>;
    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) -> GlResult<()>;

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) -> GlResult<()>;
    fn clear(&self, mask: GLbitfield) -> GlResult<()>;
    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) -> GlResult<()>;

    fn get_string(&self, name: GLenum) -> GlResult<String>;
    fn get_integer(&self, pname: GLenum) -> GlResult<GLint>;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MissingFunction(pub &'static str);

impl fmt::Display for MissingFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OpenGL function gl{} could not be loaded", self.0)
    }
}

impl ::std::error::Error for MissingFunction {}

/// The real driver, reached through the global function pointers of the `gl`
/// crate. Only one of these should exist, on the thread owning the context.
#[derive(Debug)]
pub struct NativeGl {
    _marker: PhantomData<*mut ()>,
}

impl NativeGl {
    /// Loads every GL function pointer through `loader`. The context the
    /// pointers come from must already be current.
    pub fn load_with<F>(loader: F) -> Result<Self, MissingFunction>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        // A loader that silently hands back nulls leaves us with a context we
        // can't use; catch it here rather than on the first draw.
        let required: &[(&'static str, bool)] = &[
            ("CreateShader", gl::CreateShader::is_loaded()),
            ("LinkProgram", gl::LinkProgram::is_loaded()),
            ("GenVertexArrays", gl::GenVertexArrays::is_loaded()),
            ("BufferData", gl::BufferData::is_loaded()),
            ("VertexAttribPointer", gl::VertexAttribPointer::is_loaded()),
            ("DrawArrays", gl::DrawArrays::is_loaded()),
        ];
        match required.iter().find(|&&(_, loaded)| !loaded) {
            Some(&(name, _)) => Err(MissingFunction(name)),
            None => Ok(NativeGl { _marker: PhantomData }),
        }
    }
}

unsafe fn read_info_log(
    id: GLuint,
    get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> GlResult<String> {
    let mut length = 0;
    get_iv(id, gl::INFO_LOG_LENGTH, &mut length);
    GlError::map_value(())?;
    if length <= 0 {
        return Ok(String::new());
    }

    let mut buffer = vec![0u8; length as usize];
    let mut written = 0;
    get_log(id, length, &mut written, buffer.as_mut_ptr() as *mut GLchar);
    GlError::map_value(())?;

    Ok(info_log_from_buffer(buffer, written))
}

/// Turns the buffer filled by `glGet*InfoLog` into text. `written` excludes
/// the terminator the driver appends, but it is not trusted to stay in range.
fn info_log_from_buffer(mut buffer: Vec<u8>, written: GLsizei) -> String {
    let written = (written.max(0) as usize).min(buffer.len());
    buffer.truncate(written);
    while buffer.last() == Some(&0) {
        buffer.pop();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

unsafe fn get_shader_iv(id: GLuint, pname: GLenum, out: *mut GLint) {
    gl::GetShaderiv(id, pname, out)
}

unsafe fn get_shader_log(id: GLuint, len: GLsizei, written: *mut GLsizei, log: *mut GLchar) {
    gl::GetShaderInfoLog(id, len, written, log)
}

unsafe fn get_program_iv(id: GLuint, pname: GLenum, out: *mut GLint) {
    gl::GetProgramiv(id, pname, out)
}

unsafe fn get_program_log(id: GLuint, len: GLsizei, written: *mut GLsizei, log: *mut GLchar) {
    gl::GetProgramInfoLog(id, len, written, log)
}

impl Gl for NativeGl {
    fn create_shader(&self, ty: GLenum) -> GlResult<GLuint> {
        unsafe { gl_call!(CreateShader(ty)) }
    }

    fn shader_source(&self, shader: GLuint, source: &str) -> GlResult<()> {
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe { gl_call!(ShaderSource(shader, 1, &ptr, &len)) }
    }

    fn compile_shader(&self, shader: GLuint) -> GlResult<()> {
        unsafe { gl_call!(CompileShader(shader)) }
    }

    fn shader_parameter(&self, shader: GLuint, pname: GLenum) -> GlResult<GLint> {
        let mut value = 0;
        unsafe { gl_call!(GetShaderiv(shader, pname, &mut value))? };
        Ok(value)
    }

    fn shader_info_log(&self, shader: GLuint) -> GlResult<String> {
        unsafe { read_info_log(shader, get_shader_iv, get_shader_log) }
    }

    fn delete_shader(&self, shader: GLuint) -> GlResult<()> {
        unsafe { gl_call!(DeleteShader(shader)) }
    }

    fn create_program(&self) -> GlResult<GLuint> {
        unsafe { gl_call!(CreateProgram()) }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) -> GlResult<()> {
        unsafe { gl_call!(AttachShader(program, shader)) }
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) -> GlResult<()> {
        unsafe { gl_call!(DetachShader(program, shader)) }
    }

    fn link_program(&self, program: GLuint) -> GlResult<()> {
        unsafe { gl_call!(LinkProgram(program)) }
    }

    fn program_parameter(&self, program: GLuint, pname: GLenum) -> GlResult<GLint> {
        let mut value = 0;
        unsafe { gl_call!(GetProgramiv(program, pname, &mut value))? };
        Ok(value)
    }

    fn program_info_log(&self, program: GLuint) -> GlResult<String> {
        unsafe { read_info_log(program, get_program_iv, get_program_log) }
    }

    fn use_program(&self, program: GLuint) -> GlResult<()> {
        unsafe { gl_call!(UseProgram(program)) }
    }

    fn attrib_location(&self, program: GLuint, name: &str) -> GlResult<GLint> {
        // An interior NUL can never name a GLSL attribute.
        let c_name = match CString::new(name) {
            Ok(c_name) => c_name,
            Err(_) => return Ok(-1),
        };
        unsafe { gl_call!(GetAttribLocation(program, c_name.as_ptr())) }
    }

    fn delete_program(&self, program: GLuint) -> GlResult<()> {
        unsafe { gl_call!(DeleteProgram(program)) }
    }

    fn gen_vertex_array(&self) -> GlResult<GLuint> {
        let mut id = 0;
        unsafe { gl_call!(GenVertexArrays(1, &mut id))? };
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: GLuint) -> GlResult<()> {
        unsafe { gl_call!(BindVertexArray(vao)) }
    }

    fn delete_vertex_array(&self, vao: GLuint) -> GlResult<()> {
        unsafe { gl_call!(DeleteVertexArrays(1, &vao)) }
    }

    fn gen_buffer(&self) -> GlResult<GLuint> {
        let mut id = 0;
        unsafe { gl_call!(GenBuffers(1, &mut id))? };
        Ok(id)
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) -> GlResult<()> {
        unsafe { gl_call!(BindBuffer(target, buffer)) }
    }

    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) -> GlResult<()> {
        unsafe {
            gl_call!(BufferData(
                target,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                usage
            ))
        }
    }

    fn delete_buffer(&self, buffer: GLuint) -> GlResult<()> {
        unsafe { gl_call!(DeleteBuffers(1, &buffer)) }
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) -> GlResult<()> {
        unsafe { gl_call!(EnableVertexAttribArray(index)) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) -> GlResult<()> {
        let normalized = if normalized { gl::TRUE } else { gl::FALSE };
        unsafe {
            gl_call!(VertexAttribPointer(
                index,
                size,
                ty,
                normalized,
                stride,
                offset as *const c_void
            ))
        }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) -> GlResult<()> {
        unsafe { gl_call!(ClearColor(r, g, b, a)) }
    }

    fn clear(&self, mask: GLbitfield) -> GlResult<()> {
        unsafe { gl_call!(Clear(mask)) }
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) -> GlResult<()> {
        unsafe { gl_call!(DrawArrays(mode, first, count)) }
    }

    fn get_string(&self, name: GLenum) -> GlResult<String> {
        unsafe {
            let ptr = gl_call!(GetString(name))?;
            if ptr.is_null() {
                Ok(String::new())
            } else {
                Ok(CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned())
            }
        }
    }

    fn get_integer(&self, pname: GLenum) -> GlResult<GLint> {
        let mut value = 0;
        unsafe { gl_call!(GetIntegerv(pname, &mut value))? };
        Ok(value)
    }
}
