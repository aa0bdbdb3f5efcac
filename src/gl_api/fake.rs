//! A `Gl` implementation that records every call instead of talking to a
//! driver. Object ids are handed out from a single counter starting at 1.

use gl;
use gl::types::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::context::Gl;
use super::error::{GlError, GlResult};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateShader { ty: GLenum, id: GLuint },
    ShaderSource { shader: GLuint, source: String },
    CompileShader(GLuint),
    ShaderParameter { shader: GLuint, pname: GLenum },
    ShaderInfoLog(GLuint),
    DeleteShader(GLuint),

    CreateProgram(GLuint),
    AttachShader { program: GLuint, shader: GLuint },
    DetachShader { program: GLuint, shader: GLuint },
    LinkProgram(GLuint),
    ProgramParameter { program: GLuint, pname: GLenum },
    ProgramInfoLog(GLuint),
    UseProgram(GLuint),
    AttribLocation { program: GLuint, name: String },
    DeleteProgram(GLuint),

    GenVertexArray(GLuint),
    BindVertexArray(GLuint),
    DeleteVertexArray(GLuint),

    GenBuffer(GLuint),
    BindBuffer { target: GLenum, buffer: GLuint },
    BufferData { target: GLenum, data: Vec<u8>, usage: GLenum },
    DeleteBuffer(GLuint),

    EnableVertexAttribArray { index: GLuint, vao: GLuint },
    VertexAttribPointer {
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
        /// What was bound to `ARRAY_BUFFER` when the pointer was specified.
        buffer: GLuint,
        vao: GLuint,
    },

    ClearColor([f32; 4]),
    Clear(GLbitfield),
    DrawArrays { mode: GLenum, first: GLint, count: GLsizei },

    GetString(GLenum),
    GetInteger(GLenum),
}

#[derive(Debug)]
pub struct FakeGl {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<GLuint>,
    compile_log: Option<String>,
    link_log: Option<String>,
    link_error: Option<GlError>,
    attribs: HashMap<String, GLint>,
    version: (GLint, GLint),
    array_buffer: Cell<GLuint>,
    vertex_array: Cell<GLuint>,
}

impl FakeGl {
    /// Every compile and link succeeds, `vert` lives at location 0 and the
    /// context reports version 3.3.
    pub fn new() -> Self {
        let mut attribs = HashMap::new();
        attribs.insert("vert".to_owned(), 0);
        FakeGl {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            compile_log: None,
            link_log: None,
            link_error: None,
            attribs,
            version: (3, 3),
            array_buffer: Cell::new(0),
            vertex_array: Cell::new(0),
        }
    }

    /// Every compile reports failure with `log` as its info log.
    pub fn failing_compile(mut self, log: &str) -> Self {
        self.compile_log = Some(log.to_owned());
        self
    }

    pub fn failing_link(mut self, log: &str) -> Self {
        self.link_log = Some(log.to_owned());
        self
    }

    /// `glLinkProgram` itself raises `code`, before any status exists.
    pub fn failing_link_call(mut self, code: GLenum) -> Self {
        self.link_error = Some(GlError::new(code));
        self
    }

    pub fn with_attrib(mut self, name: &str, location: GLint) -> Self {
        self.attribs.insert(name.to_owned(), location);
        self
    }

    pub fn without_attrib(mut self, name: &str) -> Self {
        self.attribs.remove(name);
        self
    }

    pub fn with_version(mut self, major: GLint, minor: GLint) -> Self {
        self.version = (major, minor);
        self
    }

    /// The currently bound vertex array and `GL_ARRAY_BUFFER`.
    pub fn bindings(&self) -> (GLuint, GLuint) {
        (self.vertex_array.get(), self.array_buffer.get())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> GLuint {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Gl for FakeGl {
    fn create_shader(&self, ty: GLenum) -> GlResult<GLuint> {
        let id = self.alloc();
        self.record(Call::CreateShader { ty, id });
        Ok(id)
    }

    fn shader_source(&self, shader: GLuint, source: &str) -> GlResult<()> {
        self.record(Call::ShaderSource { shader, source: source.to_owned() });
        Ok(())
    }

    fn compile_shader(&self, shader: GLuint) -> GlResult<()> {
        self.record(Call::CompileShader(shader));
        Ok(())
    }

    fn shader_parameter(&self, shader: GLuint, pname: GLenum) -> GlResult<GLint> {
        self.record(Call::ShaderParameter { shader, pname });
        Ok(match pname {
            gl::COMPILE_STATUS => self.compile_log.is_none() as GLint,
            _ => 0,
        })
    }

    fn shader_info_log(&self, shader: GLuint) -> GlResult<String> {
        self.record(Call::ShaderInfoLog(shader));
        Ok(self.compile_log.clone().unwrap_or_default())
    }

    fn delete_shader(&self, shader: GLuint) -> GlResult<()> {
        self.record(Call::DeleteShader(shader));
        Ok(())
    }

    fn create_program(&self) -> GlResult<GLuint> {
        let id = self.alloc();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) -> GlResult<()> {
        self.record(Call::AttachShader { program, shader });
        Ok(())
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) -> GlResult<()> {
        self.record(Call::DetachShader { program, shader });
        Ok(())
    }

    fn link_program(&self, program: GLuint) -> GlResult<()> {
        self.record(Call::LinkProgram(program));
        match self.link_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn program_parameter(&self, program: GLuint, pname: GLenum) -> GlResult<GLint> {
        self.record(Call::ProgramParameter { program, pname });
        Ok(match pname {
            gl::LINK_STATUS => self.link_log.is_none() as GLint,
            _ => 0,
        })
    }

    fn program_info_log(&self, program: GLuint) -> GlResult<String> {
        self.record(Call::ProgramInfoLog(program));
        Ok(self.link_log.clone().unwrap_or_default())
    }

    fn use_program(&self, program: GLuint) -> GlResult<()> {
        self.record(Call::UseProgram(program));
        Ok(())
    }

    fn attrib_location(&self, program: GLuint, name: &str) -> GlResult<GLint> {
        self.record(Call::AttribLocation { program, name: name.to_owned() });
        Ok(self.attribs.get(name).cloned().unwrap_or(-1))
    }

    fn delete_program(&self, program: GLuint) -> GlResult<()> {
        self.record(Call::DeleteProgram(program));
        Ok(())
    }

    fn gen_vertex_array(&self) -> GlResult<GLuint> {
        let id = self.alloc();
        self.record(Call::GenVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: GLuint) -> GlResult<()> {
        self.vertex_array.set(vao);
        self.record(Call::BindVertexArray(vao));
        Ok(())
    }

    fn delete_vertex_array(&self, vao: GLuint) -> GlResult<()> {
        self.record(Call::DeleteVertexArray(vao));
        Ok(())
    }

    fn gen_buffer(&self) -> GlResult<GLuint> {
        let id = self.alloc();
        self.record(Call::GenBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) -> GlResult<()> {
        if target == gl::ARRAY_BUFFER {
            self.array_buffer.set(buffer);
        }
        self.record(Call::BindBuffer { target, buffer });
        Ok(())
    }

    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) -> GlResult<()> {
        self.record(Call::BufferData { target, data: data.to_vec(), usage });
        Ok(())
    }

    fn delete_buffer(&self, buffer: GLuint) -> GlResult<()> {
        self.record(Call::DeleteBuffer(buffer));
        Ok(())
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) -> GlResult<()> {
        self.record(Call::EnableVertexAttribArray { index, vao: self.vertex_array.get() });
        Ok(())
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
        self.record(Call::VertexAttribPointer {
            index,
            size,
            ty,
            normalized,
            stride,
            offset,
            buffer: self.array_buffer.get(),
            vao: self.vertex_array.get(),
        });
        Ok(())
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) -> GlResult<()> {
        self.record(Call::ClearColor([r, g, b, a]));
        Ok(())
    }

    fn clear(&self, mask: GLbitfield) -> GlResult<()> {
        self.record(Call::Clear(mask));
        Ok(())
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) -> GlResult<()> {
        self.record(Call::DrawArrays { mode, first, count });
        Ok(())
    }

    fn get_string(&self, name: GLenum) -> GlResult<String> {
        self.record(Call::GetString(name));
        Ok(match name {
            gl::VERSION => format!("{}.{}.0 Fake", self.version.0, self.version.1),
            gl::SHADING_LANGUAGE_VERSION => "3.30 Fake".to_owned(),
            gl::VENDOR => "Fake Vendor".to_owned(),
            gl::RENDERER => "Fake Renderer".to_owned(),
            _ => String::new(),
        })
    }

    fn get_integer(&self, pname: GLenum) -> GlResult<GLint> {
        self.record(Call::GetInteger(pname));
        Ok(match pname {
            gl::MAJOR_VERSION => self.version.0,
            gl::MINOR_VERSION => self.version.1,
            _ => 0,
        })
    }
}
