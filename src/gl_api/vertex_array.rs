use gl::types::*;

use super::buffer::VertexBuffer;
use super::context::Gl;
use super::error::GlResult;
use super::layout::VertexAttribute;

/// A vertex array that owns the buffer its attribute points into, so the
/// buffer lives exactly as long as the binding recorded in the VAO.
#[derive(Debug)]
pub struct VertexArray<'g, G: Gl + ?Sized, T: VertexAttribute> {
    gl: &'g G,
    pub(crate) id: GLuint,
    buffer: Option<VertexBuffer<'g, G, T>>,
}

impl<'g, G: Gl + ?Sized, T: VertexAttribute> VertexArray<'g, G, T> {
    pub fn new(gl: &'g G) -> GlResult<Self> {
        let id = gl.gen_vertex_array()?;
        Ok(VertexArray { gl, id, buffer: None })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) -> GlResult<()> {
        self.gl.bind_vertex_array(self.id)
    }

    pub fn unbind(&self) -> GlResult<()> {
        self.gl.bind_vertex_array(0)
    }

    /// Number of vertices in the attached buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.as_ref().map_or(0, |buffer| buffer.len())
    }

    /// Points attribute `slot` at `buffer` (tightly packed, offset 0) and
    /// takes ownership of the buffer. Both the array buffer binding and this
    /// VAO are unbound afterwards.
    pub fn add_buffer(&mut self, slot: u32, buffer: VertexBuffer<'g, G, T>) -> GlResult<()> {
        self.bind()?;
        // The attribute pointer captures whatever is bound to ARRAY_BUFFER.
        buffer.bind()?;

        T::define_attribs(self.gl, slot, 0, 0)?;

        buffer.unbind()?;
        self.unbind()?;

        self.buffer = Some(buffer);
        Ok(())
    }
}

impl<'g, G: Gl + ?Sized, T: VertexAttribute> Drop for VertexArray<'g, G, T> {
    fn drop(&mut self) {
        if let Err(err) = self.gl.delete_vertex_array(self.id) {
            warn!("failed to delete vertex array {}: {}", self.id, err);
        }
    }
}
