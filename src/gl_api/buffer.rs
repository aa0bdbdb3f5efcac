use gl;
use gl::types::*;
use std::marker::PhantomData;
use std::mem;
use std::slice;

use super::context::Gl;
use super::error::GlResult;

/// Usage hint for `glBufferData`. It does not change what the buffer holds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum UsageType {
    StaticDraw = gl::STATIC_DRAW,
}

/// A `GL_ARRAY_BUFFER` holding vertices of type `T`.
#[derive(Debug)]
pub struct VertexBuffer<'g, G: Gl + ?Sized, T> {
    gl: &'g G,
    pub(crate) id: GLuint,
    length: usize,
    _phantom: PhantomData<*mut T>,
}

impl<'g, G: Gl + ?Sized, T: Copy> VertexBuffer<'g, G, T> {
    pub fn new(gl: &'g G) -> GlResult<Self> {
        let id = gl.gen_buffer()?;
        Ok(VertexBuffer {
            gl,
            id,
            length: 0,
            _phantom: PhantomData,
        })
    }

    pub fn bind(&self) -> GlResult<()> {
        self.gl.bind_buffer(gl::ARRAY_BUFFER, self.id)
    }

    pub fn unbind(&self) -> GlResult<()> {
        self.gl.bind_buffer(gl::ARRAY_BUFFER, 0)
    }

    /// Copies data from `data` to the gpu's memory. Leaves the buffer bound.
    pub fn upload(&mut self, data: &[T], usage_type: UsageType) -> GlResult<()> {
        self.bind()?;
        // `T: Copy` rules out anything with drop glue or owned pointers; the
        // vertex types we upload are plain `repr(C)` floats.
        let bytes = unsafe { slice::from_raw_parts(data.as_ptr() as *const u8, mem::size_of_val(data)) };
        self.gl.buffer_data(gl::ARRAY_BUFFER, bytes, usage_type as GLenum)?;
        self.length = data.len();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.length
    }
}

impl<'g, G: Gl + ?Sized, T> Drop for VertexBuffer<'g, G, T> {
    fn drop(&mut self) {
        if let Err(err) = self.gl.delete_buffer(self.id) {
            warn!("failed to delete buffer {}: {}", self.id, err);
        }
    }
}
