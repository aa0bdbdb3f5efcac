use cgmath::Vector3;

use super::context::Gl;
use super::error::GlResult;

pub unsafe trait VertexAttribute: Copy {
    /// Issue the appropriate calls to `glVertexAttribPointer` based on the
    /// layout of this type, starting at `base_slot`. Returns the number of
    /// attribute slots used.
    fn define_attribs<G: Gl + ?Sized>(gl: &G, base_slot: u32, stride: i32, offset: u32) -> GlResult<u32>;
}

macro_rules! layout_simple {
    ($type:ty: $gl_type:ident $amount:expr) => {
        unsafe impl VertexAttribute for $type {
            fn define_attribs<G: Gl + ?Sized>(gl: &G, slot: u32, stride: i32, offset: u32) -> GlResult<u32> {
                let normalized = false;
                gl.enable_vertex_attrib_array(slot)?;
                gl.vertex_attrib_pointer(slot, $amount, ::gl::$gl_type, normalized, stride, offset as usize)?;
                Ok(1)
            }
        }
    };
}

layout_simple!([f32; 3]: FLOAT 3);
layout_simple!(Vector3<f32>: FLOAT 3);
