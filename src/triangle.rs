use cgmath::Vector3;

use crate::gl_api::buffer::{UsageType, VertexBuffer};
use crate::gl_api::context::Gl;
use crate::gl_api::shader::program::{Program, ProgramError};
use crate::gl_api::vertex_array::VertexArray;

/// Name of the position input in the vertex shader.
pub const POSITION_ATTRIB: &str = "vert";

pub const TRIANGLE: [Vector3<f32>; 3] = [
    //          x     y    z
    Vector3 { x: 0.0, y: 0.8, z: 0.0 },
    Vector3 { x: -0.8, y: -0.8, z: 0.0 },
    Vector3 { x: 0.8, y: -0.8, z: 0.0 },
];

pub type TriangleVao<'g, G> = VertexArray<'g, G, Vector3<f32>>;

/// Uploads `TRIANGLE` and wires it to `program`'s `vert` input.
///
/// Returns the vertex array; it owns the buffer, and leaves both the array
/// buffer and vertex array bindings cleared.
pub fn load_triangle<'g, G: Gl + ?Sized>(gl: &'g G, program: &Program<'g, G>) -> Result<TriangleVao<'g, G>, ProgramError> {
    let slot = program.attrib_location(POSITION_ATTRIB)?;

    let mut vbo = VertexBuffer::new(gl)?;
    vbo.upload(&TRIANGLE, UsageType::StaticDraw)?;

    let mut vao = VertexArray::new(gl)?;
    vao.add_buffer(slot, vbo)?;

    debug!("uploaded triangle into vao {} (attribute slot {})", vao.id(), slot);
    Ok(vao)
}
