use std::path::Path;

pub mod program;
pub mod shader;

use self::program::*;
use self::shader::*;
use super::context::Gl;

/// Builds the vertex + fragment program used for every frame.
///
/// Both shaders are detached once the link has been issued, whether it
/// succeeded or not; the link status is checked only afterwards.
pub fn load_shader_program<'g, G, P1, P2>(gl: &'g G, vert: P1, frag: P2) -> Result<Program<'g, G>, ProgramError>
where
    G: Gl + ?Sized,
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let program = RawProgram::new(gl)?;

    let vertex = load_shader(gl, vert, ShaderType::Vertex)?;
    let fragment = load_shader(gl, frag, ShaderType::Fragment)?;

    program.attach_shader(&vertex)?;
    program.attach_shader(&fragment)?;

    let linked = program.link();

    program.detach_shader(&vertex)?;
    program.detach_shader(&fragment)?;
    linked?;

    let program = program.into_linked()?;
    info!("linked shader program {}", program.id());
    Ok(program)
}
