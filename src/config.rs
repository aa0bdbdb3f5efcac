use std::path::PathBuf;

pub const VERTEX_SHADER_PATH: &str = "vertex_shader.txt";
pub const FRAGMENT_SHADER_PATH: &str = "fragment_shader.txt";

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested core profile version; anything older is refused at startup.
    pub gl_version: (u8, u8),
    pub color_bits: u8,
    pub alpha_bits: u8,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Hello Triangle".to_owned(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            color_bits: 24,
            alpha_bits: 8,
            vsync: true,
        }
    }
}

/// Shader sources, relative to the working directory.
#[derive(Clone, Debug)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        ShaderPaths {
            vertex: PathBuf::from(VERTEX_SHADER_PATH),
            fragment: PathBuf::from(FRAGMENT_SHADER_PATH),
        }
    }
}

#[cfg(test)]
impl ShaderPaths {
    /// The shader files checked in next to `Cargo.toml`.
    pub fn shipped() -> Self {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        ShaderPaths {
            vertex: root.join(VERTEX_SHADER_PATH),
            fragment: root.join(FRAGMENT_SHADER_PATH),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub window: WindowConfig,
    pub shaders: ShaderPaths,
}
