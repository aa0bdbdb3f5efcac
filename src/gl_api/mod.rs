#[macro_use]
pub mod error;

pub mod buffer;
pub mod context;
pub mod info;
pub mod layout;
pub mod shader;
pub mod vertex_array;

#[cfg(test)]
pub mod fake;
