//! Repository implementations backed by the local filesystem.

mod fs_graph_repository;
mod fs_shader_repository;

pub use fs_graph_repository::FsGraphRepository;
pub use fs_shader_repository::FsShaderRepository;
