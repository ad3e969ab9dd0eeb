//! CPU-side wireframe mesh generation.
//!
//! This module provides:
//!
//! - [`GridDimensions`] - A validated rectangular sample grid
//! - [`CanvasParameters`] - Grid geometry plus a [`MeshType`] tag
//! - Vertex generators for height functions and parametrized surfaces
//! - Line-list index generators for every wireframe topology

pub mod generators;
mod grid;
pub mod wireframe;

pub use generators::{generate_mesh, generate_parametric_mesh};
pub use grid::{
    CanvasParameters, CellShape, GridDimensions, MeshType, Seam, MAX_HEIGHT,
    MAX_INDEX_BUFFER_SIZE, MAX_MESH_BUFFER_SIZE, MAX_POINTS, MAX_WIDTH,
};
pub use wireframe::{generate_indices, generate_wireframe_indices, index_count};
