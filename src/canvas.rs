//! Canvas: a validated generation pass over the kernel buffers.

use crate::error::KernelResult;
use crate::mesh::{index_count, CanvasParameters, GridDimensions, MeshType};

/// Host parameters plus the sizes derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    parameters: CanvasParameters,
    grid: GridDimensions,
    index_size: usize,
}

impl Canvas {
    /// Validate `parameters` and derive buffer sizes.
    pub fn new(parameters: CanvasParameters) -> KernelResult<Self> {
        let grid = parameters.grid()?;
        Ok(Self {
            parameters,
            grid,
            index_size: index_count(grid, parameters.mesh_type),
        })
    }

    pub fn parameters(&self) -> &CanvasParameters {
        &self.parameters
    }

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    pub fn mesh_type(&self) -> MeshType {
        self.parameters.mesh_type
    }

    pub fn number_of_points(&self) -> usize {
        self.grid.point_count()
    }

    /// Number of floats in the vertex buffer's live prefix.
    pub fn mesh_size(&self) -> usize {
        self.grid.mesh_len()
    }

    /// Number of indices in the index buffer's live prefix.
    pub fn index_size(&self) -> usize {
        self.index_size
    }
}
