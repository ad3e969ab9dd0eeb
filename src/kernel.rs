//! Kernel state: buffers, rotation and the main canvas.
//!
//! [`Kernel`] replaces the free-standing globals of a per-page kernel with one
//! owned value. The host-facing entry points come in two flavors:
//!
//! - canvas-driven (`make_wireframe` + `rotate`), where the kernel tracks the
//!   grid it last generated;
//! - address-driven (`*_at`), where the host passes a buffer address and grid
//!   size on every call. Addresses are resolved against the kernel's own
//!   buffers, never dereferenced blindly.

use crate::buffers::{BufferView, MeshBuffers};
use crate::canvas::Canvas;
use crate::error::{KernelError, KernelResult};
use crate::mesh::{generate_indices, generate_wireframe_indices, CanvasParameters, GridDimensions};
use crate::rotation::{Rotation, TrigMode};
use crate::surfaces::Surface;
use crate::KernelConfig;

/// Owns the shared vertex and index buffers, the rotation state and the
/// main canvas.
///
/// Address-driven generation at the start of a buffer replaces the buffer's
/// live prefix, so it also drops the main canvas; [`Kernel::rotate`] then
/// fails with [`KernelError::NoCanvas`] until the next
/// [`Kernel::make_wireframe`].
pub struct Kernel {
    buffers: MeshBuffers,
    rotation: Rotation,
    canvas: Option<Canvas>,
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new(&KernelConfig::default())
    }
}

impl Kernel {
    pub fn new(config: &KernelConfig) -> Self {
        Self {
            buffers: MeshBuffers::new(),
            rotation: Rotation::new(config.initial_angle, config.trig_mode),
            canvas: None,
        }
    }

    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// The canvas configured last, if any.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn set_rotation_angle(&mut self, angle: f32) {
        self.rotation.set_rotation_angle(angle);
    }

    pub fn set_trig_mode(&mut self, mode: TrigMode) {
        self.rotation.set_mode(mode);
    }

    pub fn mesh_view(&self) -> BufferView {
        self.buffers.vertex_view()
    }

    pub fn index_view(&self) -> BufferView {
        self.buffers.index_view()
    }

    /// Make `parameters` the main canvas and size the live buffer prefixes
    /// for it. Buffer contents are not touched.
    pub fn configure(&mut self, parameters: CanvasParameters) -> KernelResult<Canvas> {
        let canvas = Canvas::new(parameters)?;
        self.buffers
            .set_live_lengths(canvas.mesh_size(), canvas.index_size());
        self.canvas = Some(canvas);

        log::info!(
            "Canvas configured: {}x{} {:?} ({} vertices, {} indices)",
            parameters.nx_pts,
            parameters.ny_pts,
            parameters.mesh_type,
            canvas.number_of_points(),
            canvas.index_size()
        );
        Ok(canvas)
    }

    /// Configure the main canvas, sample `surface` over it and build its
    /// wireframe indices.
    pub fn make_wireframe(
        &mut self,
        parameters: CanvasParameters,
        surface: &Surface,
    ) -> KernelResult<Canvas> {
        let canvas = self.configure(parameters)?;
        surface.generate(
            self.buffers.vertex_storage_mut(),
            canvas.grid(),
            parameters.origin(),
            parameters.size(),
        )?;
        generate_wireframe_indices(
            self.buffers.index_storage_mut(),
            canvas.grid(),
            canvas.mesh_type(),
        )?;
        Ok(canvas)
    }

    /// Apply one rotation increment to every vertex of the main canvas.
    pub fn rotate(&mut self) -> KernelResult<()> {
        let canvas = self.canvas.ok_or(KernelError::NoCanvas)?;
        self.rotation
            .rotate(self.buffers.vertex_storage_mut(), canvas.number_of_points())
    }

    /// Sample a graph or parametric surface into the vertex buffer starting
    /// at `address`, over the surface's natural domain.
    pub fn generate_mesh_at(
        &mut self,
        address: usize,
        nx_pts: u32,
        ny_pts: u32,
        surface: &Surface,
    ) -> KernelResult<usize> {
        let offset = self.buffers.vertex_offset(address)?;
        let grid = GridDimensions::new(nx_pts, ny_pts)?;
        let parameters = surface.parameters(nx_pts, ny_pts);

        let written = surface.generate(
            &mut self.buffers.vertex_storage_mut()[offset..],
            grid,
            parameters.origin(),
            parameters.size(),
        )?;
        if offset == 0 {
            self.buffers.set_vertex_len(written);
            self.canvas = None;
        }
        Ok(written)
    }

    /// Write plain rectangular wireframe indices starting at `address`.
    pub fn generate_indices_at(
        &mut self,
        address: usize,
        nx_pts: u32,
        ny_pts: u32,
    ) -> KernelResult<usize> {
        let offset = self.buffers.index_offset(address)?;
        let written = generate_indices(
            &mut self.buffers.index_storage_mut()[offset..],
            nx_pts,
            ny_pts,
        )?;
        if offset == 0 {
            self.buffers.set_index_len(written);
            self.canvas = None;
        }
        Ok(written)
    }

    /// Rotate `n_pts` vertices starting at `address`.
    pub fn rotate_at(&mut self, address: usize, n_pts: usize) -> KernelResult<()> {
        let offset = self.buffers.vertex_offset(address)?;
        self.rotation
            .rotate(&mut self.buffers.vertex_storage_mut()[offset..], n_pts)
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("buffers", &self.buffers)
            .field("rotation", &self.rotation)
            .field("canvas", &self.canvas)
            .finish()
    }
}
