//! Grid and canvas parameter types.
//!
//! This module provides:
//! - [`GridDimensions`] - A validated `nx_pts x ny_pts` sample grid
//! - [`MeshType`] - Wireframe topology tag shared with the host
//! - [`CellShape`] and [`Seam`] - The two axes a [`MeshType`] decomposes into
//! - [`CanvasParameters`] - The plain value the host configures a canvas with

use glam::Vec2;

use crate::error::{KernelError, KernelResult};

/// Maximum number of grid points along the horizontal axis.
pub const MAX_WIDTH: u32 = 512;

/// Maximum number of grid points along the vertical axis.
pub const MAX_HEIGHT: u32 = 512;

/// Maximum number of points in any grid.
pub const MAX_POINTS: usize = (MAX_WIDTH * MAX_HEIGHT) as usize;

/// Capacity of the vertex buffer, three floats per point.
pub const MAX_MESH_BUFFER_SIZE: usize = 3 * MAX_POINTS;

/// Capacity of the index buffer. Closed triangle wireframes are the densest
/// topology with three segments (six indices) per point.
pub const MAX_INDEX_BUFFER_SIZE: usize = 6 * MAX_POINTS;

/// A rectangular grid of parameter-space samples.
///
/// Construction enforces `2 <= nx_pts <= MAX_WIDTH` and
/// `2 <= ny_pts <= MAX_HEIGHT`, so every derived size fits in a `u32` and
/// step sizes never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    nx_pts: u32,
    ny_pts: u32,
}

impl GridDimensions {
    /// Validate and create grid dimensions.
    pub fn new(nx_pts: u32, ny_pts: u32) -> KernelResult<Self> {
        let valid_x = (2..=MAX_WIDTH).contains(&nx_pts);
        let valid_y = (2..=MAX_HEIGHT).contains(&ny_pts);
        if !(valid_x && valid_y) {
            return Err(KernelError::InvalidDimensions { nx_pts, ny_pts });
        }
        Ok(Self { nx_pts, ny_pts })
    }

    pub fn nx_pts(&self) -> u32 {
        self.nx_pts
    }

    pub fn ny_pts(&self) -> u32 {
        self.ny_pts
    }

    /// Total number of grid points.
    pub fn point_count(&self) -> usize {
        self.nx_pts as usize * self.ny_pts as usize
    }

    /// Number of floats needed to store every point as an (x, y, z) triple.
    pub fn mesh_len(&self) -> usize {
        3 * self.point_count()
    }

    /// Row-major vertex index of grid position `(xi, yi)`.
    pub fn vertex_index(&self, xi: u32, yi: u32) -> u32 {
        yi * self.nx_pts + xi
    }

    /// Parameter-space step between neighboring samples for a sampled
    /// rectangle of the given size.
    pub fn step(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x / (self.nx_pts - 1) as f32,
            size.y / (self.ny_pts - 1) as f32,
        )
    }
}

/// Shape of a single grid cell in the wireframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
    /// Horizontal and vertical edges only.
    Square,
    /// Square cell plus one diagonal.
    Triangle,
}

/// How the last row or column of the grid is joined back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seam {
    /// Boundary left open.
    Open,
    /// Glued to the opposite boundary in the same orientation.
    Straight,
    /// Glued to the opposite boundary with the orientation reversed.
    Flipped,
}

impl Seam {
    pub fn is_closed(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

/// Wireframe topology.
///
/// Discriminants are the numeric tags the host passes in `meshType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum MeshType {
    #[default]
    SquareWireframe = 0,
    TriangleWireframe = 1,
    CylindricalSquareWireframe = 2,
    CylindricalTriangleWireframe = 3,
    MobiusSquareWireframe = 4,
    MobiusTriangleWireframe = 5,
    ToroidalSquareWireframe = 6,
    ToroidalTriangleWireframe = 7,
    KleinSquareWireframe = 8,
    KleinTriangleWireframe = 9,
    ProjectiveSquareWireframe = 10,
    ProjectiveTriangleWireframe = 11,
}

impl MeshType {
    /// Every mesh type, in tag order.
    pub const ALL: [MeshType; 12] = [
        Self::SquareWireframe,
        Self::TriangleWireframe,
        Self::CylindricalSquareWireframe,
        Self::CylindricalTriangleWireframe,
        Self::MobiusSquareWireframe,
        Self::MobiusTriangleWireframe,
        Self::ToroidalSquareWireframe,
        Self::ToroidalTriangleWireframe,
        Self::KleinSquareWireframe,
        Self::KleinTriangleWireframe,
        Self::ProjectiveSquareWireframe,
        Self::ProjectiveTriangleWireframe,
    ];

    /// Numeric tag used across the host boundary.
    pub fn tag(self) -> u32 {
        self as u32
    }

    pub fn cell_shape(self) -> CellShape {
        // Odd tags are the triangle variants.
        if self.tag() % 2 == 1 {
            CellShape::Triangle
        } else {
            CellShape::Square
        }
    }

    /// Seam joining the right column to the left column.
    pub fn x_seam(self) -> Seam {
        match self {
            Self::SquareWireframe | Self::TriangleWireframe => Seam::Open,
            Self::CylindricalSquareWireframe
            | Self::CylindricalTriangleWireframe
            | Self::ToroidalSquareWireframe
            | Self::ToroidalTriangleWireframe => Seam::Straight,
            Self::MobiusSquareWireframe
            | Self::MobiusTriangleWireframe
            | Self::KleinSquareWireframe
            | Self::KleinTriangleWireframe
            | Self::ProjectiveSquareWireframe
            | Self::ProjectiveTriangleWireframe => Seam::Flipped,
        }
    }

    /// Seam joining the top row to the bottom row.
    pub fn y_seam(self) -> Seam {
        match self {
            Self::SquareWireframe
            | Self::TriangleWireframe
            | Self::CylindricalSquareWireframe
            | Self::CylindricalTriangleWireframe
            | Self::MobiusSquareWireframe
            | Self::MobiusTriangleWireframe => Seam::Open,
            Self::ToroidalSquareWireframe
            | Self::ToroidalTriangleWireframe
            | Self::KleinSquareWireframe
            | Self::KleinTriangleWireframe => Seam::Straight,
            Self::ProjectiveSquareWireframe | Self::ProjectiveTriangleWireframe => Seam::Flipped,
        }
    }
}

impl TryFrom<u32> for MeshType {
    type Error = KernelError;

    fn try_from(tag: u32) -> KernelResult<Self> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or(KernelError::InvalidMeshType(tag))
    }
}

/// Geometry of one generation pass, as configured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasParameters {
    /// Number of samples along the horizontal axis.
    pub nx_pts: u32,
    /// Number of samples along the vertical axis.
    pub ny_pts: u32,
    /// Extent of the sampled rectangle along x.
    pub width: f32,
    /// Extent of the sampled rectangle along y.
    pub height: f32,
    /// Horizontal origin of the sampled rectangle.
    pub x_start: f32,
    /// Vertical origin of the sampled rectangle.
    pub y_start: f32,
    /// Wireframe topology.
    pub mesh_type: MeshType,
}

impl Default for CanvasParameters {
    fn default() -> Self {
        Self {
            nx_pts: 64,
            ny_pts: 64,
            width: 2.0,
            height: 2.0,
            x_start: -1.0,
            y_start: -1.0,
            mesh_type: MeshType::SquareWireframe,
        }
    }
}

impl CanvasParameters {
    /// Validated grid dimensions.
    pub fn grid(&self) -> KernelResult<GridDimensions> {
        GridDimensions::new(self.nx_pts, self.ny_pts)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x_start, self.y_start)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
