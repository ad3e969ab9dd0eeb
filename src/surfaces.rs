//! Surfaces shown in the gallery
//!
//! Graph surfaces are sampled as `z = f(x, y)` over a rectangle; parametric
//! ones map a rectangle of `(u, v)` parameters to points in space and come
//! with the closed [`MeshType`] that glues their seams.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::error::KernelResult;
use crate::mesh::{generate_parametric_mesh, CanvasParameters, GridDimensions, MeshType};

/// Half-width of the Möbius strip band in parameter space.
const MOBIUS_HALF_WIDTH: f32 = 0.5;

/// A surface the kernel can sample into a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// `z = x^2 + 2y^2 + shift`.
    EllipticParaboloid { shift: f32 },
    /// `z = x^2 - y^2`.
    HyperbolicParaboloid,
    /// Torus around the z-axis.
    Torus { major_radius: f32, minor_radius: f32 },
    /// Möbius strip around the z-axis.
    MobiusStrip { radius: f32 },
}

impl Surface {
    /// The paraboloid the wireframe demo animates.
    pub const ELLIPTIC_PARABOLOID: Surface = Surface::EllipticParaboloid { shift: -2.0 };

    /// Every surface under its host-facing name.
    pub const CATALOGUE: [(&'static str, Surface); 4] = [
        ("ellipticParaboloid", Self::ELLIPTIC_PARABOLOID),
        ("hyperbolicParaboloid", Surface::HyperbolicParaboloid),
        (
            "torus",
            Surface::Torus {
                major_radius: 1.0,
                minor_radius: 0.4,
            },
        ),
        ("mobiusStrip", Surface::MobiusStrip { radius: 1.0 }),
    ];

    /// Look up a catalogue surface by its host-facing name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CATALOGUE
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, surface)| *surface)
    }

    /// Height over `(x, y)` for graph surfaces, `None` for parametric ones.
    pub fn height(&self, x: f32, y: f32) -> Option<f32> {
        match *self {
            Self::EllipticParaboloid { shift } => Some(x * x + 2.0 * y * y + shift),
            Self::HyperbolicParaboloid => Some(x * x - y * y),
            Self::Torus { .. } | Self::MobiusStrip { .. } => None,
        }
    }

    /// Point on the surface for parameters `(u, v)`.
    pub fn point(&self, u: f32, v: f32) -> Vec3 {
        match *self {
            Self::Torus {
                major_radius,
                minor_radius,
            } => {
                let (sin_u, cos_u) = u.sin_cos();
                let (sin_v, cos_v) = v.sin_cos();
                let ring = major_radius + minor_radius * cos_v;
                Vec3::new(ring * cos_u, ring * sin_u, minor_radius * sin_v)
            }
            Self::MobiusStrip { radius } => {
                let (sin_u, cos_u) = u.sin_cos();
                let (sin_half, cos_half) = (0.5 * u).sin_cos();
                let ring = radius + v * cos_half;
                Vec3::new(ring * cos_u, ring * sin_u, v * sin_half)
            }
            Self::EllipticParaboloid { .. } | Self::HyperbolicParaboloid => {
                Vec3::new(u, v, self.height(u, v).unwrap_or_default())
            }
        }
    }

    /// Canvas parameters covering the surface's natural domain at the given
    /// resolution.
    ///
    /// Closed seams stop one step short of a full turn so the first and last
    /// columns are not sampled at the same point.
    pub fn parameters(&self, nx_pts: u32, ny_pts: u32) -> CanvasParameters {
        let full_turn =
            |samples: u32| TAU * samples.saturating_sub(1) as f32 / samples.max(1) as f32;
        match *self {
            Self::EllipticParaboloid { .. } | Self::HyperbolicParaboloid => CanvasParameters {
                nx_pts,
                ny_pts,
                ..CanvasParameters::default()
            },
            Self::Torus { .. } => CanvasParameters {
                nx_pts,
                ny_pts,
                width: full_turn(nx_pts),
                height: full_turn(ny_pts),
                x_start: 0.0,
                y_start: 0.0,
                mesh_type: MeshType::ToroidalSquareWireframe,
            },
            Self::MobiusStrip { .. } => CanvasParameters {
                nx_pts,
                ny_pts,
                width: full_turn(nx_pts),
                height: 2.0 * MOBIUS_HALF_WIDTH,
                x_start: 0.0,
                y_start: -MOBIUS_HALF_WIDTH,
                mesh_type: MeshType::MobiusSquareWireframe,
            },
        }
    }

    /// Canvas parameters at the gallery's default resolution.
    pub fn default_parameters(&self) -> CanvasParameters {
        let defaults = CanvasParameters::default();
        self.parameters(defaults.nx_pts, defaults.ny_pts)
    }

    /// Sample the surface over `grid` into `buffer`.
    pub fn generate(
        &self,
        buffer: &mut [f32],
        grid: GridDimensions,
        origin: Vec2,
        size: Vec2,
    ) -> KernelResult<usize> {
        generate_parametric_mesh(buffer, grid, origin, size, |u, v| self.point(u, v))
    }
}
