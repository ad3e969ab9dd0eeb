//! Vertex buffer generators.
//!
//! Both generators walk the grid row-major (`yi` outer, `xi` inner) and write
//! one (x, y, z) triple per point, so the point at grid position `(xi, yi)`
//! always lands at `3 * (yi * nx_pts + xi)`. The index generators in
//! [`super::wireframe`] rely on that layout.

use glam::{Vec2, Vec3};

use super::grid::GridDimensions;
use crate::error::{ensure_len, KernelResult};

/// Sample a height function `z = f(x, y)` over a rectangle.
///
/// The rectangle starts at `origin` and spans `size`; samples are spaced
/// `size.x / (nx_pts - 1)` and `size.y / (ny_pts - 1)` apart, so the last
/// row and column land exactly on the far edges.
///
/// Returns the number of floats written (`3 * nx_pts * ny_pts`). Nothing is
/// written when the grid is out of bounds or the buffer is too short.
pub fn generate_mesh<F>(
    buffer: &mut [f32],
    nx_pts: u32,
    ny_pts: u32,
    origin: Vec2,
    size: Vec2,
    height_fn: F,
) -> KernelResult<usize>
where
    F: Fn(f32, f32) -> f32,
{
    let grid = GridDimensions::new(nx_pts, ny_pts)?;
    generate_parametric_mesh(buffer, grid, origin, size, |x, y| {
        Vec3::new(x, y, height_fn(x, y))
    })
}

/// Sample a parametrized surface `(u, v) -> point` over a rectangle of
/// parameter space.
///
/// Same sampling rules as [`generate_mesh`]; used for surfaces that are not
/// graphs over the xy-plane (torus, Möbius strip).
pub fn generate_parametric_mesh<F>(
    buffer: &mut [f32],
    grid: GridDimensions,
    origin: Vec2,
    size: Vec2,
    surface: F,
) -> KernelResult<usize>
where
    F: Fn(f32, f32) -> Vec3,
{
    let required = grid.mesh_len();
    ensure_len(buffer.len(), required)?;

    let step = grid.step(size);
    let nx_pts = grid.nx_pts() as usize;

    for (index, point) in buffer[..required].chunks_exact_mut(3).enumerate() {
        let xi = (index % nx_pts) as f32;
        let yi = (index / nx_pts) as f32;
        let u = origin.x + xi * step.x;
        let v = origin.y + yi * step.y;
        point.copy_from_slice(&surface(u, v).to_array());
    }

    log::debug!(
        "Generated {}x{} mesh ({} floats)",
        grid.nx_pts(),
        grid.ny_pts(),
        required
    );
    Ok(required)
}
