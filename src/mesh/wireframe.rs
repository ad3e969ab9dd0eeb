//! Line-list index generation for grid wireframes.
//!
//! Each consecutive index pair `(a, b)` is one segment between vertices `a`
//! and `b` of a row-major vertex buffer. Every grid point owns the segments
//! to its upper neighbor, its right neighbor and, for triangle cells, the
//! diagonal to its upper-right neighbor. Points on an open boundary own
//! fewer segments, points on a closed seam reach across it.
//!
//! Two degenerate cases are emitted as-is so the output always matches
//! [`index_count`]. On a closed seam of an axis with only two samples, the
//! wrap segment repeats the interior edge it crosses. For projective triangle
//! wireframes, the diagonal of corner `(0, ny_pts - 1)` crosses both flipped
//! seams back to the corner itself and has zero length.

use super::grid::{CellShape, GridDimensions, MeshType, Seam};
use crate::error::{ensure_len, KernelResult};

/// Exact number of indices a wireframe of the given topology emits.
pub fn index_count(grid: GridDimensions, mesh_type: MeshType) -> usize {
    let nx_pts = grid.nx_pts() as usize;
    let ny_pts = grid.ny_pts() as usize;

    let columns = if mesh_type.x_seam().is_closed() {
        nx_pts
    } else {
        nx_pts - 1
    };
    let rows = if mesh_type.y_seam().is_closed() {
        ny_pts
    } else {
        ny_pts - 1
    };

    let horizontal = columns * ny_pts;
    let vertical = nx_pts * rows;
    let diagonal = match mesh_type.cell_shape() {
        CellShape::Square => 0,
        CellShape::Triangle => columns * rows,
    };

    2 * (horizontal + vertical + diagonal)
}

/// Fill `buffer` with the segments of a plain rectangular wireframe.
///
/// Produces exactly `2 * (2 * nx_pts * ny_pts - nx_pts - ny_pts)` indices
/// and returns that count. Nothing is written when the grid is out of
/// bounds or the buffer is too short.
pub fn generate_indices(buffer: &mut [u32], nx_pts: u32, ny_pts: u32) -> KernelResult<usize> {
    let grid = GridDimensions::new(nx_pts, ny_pts)?;
    generate_wireframe_indices(buffer, grid, MeshType::SquareWireframe)
}

/// Fill `buffer` with the segments of a wireframe of any [`MeshType`].
///
/// Per point, the vertical segment is emitted before the horizontal one and
/// the diagonal comes last.
pub fn generate_wireframe_indices(
    buffer: &mut [u32],
    grid: GridDimensions,
    mesh_type: MeshType,
) -> KernelResult<usize> {
    let required = index_count(grid, mesh_type);
    ensure_len(buffer.len(), required)?;

    let x_seam = mesh_type.x_seam();
    let y_seam = mesh_type.y_seam();
    let triangles = mesh_type.cell_shape() == CellShape::Triangle;

    let mut slots = buffer[..required].chunks_exact_mut(2);
    let mut emit = |from: u32, to: u32| {
        let slot = slots.next();
        debug_assert!(slot.is_some(), "index_count under-reports {mesh_type:?}");
        if let Some(slot) = slot {
            slot[0] = from;
            slot[1] = to;
        }
    };

    for yi in 0..grid.ny_pts() {
        for xi in 0..grid.nx_pts() {
            let v00 = grid.vertex_index(xi, yi);
            let up = upper_neighbor(grid, y_seam, xi, yi);

            if let Some((ux, uy)) = up {
                emit(v00, grid.vertex_index(ux, uy));
            }
            if let Some((rx, ry)) = right_neighbor(grid, x_seam, xi, yi) {
                emit(v00, grid.vertex_index(rx, ry));
            }
            if triangles {
                let diagonal = up.and_then(|(ux, uy)| right_neighbor(grid, x_seam, ux, uy));
                if let Some((dx, dy)) = diagonal {
                    emit(v00, grid.vertex_index(dx, dy));
                }
            }
        }
    }

    debug_assert!(
        slots.next().is_none(),
        "index_count over-reports {mesh_type:?}"
    );

    log::debug!(
        "Generated {:?} indices for {}x{} grid ({} indices)",
        mesh_type,
        grid.nx_pts(),
        grid.ny_pts(),
        required
    );
    Ok(required)
}

fn right_neighbor(grid: GridDimensions, seam: Seam, xi: u32, yi: u32) -> Option<(u32, u32)> {
    if xi + 1 < grid.nx_pts() {
        return Some((xi + 1, yi));
    }
    match seam {
        Seam::Open => None,
        Seam::Straight => Some((0, yi)),
        Seam::Flipped => Some((0, grid.ny_pts() - 1 - yi)),
    }
}

fn upper_neighbor(grid: GridDimensions, seam: Seam, xi: u32, yi: u32) -> Option<(u32, u32)> {
    if yi + 1 < grid.ny_pts() {
        return Some((xi, yi + 1));
    }
    match seam {
        Seam::Open => None,
        Seam::Straight => Some((xi, 0)),
        Seam::Flipped => Some((grid.nx_pts() - 1 - xi, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;
    use crate::mesh::grid::MAX_HEIGHT;

    fn segments(indices: &[u32]) -> Vec<(u32, u32)> {
        indices.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
    }

    #[test]
    fn test_generate_indices_small_grid() {
        let mut buffer = [0u32; 14];
        let written = generate_indices(&mut buffer, 3, 2).unwrap();

        assert_eq!(written, 14);
        assert_eq!(
            segments(&buffer),
            vec![(0, 3), (0, 1), (1, 4), (1, 2), (2, 5), (3, 4), (4, 5)]
        );
    }

    #[test]
    fn test_index_count_square_formula() {
        for (nx, ny) in [(2, 2), (3, 2), (7, 5), (64, 33)] {
            let grid = GridDimensions::new(nx, ny).unwrap();
            let expected = 2 * (2 * nx * ny - nx - ny) as usize;
            assert_eq!(index_count(grid, MeshType::SquareWireframe), expected);
        }
    }

    #[test]
    fn test_index_count_closed_topologies() {
        let grid = GridDimensions::new(6, 4).unwrap();
        let product = 24;
        // One segment per point per direction once both seams are closed.
        assert_eq!(index_count(grid, MeshType::ToroidalSquareWireframe), 4 * product);
        assert_eq!(index_count(grid, MeshType::ToroidalTriangleWireframe), 6 * product);
        assert_eq!(
            index_count(grid, MeshType::CylindricalSquareWireframe),
            2 * (2 * product - 6)
        );
        assert_eq!(
            index_count(grid, MeshType::CylindricalTriangleWireframe),
            2 * (3 * product - 2 * 6)
        );
        // Plain triangles: square edges plus one diagonal per cell.
        assert_eq!(
            index_count(grid, MeshType::TriangleWireframe),
            2 * ((2 * product - 10) + 5 * 3)
        );
    }

    #[test]
    fn test_cylinder_wraps_right_column() {
        let grid = GridDimensions::new(3, 2).unwrap();
        let mut buffer = vec![0u32; index_count(grid, MeshType::CylindricalSquareWireframe)];
        generate_wireframe_indices(&mut buffer, grid, MeshType::CylindricalSquareWireframe)
            .unwrap();

        let segments = segments(&buffer);
        assert!(segments.contains(&(2, 0)));
        assert!(segments.contains(&(5, 3)));
        assert_eq!(segments.len(), 9);
    }

    #[test]
    fn test_two_column_cylinder_repeats_interior_edge() {
        let grid = GridDimensions::new(2, 3).unwrap();
        let mut buffer = vec![0u32; index_count(grid, MeshType::CylindricalSquareWireframe)];
        generate_wireframe_indices(&mut buffer, grid, MeshType::CylindricalSquareWireframe)
            .unwrap();

        let segments = segments(&buffer);
        for row in 0..3 {
            let left = 2 * row;
            assert!(segments.contains(&(left, left + 1)));
            assert!(segments.contains(&(left + 1, left)));
        }
        assert_eq!(segments.len(), 10);
    }

    #[test]
    fn test_projective_triangle_corner_diagonal_is_degenerate() {
        let grid = GridDimensions::new(3, 2).unwrap();
        let mesh_type = MeshType::ProjectiveTriangleWireframe;
        let mut buffer = vec![0u32; index_count(grid, mesh_type)];
        let written = generate_wireframe_indices(&mut buffer, grid, mesh_type).unwrap();

        assert_eq!(written, buffer.len());
        let corner = grid.vertex_index(0, 1);
        assert!(segments(&buffer).contains(&(corner, corner)));
    }

    #[test]
    fn test_mobius_flips_across_seam() {
        let grid = GridDimensions::new(3, 3).unwrap();
        let mut buffer = vec![0u32; index_count(grid, MeshType::MobiusSquareWireframe)];
        generate_wireframe_indices(&mut buffer, grid, MeshType::MobiusSquareWireframe).unwrap();

        let segments = segments(&buffer);
        // (2, 0) -> (0, 2), (2, 1) -> (0, 1), (2, 2) -> (0, 0)
        assert!(segments.contains(&(2, 6)));
        assert!(segments.contains(&(5, 3)));
        assert!(segments.contains(&(8, 0)));
    }

    #[test]
    fn test_projective_flips_top_row() {
        let grid = GridDimensions::new(3, 2).unwrap();
        let mut buffer = vec![0u32; index_count(grid, MeshType::ProjectiveSquareWireframe)];
        generate_wireframe_indices(&mut buffer, grid, MeshType::ProjectiveSquareWireframe).unwrap();

        let segments = segments(&buffer);
        // Top row (3, 4, 5) glued to bottom row reversed (2, 1, 0).
        assert!(segments.contains(&(3, 2)));
        assert!(segments.contains(&(4, 1)));
        assert!(segments.contains(&(5, 0)));
    }

    #[test]
    fn test_triangle_diagonals() {
        let grid = GridDimensions::new(2, 2).unwrap();
        let mut buffer = vec![0u32; index_count(grid, MeshType::TriangleWireframe)];
        generate_wireframe_indices(&mut buffer, grid, MeshType::TriangleWireframe).unwrap();

        assert_eq!(segments(&buffer), vec![(0, 2), (0, 1), (0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_generate_indices_out_of_bounds_is_noop() {
        let mut buffer = vec![0u32; 64];
        let result = generate_indices(&mut buffer, 2, MAX_HEIGHT + 1);
        assert_eq!(
            result,
            Err(KernelError::InvalidDimensions {
                nx_pts: 2,
                ny_pts: MAX_HEIGHT + 1
            })
        );
        assert!(buffer.iter().all(|&index| index == 0));
    }

    #[test]
    fn test_generate_indices_buffer_too_small() {
        let mut buffer = [0u32; 13];
        assert_eq!(
            generate_indices(&mut buffer, 3, 2),
            Err(KernelError::BufferTooSmall {
                required: 14,
                actual: 13
            })
        );
        assert!(buffer.iter().all(|&index| index == 0));
    }
}
