//! Integration tests for mesh generation, wireframe indices and rotation.
//!
//! Tests are parameterized using `rstest` over grid sizes and mesh types.
//!
//! ```bash
//! cargo test --test wireframe
//! ```

use std::collections::HashSet;

use glam::Vec2;
use rstest::rstest;

use surface_wireframe::mesh::{
    generate_indices, generate_mesh, generate_wireframe_indices, index_count,
    MAX_INDEX_BUFFER_SIZE,
};
use surface_wireframe::{
    CanvasParameters, GridDimensions, Kernel, KernelError, MeshType, Rotation, Surface, TrigMode,
    MAX_HEIGHT, MAX_WIDTH,
};

fn segments(indices: &[u32]) -> Vec<(u32, u32)> {
    indices
        .chunks_exact(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .collect()
}

// ============================================================================
// Index generation
// ============================================================================

#[rstest]
#[case::small(3, 2)]
#[case::square(8, 8)]
#[case::wide(17, 3)]
#[case::tall(2, 31)]
fn test_index_count_matches_output_for_every_mesh_type(#[case] nx: u32, #[case] ny: u32) {
    let grid = GridDimensions::new(nx, ny).unwrap();
    let mut buffer = vec![u32::MAX; MAX_INDEX_BUFFER_SIZE];

    for mesh_type in MeshType::ALL {
        let written = generate_wireframe_indices(&mut buffer, grid, mesh_type).unwrap();
        assert_eq!(written, index_count(grid, mesh_type), "{mesh_type:?}");
        assert!(
            buffer[..written].iter().all(|&i| i < nx * ny),
            "{mesh_type:?} emitted an index outside the grid"
        );
    }
}

#[rstest]
#[case::small(3, 2)]
#[case::medium(7, 5)]
#[case::large(64, 48)]
fn test_square_wireframe_covers_each_grid_edge_once(#[case] nx: u32, #[case] ny: u32) {
    let mut buffer = vec![0u32; MAX_INDEX_BUFFER_SIZE];
    let written = generate_indices(&mut buffer, nx, ny).unwrap();
    assert_eq!(written as u32, 2 * (2 * nx * ny - nx - ny));

    let emitted = segments(&buffer[..written]);
    let unique: HashSet<_> = emitted.iter().copied().collect();
    assert_eq!(unique.len(), emitted.len(), "duplicate segment");

    let mut expected = HashSet::new();
    for yi in 0..ny {
        for xi in 0..nx {
            let i = yi * nx + xi;
            if xi + 1 < nx {
                expected.insert((i, i + 1));
            }
            if yi + 1 < ny {
                expected.insert((i, i + nx));
            }
        }
    }
    assert_eq!(unique, expected);
}

#[rstest]
#[case::cylinder(MeshType::CylindricalSquareWireframe)]
#[case::torus(MeshType::ToroidalSquareWireframe)]
#[case::klein(MeshType::KleinSquareWireframe)]
#[case::projective(MeshType::ProjectiveSquareWireframe)]
fn test_closed_square_meshes_give_every_point_four_neighbors_inside(
    #[case] mesh_type: MeshType,
) {
    let (nx, ny) = (6, 5);
    let grid = GridDimensions::new(nx, ny).unwrap();
    let mut buffer = vec![0u32; index_count(grid, mesh_type)];
    generate_wireframe_indices(&mut buffer, grid, mesh_type).unwrap();

    let mut degree = vec![0usize; (nx * ny) as usize];
    for (a, b) in segments(&buffer) {
        degree[a as usize] += 1;
        degree[b as usize] += 1;
    }

    // Interior columns never touch a seam, so they always have four neighbors.
    for yi in 1..ny - 1 {
        for xi in 1..nx - 1 {
            assert_eq!(degree[(yi * nx + xi) as usize], 4, "{mesh_type:?} ({xi}, {yi})");
        }
    }
    // Closing the x seam gives the left and right columns a fourth neighbor.
    if mesh_type.x_seam().is_closed() {
        for yi in 1..ny - 1 {
            assert_eq!(degree[(yi * nx) as usize], 4);
            assert_eq!(degree[(yi * nx + nx - 1) as usize], 4);
        }
    }
}

#[test]
fn test_index_buffer_too_small_writes_nothing() {
    let mut buffer = [u32::MAX; 13];
    assert_eq!(
        generate_indices(&mut buffer, 3, 2),
        Err(KernelError::BufferTooSmall {
            required: 14,
            actual: 13
        })
    );
    assert!(buffer.iter().all(|&i| i == u32::MAX));
}

// ============================================================================
// Mesh generation
// ============================================================================

#[rstest]
#[case::small(3, 2, Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0))]
#[case::offset(5, 4, Vec2::new(-1.0, -1.0), Vec2::new(2.0, 2.0))]
#[case::skewed(9, 3, Vec2::new(0.5, -3.0), Vec2::new(4.0, 0.25))]
fn test_mesh_points_follow_grid_formula(
    #[case] nx: u32,
    #[case] ny: u32,
    #[case] origin: Vec2,
    #[case] size: Vec2,
) {
    let mut buffer = vec![f32::NAN; (3 * nx * ny) as usize + 6];
    let written = generate_mesh(&mut buffer, nx, ny, origin, size, |x, y| x * y).unwrap();
    assert_eq!(written, (3 * nx * ny) as usize);

    let dx = size.x / (nx - 1) as f32;
    let dy = size.y / (ny - 1) as f32;
    for yi in 0..ny {
        for xi in 0..nx {
            let base = (3 * (yi * nx + xi)) as usize;
            let x = origin.x + xi as f32 * dx;
            let y = origin.y + yi as f32 * dy;
            assert!((buffer[base] - x).abs() < 1e-5);
            assert!((buffer[base + 1] - y).abs() < 1e-5);
            assert!((buffer[base + 2] - x * y).abs() < 1e-4);
        }
    }
    assert!(buffer[written..].iter().all(|v| v.is_nan()));
}

#[rstest]
#[case::too_wide(MAX_WIDTH + 1, 4)]
#[case::too_tall(4, MAX_HEIGHT + 1)]
#[case::single_column(1, 4)]
#[case::single_row(4, 1)]
fn test_out_of_bounds_grid_is_a_no_op(#[case] nx: u32, #[case] ny: u32) {
    let mut mesh = vec![7.0f32; 64];
    let mut indices = vec![7u32; 64];

    assert_eq!(
        generate_mesh(&mut mesh, nx, ny, Vec2::ZERO, Vec2::ONE, |x, y| x + y),
        Err(KernelError::InvalidDimensions {
            nx_pts: nx,
            ny_pts: ny
        })
    );
    assert!(generate_indices(&mut indices, nx, ny).is_err());
    assert!(mesh.iter().all(|&v| v == 7.0));
    assert!(indices.iter().all(|&i| i == 7));
}

// ============================================================================
// Rotation
// ============================================================================

fn paraboloid_mesh(nx: u32, ny: u32) -> Vec<f32> {
    let parameters = Surface::ELLIPTIC_PARABOLOID.parameters(nx, ny);
    let mut buffer = vec![0.0; (3 * nx * ny) as usize];
    let grid = parameters.grid().unwrap();
    Surface::ELLIPTIC_PARABOLOID
        .generate(&mut buffer, grid, parameters.origin(), parameters.size())
        .unwrap();
    buffer
}

#[rstest]
#[case::tiny(0.001, 1000)]
#[case::frame(0.0125, 400)]
#[case::coarse(0.09, 100)]
fn test_small_angle_steps_compose_to_exact_rotation(#[case] theta: f32, #[case] steps: usize) {
    let original = paraboloid_mesh(8, 8);
    let mut buffer = original.clone();
    let rotation = Rotation::new(theta, TrigMode::SmallAngle);
    for _ in 0..steps {
        rotation.rotate(&mut buffer, 64).unwrap();
    }

    let total = theta as f64 * steps as f64;
    let (sin, cos) = total.sin_cos();
    for (before, after) in original.chunks_exact(3).zip(buffer.chunks_exact(3)) {
        let (x, y) = (before[0] as f64, before[1] as f64);
        let expected_x = cos * x - sin * y;
        let expected_y = cos * y + sin * x;
        assert!((after[0] as f64 - expected_x).abs() < 5e-3);
        assert!((after[1] as f64 - expected_y).abs() < 5e-3);
        assert_eq!(after[2], before[2]);
    }
}

#[rstest]
#[case::exact(TrigMode::Exact)]
#[case::small_angle(TrigMode::SmallAngle)]
fn test_rotation_preserves_distance_from_axis(#[case] mode: TrigMode) {
    let original = paraboloid_mesh(16, 16);
    let mut buffer = original.clone();
    let rotation = Rotation::new(0.05, mode);
    for _ in 0..200 {
        rotation.rotate(&mut buffer, 256).unwrap();
    }

    for (before, after) in original.chunks_exact(3).zip(buffer.chunks_exact(3)) {
        let r_before = Vec2::new(before[0], before[1]).length();
        let r_after = Vec2::new(after[0], after[1]).length();
        assert!((r_before - r_after).abs() < 1e-3);
    }
}

// ============================================================================
// Kernel
// ============================================================================

#[rstest]
#[case::paraboloid("ellipticParaboloid")]
#[case::saddle("hyperbolicParaboloid")]
#[case::torus("torus")]
#[case::mobius("mobiusStrip")]
fn test_catalogue_surfaces_build_consistent_wireframes(#[case] name: &str) {
    let surface = Surface::from_name(name).unwrap();
    let mut kernel = Kernel::default();
    let canvas = kernel
        .make_wireframe(surface.parameters(24, 12), &surface)
        .unwrap();

    let vertices = kernel.buffers().vertices();
    let indices = kernel.buffers().indices();
    assert_eq!(vertices.len(), canvas.mesh_size());
    assert_eq!(indices.len(), canvas.index_size());
    assert!(vertices.iter().all(|v| v.is_finite()));
    assert!(indices.iter().all(|&i| (i as usize) < canvas.number_of_points()));
}

#[test]
fn test_rejected_canvas_keeps_previous_one() {
    let mut kernel = Kernel::default();
    kernel
        .make_wireframe(CanvasParameters::default(), &Surface::ELLIPTIC_PARABOLOID)
        .unwrap();
    let vertices = kernel.buffers().vertices().to_vec();

    let result = kernel.make_wireframe(
        CanvasParameters {
            ny_pts: MAX_HEIGHT + 1,
            ..CanvasParameters::default()
        },
        &Surface::ELLIPTIC_PARABOLOID,
    );
    assert!(result.is_err());
    assert_eq!(kernel.buffers().vertices(), vertices.as_slice());
    assert_eq!(
        kernel.canvas().map(|canvas| *canvas.parameters()),
        Some(CanvasParameters::default())
    );
}
