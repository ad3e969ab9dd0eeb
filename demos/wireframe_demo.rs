//! Headless wireframe demo
//!
//! Builds a catalogue surface on the main canvas, spins it for a number of
//! frames and logs the buffer sizes and timing a renderer would see.
//!
//! Run with:
//!   cargo run --example wireframe_demo
//!   cargo run --example wireframe_demo -- --surface torus --nx 96 --ny 48
//!   cargo run --example wireframe_demo -- --mesh-type projective-triangle --small-angle

use std::time::Instant;

use clap::Parser;
use surface_wireframe::{Kernel, KernelConfig, KernelResult, MeshType, Surface, TrigMode};

/// Wireframe topology selection for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliMeshType {
    Square,
    Triangle,
    CylindricalSquare,
    CylindricalTriangle,
    MobiusSquare,
    MobiusTriangle,
    ToroidalSquare,
    ToroidalTriangle,
    KleinSquare,
    KleinTriangle,
    ProjectiveSquare,
    ProjectiveTriangle,
}

impl From<CliMeshType> for MeshType {
    fn from(cli: CliMeshType) -> Self {
        match cli {
            CliMeshType::Square => MeshType::SquareWireframe,
            CliMeshType::Triangle => MeshType::TriangleWireframe,
            CliMeshType::CylindricalSquare => MeshType::CylindricalSquareWireframe,
            CliMeshType::CylindricalTriangle => MeshType::CylindricalTriangleWireframe,
            CliMeshType::MobiusSquare => MeshType::MobiusSquareWireframe,
            CliMeshType::MobiusTriangle => MeshType::MobiusTriangleWireframe,
            CliMeshType::ToroidalSquare => MeshType::ToroidalSquareWireframe,
            CliMeshType::ToroidalTriangle => MeshType::ToroidalTriangleWireframe,
            CliMeshType::KleinSquare => MeshType::KleinSquareWireframe,
            CliMeshType::KleinTriangle => MeshType::KleinTriangleWireframe,
            CliMeshType::ProjectiveSquare => MeshType::ProjectiveSquareWireframe,
            CliMeshType::ProjectiveTriangle => MeshType::ProjectiveTriangleWireframe,
        }
    }
}

/// Wireframe kernel demo arguments.
#[derive(Parser, Debug)]
#[command(name = "wireframe_demo", about = "Generate and rotate a surface wireframe")]
struct Args {
    /// Surface from the catalogue (ellipticParaboloid, hyperbolicParaboloid, torus, mobiusStrip).
    #[arg(long, default_value = "ellipticParaboloid")]
    surface: String,

    /// Samples along x.
    #[arg(long, default_value_t = 64)]
    nx: u32,

    /// Samples along y.
    #[arg(long, default_value_t = 64)]
    ny: u32,

    /// Override the surface's natural wireframe topology.
    #[arg(long, value_enum)]
    mesh_type: Option<CliMeshType>,

    /// Rotation increment per frame, in radians.
    #[arg(long, default_value_t = 0.0125)]
    angle: f32,

    /// Number of frames to rotate.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Use the Taylor-polynomial cosine and sine for the increment.
    #[arg(long)]
    small_angle: bool,
}

fn main() {
    surface_wireframe::init_native_logging();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        log::error!("Demo failed: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> KernelResult<()> {
    let Some(surface) = Surface::from_name(&args.surface) else {
        let known: Vec<_> = Surface::CATALOGUE.iter().map(|(name, _)| *name).collect();
        log::error!("Unknown surface '{}', expected one of {:?}", args.surface, known);
        std::process::exit(2);
    };

    let mut parameters = surface.parameters(args.nx, args.ny);
    if let Some(mesh_type) = args.mesh_type {
        parameters.mesh_type = mesh_type.into();
    }

    let mut kernel = Kernel::new(&KernelConfig {
        trig_mode: if args.small_angle {
            TrigMode::SmallAngle
        } else {
            TrigMode::Exact
        },
        initial_angle: args.angle,
    });

    let started = Instant::now();
    let canvas = kernel.make_wireframe(parameters, &surface)?;
    log::info!(
        "Built {} on {:?}: {} vertices, {} segments in {:?}",
        args.surface,
        canvas.mesh_type(),
        canvas.number_of_points(),
        canvas.index_size() / 2,
        started.elapsed()
    );

    let started = Instant::now();
    for _ in 0..args.frames {
        kernel.rotate()?;
    }
    let elapsed = started.elapsed();

    let vertices = kernel.buffers().vertices();
    let first = &vertices[..3];
    log::info!(
        "Rotated {} frames in {:?} ({:?} per frame), first vertex now ({:.4}, {:.4}, {:.4})",
        args.frames,
        elapsed,
        elapsed / args.frames.max(1),
        first[0],
        first[1],
        first[2]
    );
    log::info!(
        "Host views: mesh {:?}, indices {:?}",
        kernel.mesh_view(),
        kernel.index_view()
    );
    Ok(())
}
