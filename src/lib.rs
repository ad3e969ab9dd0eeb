//! Surface Wireframe - parametric wireframe kernel for browser galleries
//!
//! Generates vertex and line-list index buffers for surfaces sampled on a
//! rectangular grid and rotates them in place, frame by frame. The buffers
//! live in the kernel's own memory; a renderer on the other side of a
//! WebAssembly boundary reads them through zero-copy typed-array views.
//!
//! # Features
//! - Height-function (`z = f(x, y)`) and parametric surface sampling
//! - Square and triangle wireframes, open or glued into cylinders, Möbius
//!   strips, tori, Klein bottles and projective planes
//! - Incremental z-axis rotation with exact or small-angle trigonometry
//! - Stable buffer addresses with generation-tagged views for the host
//! - `wasm-bindgen` exports with the gallery's camelCase call surface

pub mod buffers;
pub mod canvas;
pub mod error;
pub mod host;
pub mod kernel;
pub mod mesh;
pub mod rotation;
pub mod surfaces;

// Web-specific modules
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use buffers::{BufferView, MeshBuffers};
pub use canvas::Canvas;
pub use error::{KernelError, KernelResult};
pub use kernel::Kernel;
pub use mesh::{CanvasParameters, GridDimensions, MeshType, MAX_HEIGHT, MAX_WIDTH};
pub use rotation::{Rotation, TrigMode};
pub use surfaces::Surface;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for creating a [`Kernel`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// How the rotation increment's cosine and sine are evaluated
    pub trig_mode: TrigMode,
    /// Rotation increment per frame, in radians
    pub initial_angle: f32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            trig_mode: TrigMode::Exact,
            initial_angle: 0.0,
        }
    }
}

// Native logging helper
#[cfg(not(target_arch = "wasm32"))]
pub fn init_native_logging() {
    // Tests and demos may call this more than once
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    log::info!("Surface Wireframe v{} initialized", VERSION);
}

// Web initialization helper
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging() {
    // Set up panic hook for better error messages in console
    console_error_panic_hook::set_once();
    // Set up console logging for web
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {err}").into());
    }
    log::info!("Surface Wireframe v{} initialized", VERSION);
}
