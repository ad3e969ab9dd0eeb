//! Browser bindings for the shared kernel.
//!
//! Thin `wasm-bindgen` wrappers with the gallery's camelCase names. Failures
//! reach the page as `JsError`s carrying the [`KernelError`] message.
//!
//! Typed-array views returned here alias WebAssembly memory. Growing the
//! memory detaches them (their `length` drops to zero), so pages check the
//! view every frame and ask for a new one when it is empty or when
//! `bufferGeneration()` changed.

use js_sys::{Float32Array, Reflect, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::error::KernelError;
use crate::host::{grid_size_from_host, install, mesh_type_from_host, with_kernel};
use crate::mesh::{CanvasParameters, MeshType};
use crate::surfaces::Surface;
use crate::{KernelConfig, TrigMode};

fn to_js(err: KernelError) -> JsError {
    log::warn!("Rejected host call: {err}");
    JsError::new(&err.to_string())
}

fn read_number(object: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

fn require_number(object: &JsValue, key: &str) -> Result<f64, JsError> {
    read_number(object, key)
        .ok_or_else(|| JsError::new(&format!("missing numeric field `{key}`")))
}

/// Copy `{nxPts, nyPts, width, height, xStart, yStart, meshType}` into
/// [`CanvasParameters`]. `meshType` defaults to the square wireframe; counts
/// and tags must be exact non-negative integers.
fn canvas_parameters_from_js(object: &JsValue) -> Result<CanvasParameters, JsError> {
    let mesh_type = match read_number(object, "meshType") {
        Some(tag) => mesh_type_from_host(tag).map_err(to_js)?,
        None => MeshType::default(),
    };
    let (nx_pts, ny_pts) = grid_size_from_host(
        require_number(object, "nxPts")?,
        require_number(object, "nyPts")?,
    )
    .map_err(to_js)?;

    Ok(CanvasParameters {
        nx_pts,
        ny_pts,
        width: require_number(object, "width")? as f32,
        height: require_number(object, "height")? as f32,
        x_start: require_number(object, "xStart")? as f32,
        y_start: require_number(object, "yStart")? as f32,
        mesh_type,
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    crate::init_web_logging();
}

/// Recreate the shared kernel, optionally with small-angle trigonometry.
#[wasm_bindgen(js_name = resetKernel)]
pub fn reset_kernel(small_angle: bool) {
    let trig_mode = if small_angle {
        TrigMode::SmallAngle
    } else {
        TrigMode::Exact
    };
    install(&KernelConfig {
        trig_mode,
        ..KernelConfig::default()
    });
}

#[wasm_bindgen(js_name = generateMesh)]
pub fn generate_mesh(buffer_address: usize, nx_pts: u32, ny_pts: u32) -> Result<(), JsError> {
    with_kernel(|kernel| {
        kernel.generate_mesh_at(
            buffer_address,
            nx_pts,
            ny_pts,
            &Surface::ELLIPTIC_PARABOLOID,
        )
    })
    .map(|_| ())
    .map_err(to_js)
}

#[wasm_bindgen(js_name = generateIndices)]
pub fn generate_indices(buffer_address: usize, nx_pts: u32, ny_pts: u32) -> Result<(), JsError> {
    with_kernel(|kernel| kernel.generate_indices_at(buffer_address, nx_pts, ny_pts))
        .map(|_| ())
        .map_err(to_js)
}

#[wasm_bindgen(js_name = rotateMesh)]
pub fn rotate_mesh(buffer_address: usize, n_pts: u32) -> Result<(), JsError> {
    with_kernel(|kernel| kernel.rotate_at(buffer_address, n_pts as usize)).map_err(to_js)
}

#[wasm_bindgen(js_name = setRotationAngle)]
pub fn set_rotation_angle(angle: f32) {
    with_kernel(|kernel| kernel.set_rotation_angle(angle));
}

#[wasm_bindgen(js_name = getMeshBufferAddress)]
pub fn get_mesh_buffer_address() -> usize {
    with_kernel(|kernel| kernel.buffers().vertex_address())
}

#[wasm_bindgen(js_name = getIndexBufferAddress)]
pub fn get_index_buffer_address() -> usize {
    with_kernel(|kernel| kernel.buffers().index_address())
}

#[wasm_bindgen(js_name = meshBufferAddress)]
pub fn mesh_buffer_address() -> usize {
    get_mesh_buffer_address()
}

#[wasm_bindgen(js_name = indexBufferAddress)]
pub fn index_buffer_address() -> usize {
    get_index_buffer_address()
}

/// Configure the main canvas from a parameters object and build the
/// wireframe of the named surface (`ellipticParaboloid` when omitted).
#[wasm_bindgen(js_name = makeWireframe)]
pub fn make_wireframe(parameters: &JsValue, surface: Option<String>) -> Result<(), JsError> {
    let parameters = canvas_parameters_from_js(parameters)?;
    let surface = match surface.as_deref() {
        Some(name) => Surface::from_name(name)
            .ok_or_else(|| JsError::new(&format!("unknown surface `{name}`")))?,
        None => Surface::ELLIPTIC_PARABOLOID,
    };

    with_kernel(|kernel| kernel.make_wireframe(parameters, &surface))
        .map(|_| ())
        .map_err(to_js)
}

#[wasm_bindgen(js_name = rotateMainCanvas)]
pub fn rotate_main_canvas() -> Result<(), JsError> {
    with_kernel(|kernel| kernel.rotate()).map_err(to_js)
}

/// Zero-copy view over the live vertex floats.
#[wasm_bindgen(js_name = meshBufferView)]
pub fn mesh_buffer_view() -> Float32Array {
    // SAFETY: the vertex storage is owned by the shared kernel and never
    // reallocated; the view is only invalidated by memory growth, which the
    // page detects as a zero-length view.
    with_kernel(|kernel| unsafe { Float32Array::view(kernel.buffers().vertices()) })
}

/// Zero-copy view over the live indices.
#[wasm_bindgen(js_name = indexBufferView)]
pub fn index_buffer_view() -> Uint32Array {
    // SAFETY: see `mesh_buffer_view`.
    with_kernel(|kernel| unsafe { Uint32Array::view(kernel.buffers().indices()) })
}

#[wasm_bindgen(js_name = bufferGeneration)]
pub fn buffer_generation() -> f64 {
    with_kernel(|kernel| kernel.buffers().generation() as f64)
}

/// The module's linear memory, for pages building their own views from
/// `getMeshBufferAddress()`.
#[wasm_bindgen(js_name = wasmMemory)]
pub fn wasm_memory() -> JsValue {
    wasm_bindgen::memory()
}
