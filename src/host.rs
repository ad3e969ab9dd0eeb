//! Process-wide kernel instance for host bindings.
//!
//! A WebAssembly host calls free functions, so the bindings need one kernel
//! that outlives every call. It is created lazily with the default
//! [`KernelConfig`] and guarded by a mutex held for the duration of a single
//! call. The kernel's buffers never move once allocated, so addresses handed
//! out here stay valid across calls.

use parking_lot::Mutex;

use crate::error::{KernelError, KernelResult};
use crate::kernel::Kernel;
use crate::mesh::MeshType;
use crate::KernelConfig;

static KERNEL: Mutex<Option<Kernel>> = parking_lot::const_mutex(None);

/// Run `f` against the shared kernel, creating it on first use.
pub fn with_kernel<R>(f: impl FnOnce(&mut Kernel) -> R) -> R {
    let mut guard = KERNEL.lock();
    let kernel = guard.get_or_insert_with(|| {
        log::debug!("Creating shared kernel with default configuration");
        Kernel::new(&KernelConfig::default())
    });
    f(kernel)
}

/// Replace the shared kernel with a fresh one built from `config`.
///
/// Addresses obtained before the call no longer point into kernel buffers.
pub fn install(config: &KernelConfig) {
    let mut guard = KERNEL.lock();
    *guard = Some(Kernel::new(config));
    log::info!("Shared kernel installed: {:?}", config);
}

/// Exact conversion of a host number to a count or tag.
///
/// `None` for negative, fractional, non-finite or out-of-range values.
pub fn integer_from_host(value: f64) -> Option<u32> {
    let exact = value.is_finite() && value.fract() == 0.0;
    (exact && (0.0..=u32::MAX as f64).contains(&value)).then_some(value as u32)
}

/// Grid resolution from host numbers; anything but exact non-negative
/// integers is [`KernelError::InvalidDimensions`].
pub fn grid_size_from_host(nx_pts: f64, ny_pts: f64) -> KernelResult<(u32, u32)> {
    match (integer_from_host(nx_pts), integer_from_host(ny_pts)) {
        (Some(nx), Some(ny)) => Ok((nx, ny)),
        // Saturating casts only shape the error report.
        _ => Err(KernelError::InvalidDimensions {
            nx_pts: nx_pts as u32,
            ny_pts: ny_pts as u32,
        }),
    }
}

/// Mesh type from a host tag. Tags that are not exact integers report as
/// `u32::MAX`, which names no mesh type.
pub fn mesh_type_from_host(tag: f64) -> KernelResult<MeshType> {
    MeshType::try_from(integer_from_host(tag).unwrap_or(u32::MAX))
}
