//! Kernel error type
//!
//! Every check happens before the first write, so an `Err` always means the
//! target buffer was left untouched.

use thiserror::Error;

/// Errors reported by the mesh, index and rotation kernels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Grid resolution outside `2..=MAX_WIDTH` by `2..=MAX_HEIGHT`.
    #[error("invalid grid dimensions: {nx_pts}x{ny_pts}")]
    InvalidDimensions { nx_pts: u32, ny_pts: u32 },
    /// The caller-provided buffer cannot hold the requested output.
    #[error("buffer too small: {required} elements required, {actual} available")]
    BufferTooSmall { required: usize, actual: usize },
    /// Numeric mesh type tag that names no known wireframe topology.
    #[error("invalid mesh type tag: {0}")]
    InvalidMeshType(u32),
    /// Address handed over by the host does not point into a kernel buffer.
    #[error("address {0:#x} does not belong to a kernel buffer")]
    UnknownAddress(usize),
    /// An operation on the main canvas was requested before one was configured.
    #[error("no canvas configured")]
    NoCanvas,
}

pub type KernelResult<T> = Result<T, KernelError>;

/// Fails with [`KernelError::BufferTooSmall`] when `actual < required`.
pub(crate) fn ensure_len(actual: usize, required: usize) -> KernelResult<()> {
    if actual < required {
        return Err(KernelError::BufferTooSmall { required, actual });
    }
    Ok(())
}
