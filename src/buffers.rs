//! Fixed-capacity vertex and index storage shared with the host.
//!
//! Both buffers are allocated once at their maximum size and never resized,
//! so their addresses stay put for the lifetime of a [`MeshBuffers`]. What the
//! host cannot rely on is its own view of them: growing WebAssembly memory
//! detaches every typed array built over the old `ArrayBuffer`, and the view
//! then reads as zero-length. Hosts re-query a [`BufferView`] whenever their
//! view is empty or the generation counter moved, instead of caching one.

use crate::error::{KernelError, KernelResult};
use crate::mesh::{MAX_INDEX_BUFFER_SIZE, MAX_MESH_BUFFER_SIZE};

/// Address, live length and generation of one buffer at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferView {
    /// Address of the first element.
    pub address: usize,
    /// Number of live elements (not bytes).
    pub len: usize,
    /// Buffer generation the view was taken at.
    pub generation: u64,
}

/// Vertex and index buffers at fixed maximum capacity.
pub struct MeshBuffers {
    vertices: Box<[f32]>,
    indices: Box<[u32]>,
    vertex_len: usize,
    index_len: usize,
    generation: u64,
}

impl Default for MeshBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBuffers {
    /// Allocate both buffers, zero-filled, with nothing live.
    pub fn new() -> Self {
        Self {
            vertices: vec![0.0; MAX_MESH_BUFFER_SIZE].into_boxed_slice(),
            indices: vec![0; MAX_INDEX_BUFFER_SIZE].into_boxed_slice(),
            vertex_len: 0,
            index_len: 0,
            generation: 0,
        }
    }

    /// Address of the first vertex float, queried fresh.
    pub fn vertex_address(&self) -> usize {
        self.vertices.as_ptr() as usize
    }

    /// Address of the first index, queried fresh.
    pub fn index_address(&self) -> usize {
        self.indices.as_ptr() as usize
    }

    pub fn vertex_view(&self) -> BufferView {
        BufferView {
            address: self.vertex_address(),
            len: self.vertex_len,
            generation: self.generation,
        }
    }

    pub fn index_view(&self) -> BufferView {
        BufferView {
            address: self.index_address(),
            len: self.index_len,
            generation: self.generation,
        }
    }

    /// Counter bumped every time the live prefixes are reconfigured.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a previously taken view still describes one of the buffers.
    pub fn is_current(&self, view: &BufferView) -> bool {
        view.generation == self.generation
            && (*view == self.vertex_view() || *view == self.index_view())
    }

    /// Live vertex floats.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices[..self.vertex_len]
    }

    /// Live indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices[..self.index_len]
    }

    /// Live vertex data as bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }

    /// Live index data as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices())
    }

    pub fn vertex_capacity(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_capacity(&self) -> usize {
        self.indices.len()
    }

    /// Element offset of `address` inside the vertex buffer.
    pub fn vertex_offset(&self, address: usize) -> KernelResult<usize> {
        element_offset::<f32>(self.vertex_address(), self.vertices.len(), address)
    }

    /// Element offset of `address` inside the index buffer.
    pub fn index_offset(&self, address: usize) -> KernelResult<usize> {
        element_offset::<u32>(self.index_address(), self.indices.len(), address)
    }

    /// Whole vertex storage, live or not.
    pub(crate) fn vertex_storage_mut(&mut self) -> &mut [f32] {
        &mut self.vertices
    }

    /// Whole index storage, live or not.
    pub(crate) fn index_storage_mut(&mut self) -> &mut [u32] {
        &mut self.indices
    }

    pub(crate) fn set_live_lengths(&mut self, vertex_len: usize, index_len: usize) {
        self.vertex_len = vertex_len.min(self.vertices.len());
        self.index_len = index_len.min(self.indices.len());
        self.generation += 1;
    }

    pub(crate) fn set_vertex_len(&mut self, vertex_len: usize) {
        self.set_live_lengths(vertex_len, self.index_len);
    }

    pub(crate) fn set_index_len(&mut self, index_len: usize) {
        self.set_live_lengths(self.vertex_len, index_len);
    }
}

impl std::fmt::Debug for MeshBuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshBuffers")
            .field("vertex_address", &format_args!("{:#x}", self.vertex_address()))
            .field("index_address", &format_args!("{:#x}", self.index_address()))
            .field("vertex_len", &self.vertex_len)
            .field("index_len", &self.index_len)
            .field("generation", &self.generation)
            .finish()
    }
}

fn element_offset<T>(base: usize, capacity: usize, address: usize) -> KernelResult<usize> {
    let element_size = std::mem::size_of::<T>();
    let byte_offset = address
        .checked_sub(base)
        .ok_or(KernelError::UnknownAddress(address))?;

    if byte_offset % element_size != 0 || byte_offset / element_size >= capacity {
        return Err(KernelError::UnknownAddress(address));
    }
    Ok(byte_offset / element_size)
}
