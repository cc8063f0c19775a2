//! GPU buffer abstractions
//!
//! Provides a growable vertex buffer for per-frame geometry and a raw
//! uniform buffer.

use crate::context::WgpuContext;
use bytemuck::Pod;

/// A vertex buffer that is rewritten every frame and grows on demand.
pub struct DynamicVertexBuffer {
    buffer: wgpu::Buffer,
    capacity: u64,
    count: u32,
    label: Option<String>,
}

impl DynamicVertexBuffer {
    /// Smallest allocation, in bytes.
    const MIN_CAPACITY: u64 = 4096;

    /// Create an empty buffer with room for at least `capacity` bytes.
    pub fn new(ctx: &WgpuContext, capacity: u64, label: Option<&str>) -> Self {
        let capacity = Self::aligned_capacity(capacity);
        Self {
            buffer: Self::allocate(ctx, capacity, label),
            capacity,
            count: 0,
            label: label.map(str::to_owned),
        }
    }

    /// Replace the contents with `vertices`, reallocating if they don't fit.
    pub fn write<V: Pod>(&mut self, ctx: &WgpuContext, vertices: &[V]) {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let needed = bytes.len() as u64;
        if needed > self.capacity {
            self.capacity = Self::aligned_capacity(needed.next_power_of_two());
            self.buffer = Self::allocate(ctx, self.capacity, self.label.as_deref());
            tracing::debug!(
                "grew vertex buffer {:?} to {} bytes",
                self.label,
                self.capacity
            );
        }
        if !bytes.is_empty() {
            ctx.queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.count = vertices.len() as u32;
    }

    /// Get the raw wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of vertices written by the last [`write`](Self::write).
    pub fn count(&self) -> u32 {
        self.count
    }

    fn aligned_capacity(bytes: u64) -> u64 {
        bytes
            .max(Self::MIN_CAPACITY)
            .next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT)
    }

    fn allocate(ctx: &WgpuContext, size: u64, label: Option<&str>) -> wgpu::Buffer {
        ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label,
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }
}

/// Raw uniform buffer without type information.
pub struct RawUniformBuffer {
    buffer: wgpu::Buffer,
}

impl RawUniformBuffer {
    /// Create a new raw uniform buffer with specified size.
    pub fn new(ctx: &WgpuContext, size: u64, label: Option<&str>) -> Self {
        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label,
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self { buffer }
    }

    /// Write data to the buffer.
    pub fn write<T: Pod>(&self, ctx: &WgpuContext, data: &T) {
        ctx.queue
            .write_buffer(&self.buffer, 0, bytemuck::bytes_of(data));
    }

    /// Get the raw wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}
