// src/wgpu_utils/uniform_buffer.rs
use std::marker::PhantomData;

fn type_label<T>() -> &'static str {
    let type_name = std::any::type_name::<T>();
    match type_name.rfind(':') {
        Some(pos) => &type_name[(pos + 1)..],
        None => type_name,
    }
}

/// Typed uniform buffer holding a single `Content` value
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    previous_content: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    /// Create a new uniform buffer
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", type_label::<Content>())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: Vec::new(),
        }
    }

    /// Update buffer content (skips the write when nothing changed)
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.previous_content == new_content {
            return;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.previous_content = new_content.to_vec();
    }

    /// Get binding resource
    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}

/// Vertex buffer rewritten every frame, growing when the data outgrows it.
///
/// Capacity only ever increases so a steady scene stops reallocating after
/// the first few frames.
pub struct VertexStream<Vertex> {
    label: String,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    len: usize,
    content_type: PhantomData<Vertex>,
}

impl<Vertex: bytemuck::Pod> VertexStream<Vertex> {
    pub fn new(label: &str) -> Self {
        Self {
            label: format!("{label} ({})", type_label::<Vertex>()),
            buffer: None,
            capacity: 0,
            len: 0,
            content_type: PhantomData,
        }
    }

    /// Uploads `data`, reallocating with doubled capacity if needed
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[Vertex]) {
        self.len = data.len();
        if data.is_empty() {
            return;
        }

        if data.len() > self.capacity || self.buffer.is_none() {
            self.capacity = grown_capacity(self.capacity, data.len());
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: (self.capacity * std::mem::size_of::<Vertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }

        if let Some(buffer) = &self.buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(data));
        }
    }

    /// Slice covering the vertices of the last upload
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        if self.len == 0 {
            return None;
        }
        let bytes = (self.len * std::mem::size_of::<Vertex>()) as u64;
        self.buffer.as_ref().map(|buffer| buffer.slice(..bytes))
    }

    /// Number of vertices from the last upload
    pub fn len(&self) -> u32 {
        self.len as u32
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Next power of two that fits `required`, never below 1024 vertices
fn grown_capacity(current: usize, required: usize) -> usize {
    required.max(current).max(1024).next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(0, 1), 1024);
        assert_eq!(grown_capacity(1024, 1025), 2048);
        assert_eq!(grown_capacity(4096, 5000), 8192);
    }

    #[test]
    fn test_type_label() {
        assert_eq!(type_label::<VertexStream<f32>>(), "VertexStream<f32>");
        assert_eq!(type_label::<u32>(), "u32");
    }
}
