//! Instance data structures for GPU upload.

use bytemuck::{Pod, Zeroable};

/// Per-voxel instance data consumed by the cube vertex shader.
///
/// One color batch is one instanced draw; every voxel of that batch becomes
/// one of these. Memory layout is 16-byte aligned rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// Local position (x, y, z) relative to the part pivot + cube edge in w.
    pub position_size: [f32; 4],
    /// Per-axis cube scale (x, y, z); w unused.
    pub scale: [f32; 4],
}

impl InstanceData {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates an instance for one voxel.
    #[inline]
    #[must_use]
    pub const fn new(position: [f32; 3], size: f32, vertical_scale: f32) -> Self {
        Self {
            position_size: [position[0], position[1], position[2], size],
            scale: [1.0, vertical_scale, 1.0, 0.0],
        }
    }

    /// Position relative to the part pivot.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> [f32; 3] {
        [self.position_size[0], self.position_size[1], self.position_size[2]]
    }

    /// Y scale of the cube.
    #[inline]
    #[must_use]
    pub const fn vertical_scale(&self) -> f32 {
        self.scale[1]
    }
}

/// Views an instance slice as raw bytes for buffer upload.
#[must_use]
pub fn as_bytes(instances: &[InstanceData]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
