//! Procedural voxel construction - "data as art".
//!
//! Parts and cosmetics are defined with loops and boxes, never loaded from
//! disk. Coordinates are signed so parts can extend either side of their
//! pivot.

/// One unit cube in a part's local grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelUnit {
    /// Local X position.
    pub x: i32,
    /// Local Y position.
    pub y: i32,
    /// Local Z position.
    pub z: i32,
    /// Palette key or literal hex color.
    pub color_key: &'static str,
    /// Optional non-uniform Y scale for squashed/stretched cubes.
    pub vertical_scale: Option<f32>,
}

impl VoxelUnit {
    /// Creates a plain voxel.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32, color_key: &'static str) -> Self {
        Self { x, y, z, color_key, vertical_scale: None }
    }

    /// Creates a voxel with a vertical scale.
    #[inline]
    #[must_use]
    pub const fn scaled(x: i32, y: i32, z: i32, color_key: &'static str, vertical_scale: f32) -> Self {
        Self { x, y, z, color_key, vertical_scale: Some(vertical_scale) }
    }
}

/// Axis-aligned bounds of a voxel list (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoxelBounds {
    /// Minimum corner.
    pub min: [i32; 3],
    /// Maximum corner.
    pub max: [i32; 3],
}

impl VoxelBounds {
    /// Bounds of `voxels`, or `None` for an empty list.
    #[must_use]
    pub fn of(voxels: &[VoxelUnit]) -> Option<Self> {
        let first = voxels.first()?;
        let mut bounds = Self {
            min: [first.x, first.y, first.z],
            max: [first.x, first.y, first.z],
        };
        for v in &voxels[1..] {
            let p = [v.x, v.y, v.z];
            for axis in 0..3 {
                bounds.min[axis] = bounds.min[axis].min(p[axis]);
                bounds.max[axis] = bounds.max[axis].max(p[axis]);
            }
        }
        Some(bounds)
    }

    /// Center point in voxel units.
    #[must_use]
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) as f32 / 2.0,
            (self.min[1] + self.max[1]) as f32 / 2.0,
            (self.min[2] + self.max[2]) as f32 / 2.0,
        ]
    }
}

/// Builder for constructing voxel lists programmatically.
#[derive(Debug, Default)]
pub struct VoxelBuilder {
    voxels: Vec<VoxelUnit>,
}

impl VoxelBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single voxel.
    pub fn add(&mut self, x: i32, y: i32, z: i32, key: &'static str) -> &mut Self {
        self.voxels.push(VoxelUnit::new(x, y, z, key));
        self
    }

    /// Adds a single vertically scaled voxel.
    pub fn add_scaled(&mut self, x: i32, y: i32, z: i32, key: &'static str, vertical_scale: f32) -> &mut Self {
        self.voxels.push(VoxelUnit::scaled(x, y, z, key, vertical_scale));
        self
    }

    /// Fills a box (corners inclusive, in any order).
    pub fn fill_box(&mut self, a: [i32; 3], b: [i32; 3], key: &'static str) -> &mut Self {
        let (min_x, max_x) = (a[0].min(b[0]), a[0].max(b[0]));
        let (min_y, max_y) = (a[1].min(b[1]), a[1].max(b[1]));
        let (min_z, max_z) = (a[2].min(b[2]), a[2].max(b[2]));

        for z in min_z..=max_z {
            for y in min_y..=max_y {
                for x in min_x..=max_x {
                    self.voxels.push(VoxelUnit::new(x, y, z, key));
                }
            }
        }
        self
    }

    /// Fills a sphere.
    pub fn fill_sphere(&mut self, center: [i32; 3], radius: i32, key: &'static str) -> &mut Self {
        let r_sq = radius * radius;
        for dz in -radius..=radius {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dy * dy + dz * dz <= r_sq {
                        self.voxels.push(VoxelUnit::new(
                            center[0] + dx,
                            center[1] + dy,
                            center[2] + dz,
                            key,
                        ));
                    }
                }
            }
        }
        self
    }

    /// Fills a disc-stacked cylinder along Y.
    pub fn fill_cylinder_y(&mut self, cx: i32, cz: i32, y1: i32, y2: i32, radius: i32, key: &'static str) -> &mut Self {
        let r_sq = radius * radius;
        for y in y1.min(y2)..=y1.max(y2) {
            for dz in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dz * dz <= r_sq {
                        self.voxels.push(VoxelUnit::new(cx + dx, y, cz + dz, key));
                    }
                }
            }
        }
        self
    }

    /// Recolors every voxel already in the box `a..=b`.
    pub fn paint_box(&mut self, a: [i32; 3], b: [i32; 3], key: &'static str) -> &mut Self {
        let lo = [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])];
        let hi = [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])];
        for v in &mut self.voxels {
            if (lo[0]..=hi[0]).contains(&v.x) && (lo[1]..=hi[1]).contains(&v.y) && (lo[2]..=hi[2]).contains(&v.z) {
                v.color_key = key;
            }
        }
        self
    }

    /// Number of voxels so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// True when nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Finishes the list, dropping duplicates at the same cell (last write wins).
    #[must_use]
    pub fn build(self) -> Vec<VoxelUnit> {
        let mut out: Vec<VoxelUnit> = Vec::with_capacity(self.voxels.len());
        let mut index = std::collections::HashMap::with_capacity(self.voxels.len());
        for v in self.voxels {
            match index.get(&(v.x, v.y, v.z)) {
                Some(&slot) => out[slot] = v,
                None => {
                    index.insert((v.x, v.y, v.z), out.len());
                    out.push(v);
                }
            }
        }
        out
    }
}
