//! Declarative voxel shapes.
//!
//! Rig parts and catalog cosmetics are authored as `&'static [Shape]`
//! tables and expanded through [`VoxelBuilder`] at build time, so adding a
//! species or a hat is a data change.

use super::builder::{VoxelBuilder, VoxelUnit};

/// One primitive in a shape table. Applied in order; later shapes overwrite
/// earlier ones at the same cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Single voxel.
    Voxel([i32; 3], &'static str),
    /// Single voxel with a vertical scale.
    Squashed([i32; 3], &'static str, f32),
    /// Filled box, corners inclusive.
    Box([i32; 3], [i32; 3], &'static str),
    /// Filled sphere: center, radius.
    Sphere([i32; 3], i32, &'static str),
    /// Y-axis cylinder: `[x, z]` center, `[y1, y2]` span, radius.
    CylinderY([i32; 2], [i32; 2], i32, &'static str),
    /// Recolor existing voxels inside a box.
    Paint([i32; 3], [i32; 3], &'static str),
}

impl VoxelBuilder {
    /// Applies one shape.
    pub fn shape(&mut self, shape: &Shape) -> &mut Self {
        match *shape {
            Shape::Voxel([x, y, z], key) => self.add(x, y, z, key),
            Shape::Squashed([x, y, z], key, s) => self.add_scaled(x, y, z, key, s),
            Shape::Box(a, b, key) => self.fill_box(a, b, key),
            Shape::Sphere(c, r, key) => self.fill_sphere(c, r, key),
            Shape::CylinderY([x, z], [y1, y2], r, key) => self.fill_cylinder_y(x, z, y1, y2, r, key),
            Shape::Paint(a, b, key) => self.paint_box(a, b, key),
        }
    }
}

/// Expands a shape table into a voxel list.
#[must_use]
pub fn build_shapes(shapes: &[Shape]) -> Vec<VoxelUnit> {
    let mut builder = VoxelBuilder::new();
    for shape in shapes {
        builder.shape(shape);
    }
    builder.build()
}

/// Every color key a shape table uses.
pub fn shape_keys(shapes: &[Shape]) -> impl Iterator<Item = &'static str> + '_ {
    shapes.iter().map(|s| match *s {
        Shape::Voxel(_, k)
        | Shape::Squashed(_, k, _)
        | Shape::Box(_, _, k)
        | Shape::Sphere(_, _, k)
        | Shape::CylinderY(_, _, _, k)
        | Shape::Paint(_, _, k) => k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[Shape] = &[
        Shape::Box([-1, 0, -1], [1, 2, 1], "main"),
        Shape::Paint([-1, 0, 1], [1, 2, 1], "belly"),
        Shape::Squashed([0, 3, 0], "#FFFFFF", 0.5),
    ];

    #[test]
    fn test_table_expansion() {
        let voxels = build_shapes(TABLE);
        assert_eq!(voxels.len(), 28);
        assert_eq!(voxels.iter().filter(|v| v.color_key == "belly").count(), 9);
        assert_eq!(voxels.last().and_then(|v| v.vertical_scale), Some(0.5));
    }

    #[test]
    fn test_shape_keys() {
        let keys: Vec<_> = shape_keys(TABLE).collect();
        assert_eq!(keys, vec!["main", "belly", "#FFFFFF"]);
    }
}
