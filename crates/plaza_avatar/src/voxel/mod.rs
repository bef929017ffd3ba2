//! Voxel data for characters and cosmetics.
//!
//! Every part is generated in code as a sparse list of [`VoxelUnit`]s in its
//! own local grid, then colored through a [`Palette`].

mod builder;
mod palette;
mod shape;

pub use builder::{VoxelBounds, VoxelBuilder, VoxelUnit};
pub use palette::{Palette, FREESTYLE_DEFAULT_PRIMARY, FREESTYLE_DEFAULT_SECONDARY};
pub use shape::{build_shapes, shape_keys, Shape};
