//! Materials and the color-keyed material cache.
//!
//! Two kinds of material exist:
//!
//! - **Shared**: one per literal color, owned by a [`MaterialCache`] and
//!   reused by every character built against that cache. Keeps the GPU
//!   resource count proportional to the number of distinct colors.
//! - **Unique**: allocated per animated-skin bucket and owned by the
//!   character, because its color changes every frame.
//!
//! The cache is an explicit object owned by one session and injected into
//! the assembler. Tests and headless builds create their own.

use std::collections::HashMap;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use parking_lot::RwLock;

use crate::color::Rgb;

/// Index of a shared material inside a [`MaterialCache`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

/// Index of a unique material inside a character's skin track.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueMaterialId(pub u32);

/// Which material a batch draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialRef {
    /// Shared, color-keyed material.
    Shared(MaterialId),
    /// Per-character animated material.
    Unique(UniqueMaterialId),
}

/// Surface parameters uploaded per material.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Material {
    /// Base color (RGB) + opacity in alpha.
    pub color_opacity: [f32; 4],
    /// Emission color (RGB) + intensity in alpha.
    pub emissive_intensity: [f32; 4],
}

impl Material {
    /// Flat opaque material.
    #[must_use]
    pub fn solid(color: Rgb) -> Self {
        let [r, g, b] = color.to_linear_array();
        Self {
            color_opacity: [r, g, b, 1.0],
            emissive_intensity: [0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Self-lit material whose emission mirrors its color.
    #[must_use]
    pub fn glowing(color: Rgb, intensity: f32) -> Self {
        let [r, g, b] = color.to_linear_array();
        Self {
            color_opacity: [r, g, b, 1.0],
            emissive_intensity: [r, g, b, intensity],
        }
    }

    /// Base color quantized back to 8 bits.
    #[must_use]
    pub fn color(&self) -> Rgb {
        let [r, g, b, _] = self.color_opacity;
        Rgb::from_linear_array([r, g, b])
    }

    /// Sets base color and mirrors it into the emission.
    pub fn set_glow(&mut self, color: Rgb, intensity: f32) {
        let [r, g, b] = color.to_linear_array();
        self.color_opacity = [r, g, b, self.color_opacity[3]];
        self.emissive_intensity = [r, g, b, intensity];
    }

    /// Emission intensity.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.emissive_intensity[3]
    }
}

/// Append-only, color-keyed store of shared materials.
#[derive(Debug, Default)]
pub struct MaterialCache {
    materials: Vec<Material>,
    by_color: HashMap<Rgb, MaterialId>,
}

impl MaterialCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared material for `color`, creating it on first use.
    pub fn get_or_insert(&mut self, color: Rgb) -> MaterialId {
        if let Some(&id) = self.by_color.get(&color) {
            return id;
        }
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(Material::solid(color));
        self.by_color.insert(color, id);
        id
    }

    /// Looks up an existing material without inserting.
    #[must_use]
    pub fn lookup(&self, color: Rgb) -> Option<MaterialId> {
        self.by_color.get(&color).copied()
    }

    /// Material data by id.
    #[must_use]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    /// Number of distinct shared materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True when no material has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// All materials as bytes for GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.materials)
    }
}

/// A [`MaterialCache`] guarded for hosts that build on several threads.
#[derive(Debug, Clone, Default)]
pub struct SharedMaterialCache {
    inner: Arc<RwLock<MaterialCache>>,
}

impl SharedMaterialCache {
    /// Creates an empty shared cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access; use it around a whole build.
    pub fn with<R>(&self, f: impl FnOnce(&mut MaterialCache) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Number of shared materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_deduplicates_by_color() {
        let mut cache = MaterialCache::new();
        let a = cache.get_or_insert(Rgb::new(1, 2, 3));
        let b = cache.get_or_insert(Rgb::new(1, 2, 3));
        let c = cache.get_or_insert(Rgb::new(3, 2, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.lookup(Rgb::new(3, 2, 1)), Some(c));
        assert_eq!(cache.lookup(Rgb::new(9, 9, 9)), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_material_color_roundtrip() {
        let m = Material::solid(Rgb::new(0x1E, 0x90, 0xFF));
        assert_eq!(m.color(), Rgb::new(0x1E, 0x90, 0xFF));
        assert_eq!(m.intensity(), 0.0);
    }

    #[test]
    fn test_material_upload_size() {
        assert_eq!(std::mem::size_of::<Material>(), 32);
        let mut cache = MaterialCache::new();
        cache.get_or_insert(Rgb::WHITE);
        assert_eq!(cache.as_bytes().len(), 32);
    }

    #[test]
    fn test_shared_cache_across_threads() {
        let shared = SharedMaterialCache::new();
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.with(|cache| {
                        cache.get_or_insert(Rgb::new(i % 2, 0, 0));
                    });
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.len(), 2);
    }
}
