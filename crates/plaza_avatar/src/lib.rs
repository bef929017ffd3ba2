//! # PLAZA Avatar Engine
//!
//! Procedural voxel characters for the PLAZA social world:
//! - A dozen-plus species rigs built from one data-driven code path
//! - Hats, eyes, mouths, body items and mounts from static catalogs
//! - Geometry batched by color, one instanced draw per color per part
//! - Animated skins and particle effects driven from a flat cache
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       BUILD (once)                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Descriptor → Species Rig → Part Compositor → Scene Graph    │
//! │                    ↓                ↑                        │
//! │          Cosmetic / Mount Attachment (effects, decals)       │
//! ├──────────────────────────────────────────────────────────────┤
//! │                      FRAME (every tick)                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  AnimationCache → animate(time, delta) → updated nodes       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - Builds never fail; unknown ids and bad colors degrade to defaults
//! - Same descriptor + same config = same character
//! - Per-frame animation never walks the scene tree
//! - Output is upload-ready data, no GPU handles
//!
//! ## Example
//!
//! ```
//! use plaza_avatar::{animate, AnimationCache, Assembler, CharacterDescriptor, MaterialCache};
//!
//! let assembler = Assembler::default();
//! let mut materials = MaterialCache::new();
//! let descriptor = CharacterDescriptor {
//!     hat: "propeller".to_string(),
//!     ..CharacterDescriptor::default()
//! };
//!
//! let mut character = assembler.build(&descriptor, &mut materials);
//! let mut cache = AnimationCache::build(&character);
//! animate(&mut cache, &mut character, 0.016, 0.016);
//! assert!(character.part("head").is_some());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod assemble;
pub mod attach;
pub mod catalog;
pub mod color;
pub mod compositor;
pub mod config;
pub mod decal;
pub mod effects;
pub mod error;
pub mod material;
pub mod math;
pub mod rig;
pub mod scene;
pub mod skin;
pub mod voxel;

pub use animation::{animate, AnimationCache};
pub use assemble::{AssembledCharacter, Assembler, CharacterDescriptor, DrawStats};
pub use catalog::{Catalog, Category, CosmeticEntry, MountEntry};
pub use color::{Rgb, NEUTRAL_GRAY};
pub use compositor::{build_part, CompositorSettings};
pub use config::EngineConfig;
pub use decal::{load_decal_font, rasterize, TextDecal};
pub use effects::{EffectField, EffectHandle, EffectKind, EffectSpec, Motion, ParticleInstance};
pub use error::{AvatarError, AvatarResult};
pub use material::{Material, MaterialCache, MaterialId, MaterialRef, SharedMaterialCache, UniqueMaterialId};
pub use math::{Axis, Transform, Vec3};
pub use rig::{RigDescriptor, Species};
pub use scene::{ColorBatch, InstanceData, NodeId, NodeKind, NodeSummary, PartGroup, SceneGraph};
pub use skin::{emissive_intensity_at, skin_color_at, AnimatedSkinConfig, SkinRegistry, SkinTrack};
pub use voxel::{Palette, VoxelBuilder, VoxelUnit};
