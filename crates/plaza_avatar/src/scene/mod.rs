//! Arena scene graph.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. The
//! assembler only ever appends; nothing is removed. Effects and animated
//! parts are found through handles recorded at build time, so per-frame code
//! indexes straight into the arena instead of walking it.

mod instance_data;

pub use instance_data::{as_bytes, InstanceData};

use crate::color::Rgb;
use crate::decal::TextDecal;
use crate::effects::{EffectField, EffectKind, Motion};
use crate::material::MaterialRef;
use crate::math::{Transform, Vec3};

/// Index of a node in a [`SceneGraph`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One instanced draw: every voxel of one resolved color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBatch {
    /// Resolved literal color.
    pub color: Rgb,
    /// Material the batch draws with.
    pub material: MaterialRef,
    /// One entry per voxel.
    pub instances: Vec<InstanceData>,
}

impl ColorBatch {
    /// Instance buffer bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        as_bytes(&self.instances)
    }
}

/// A named, color-batched voxel part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartGroup {
    /// Stable lookup key (`head`, `flipper_l`, ...).
    pub name: String,
    /// Local origin in voxel units.
    pub pivot: Vec3,
    /// Batches in first-appearance color order.
    pub batches: Vec<ColorBatch>,
}

impl PartGroup {
    /// Total voxels across batches.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(|b| b.instances.len()).sum()
    }

    /// Batch colors in order.
    #[must_use]
    pub fn colors(&self) -> Vec<Rgb> {
        self.batches.iter().map(|b| b.color).collect()
    }
}

/// A point light attached to a glowing cosmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light color.
    pub color: Rgb,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Falloff distance in world units.
    pub range: f32,
}

/// What a node carries.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pure transform node.
    Group,
    /// Voxel geometry.
    Part(PartGroup),
    /// Flat textured quad.
    Decal(TextDecal),
    /// Particle field.
    Effect(EffectField),
    /// Point light.
    Light(PointLight),
}

/// One node of the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Node name; part names are the lookup key.
    pub name: String,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Parent node, `None` for roots.
    pub parent: Option<NodeId>,
    /// Children in insertion order.
    pub children: Vec<NodeId>,
    /// Payload.
    pub kind: NodeKind,
    /// Rigid spin/flap applied by the animator.
    pub motion: Option<Motion>,
}

/// Comparable structural snapshot of a sub-tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSummary {
    /// Node name.
    pub name: String,
    /// Local transform.
    pub transform: Transform,
    /// Payload digest.
    pub kind: SummaryKind,
    /// Children in order.
    pub children: Vec<NodeSummary>,
}

/// Payload digest used by [`NodeSummary`].
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryKind {
    /// Transform only.
    Group,
    /// Part with pivot and `(color, instance count)` per batch.
    Part {
        /// Pivot in voxel units.
        pivot: Vec3,
        /// Batch digest.
        batches: Vec<(Rgb, usize)>,
    },
    /// Decal text and texture size.
    Decal {
        /// Rendered text.
        text: String,
        /// Texture width and height.
        size: (u32, u32),
    },
    /// Effect kind and particle count.
    Effect {
        /// Field kind.
        kind: EffectKind,
        /// Particle count.
        particles: usize,
    },
    /// Light color.
    Light(Rgb),
}

/// Arena of scene nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node under `parent` and returns its id.
    pub fn add(&mut self, parent: Option<NodeId>, name: &str, transform: Transform, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            name: name.to_string(),
            transform,
            parent,
            children: Vec::new(),
            kind,
            motion: None,
        });
        if let Some(parent) = parent {
            if let Some(node) = self.nodes.get_mut(parent.index()) {
                node.children.push(id);
            }
        }
        id
    }

    /// Appends an empty transform node.
    pub fn add_group(&mut self, parent: Option<NodeId>, name: &str, transform: Transform) -> NodeId {
        self.add(parent, name, transform, NodeKind::Group)
    }

    /// Sets the rigid motion of a node.
    pub fn set_motion(&mut self, id: NodeId, motion: Motion) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.motion = Some(motion);
        }
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Mutable node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node id in `root`'s sub-tree, depth first, `root` included.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            out.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// First node named `name` under `root`, depth first.
    #[must_use]
    pub fn find_named(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.node(id).is_some_and(|n| n.name == name))
    }

    /// Part groups under `root`, depth first.
    pub fn parts_under(&self, root: NodeId) -> impl Iterator<Item = (NodeId, &PartGroup)> + '_ {
        self.descendants(root).into_iter().filter_map(move |id| match &self.node(id)?.kind {
            NodeKind::Part(part) => Some((id, part)),
            _ => None,
        })
    }

    /// Structural snapshot of `root`'s sub-tree.
    #[must_use]
    pub fn summarize(&self, root: NodeId) -> Option<NodeSummary> {
        let node = self.node(root)?;
        let kind = match &node.kind {
            NodeKind::Group => SummaryKind::Group,
            NodeKind::Part(part) => SummaryKind::Part {
                pivot: part.pivot,
                batches: part.batches.iter().map(|b| (b.color, b.instances.len())).collect(),
            },
            NodeKind::Decal(decal) => SummaryKind::Decal {
                text: decal.text.clone(),
                size: (decal.width, decal.height),
            },
            NodeKind::Effect(field) => SummaryKind::Effect {
                kind: field.kind(),
                particles: field.len(),
            },
            NodeKind::Light(light) => SummaryKind::Light(light.color),
        };
        Some(NodeSummary {
            name: node.name.clone(),
            transform: node.transform,
            kind,
            children: node.children.iter().filter_map(|&c| self.summarize(c)).collect(),
        })
    }
}
