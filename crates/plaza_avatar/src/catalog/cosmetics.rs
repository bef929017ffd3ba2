//! Hat, eyes, mouth and body item tables.
//!
//! Anchors (voxel origin of each entry):
//! - hats: top center of the head, geometry at `y >= 0`;
//! - eyes and mouth: front center of the face, geometry at `z >= 0`;
//! - body items: bottom center of the body;
//! - held items: the held limb's tip, blade/neck along `+y`.

use std::f32::consts::PI;

use super::{CosmeticEntry, EffectAttachment, LightSpec, SubPart};
use crate::decal::TextDecalSpec;
use crate::effects::{EffectSpec, Motion};
use crate::math::Axis;
use crate::voxel::Shape;

// =============================================================================
// HATS
// =============================================================================

const PROPELLER_CAP: &[Shape] = &[
    Shape::Box([-3, 0, -3], [3, 1, 3], "cap_a"),
    Shape::Paint([-3, 0, -3], [-1, 1, 3], "cap_b"),
    Shape::Paint([1, 0, -3], [3, 1, 3], "cap_b"),
    Shape::Box([-2, 0, 3], [2, 0, 5], "cap_a"),
    Shape::Box([0, 2, 0], [0, 3, 0], "#9E9E9E"),
];

const PROPELLER_BLADES: &[Shape] = &[
    Shape::Box([-4, 0, 0], [4, 0, 0], "#E53935"),
    Shape::Box([0, 0, -4], [0, 0, 4], "#1E88E5"),
    Shape::Voxel([0, 0, 0], "#FDD835"),
];

const WIZARD_HAT: &[Shape] = &[
    Shape::Box([-4, 0, -4], [4, 0, 4], "robe"),
    Shape::Box([-3, 1, -3], [3, 2, 3], "robe"),
    Shape::Box([-2, 3, -2], [2, 4, 2], "robe"),
    Shape::Box([-1, 5, -1], [1, 6, 1], "robe"),
    Shape::Box([0, 7, 0], [1, 8, 0], "robe"),
    Shape::Paint([-3, 1, -3], [3, 1, 3], "band"),
    Shape::Voxel([0, 3, 3], "star"),
];

const FIRE_CROWN: &[Shape] = &[
    Shape::Box([-3, 0, -3], [3, 1, 3], "#FF8C00"),
    Shape::Box([-2, 0, -2], [2, 1, 2], "#FF8C00"),
    Shape::Box([-3, 2, -3], [-3, 3, -3], "#FF4500"),
    Shape::Box([3, 2, -3], [3, 3, -3], "#FF4500"),
    Shape::Box([-3, 2, 3], [-3, 3, 3], "#FF4500"),
    Shape::Box([3, 2, 3], [3, 3, 3], "#FF4500"),
    Shape::Box([0, 2, 3], [0, 4, 3], "#FFD700"),
];

const HALO: &[Shape] = &[
    Shape::Box([-3, 3, -3], [3, 3, -3], "#FFF59D"),
    Shape::Box([-3, 3, 3], [3, 3, 3], "#FFF59D"),
    Shape::Box([-3, 3, -2], [-3, 3, 2], "#FFF59D"),
    Shape::Box([3, 3, -2], [3, 3, 2], "#FFF59D"),
];

const TOP_HAT: &[Shape] = &[
    Shape::Box([-4, 0, -4], [4, 0, 4], "#212121"),
    Shape::Box([-2, 1, -2], [2, 6, 2], "#212121"),
    Shape::Paint([-2, 1, -2], [2, 1, 2], "#B71C1C"),
];

const CROWN: &[Shape] = &[
    Shape::Box([-3, 0, -3], [3, 1, 3], "#FFC107"),
    Shape::Box([-2, 0, -2], [2, 1, 2], "#FFC107"),
    Shape::Voxel([-3, 2, 3], "#FFC107"),
    Shape::Voxel([0, 2, 3], "#FFC107"),
    Shape::Voxel([3, 2, 3], "#FFC107"),
    Shape::Voxel([0, 1, 3], "#E91E63"),
];

/// Baked onto the frog; also selectable on its own.
pub(crate) const LILYPAD_HAT: &[Shape] = &[
    Shape::CylinderY([0, 0], [0, 0], 4, "#2E7D32"),
    Shape::Paint([0, 0, 2], [4, 0, 4], "#66BB6A"),
    Shape::Box([0, 0, 1], [1, 0, 4], "#1B5E20"),
    Shape::Box([0, 1, 0], [0, 2, 0], "#F48FB1"),
    Shape::Voxel([-1, 1, 0], "#F8BBD0"),
    Shape::Voxel([1, 1, 0], "#F8BBD0"),
];

pub(crate) const HATS: &[CosmeticEntry] = &[
    CosmeticEntry {
        sub_parts: &[SubPart {
            name: "propeller",
            shapes: PROPELLER_BLADES,
            pivot: [0.0, 4.0, 0.0],
            motion: Some(Motion::Spin { axis: Axis::Y, speed: 12.0 }),
        }],
        ..CosmeticEntry::plain("propeller", PROPELLER_CAP, &[("cap_a", "#E53935"), ("cap_b", "#1E88E5")])
    },
    CosmeticEntry {
        effects: &[EffectAttachment {
            spec: EffectSpec::Burst {
                count: 12,
                speed: 0.4,
                rate_min: 0.6,
                rate_max: 1.4,
                colors: &["#FFF176", "#CE93D8", "#FFFFFF"],
            },
            offset: [0.0, 9.0, 0.0],
        }],
        ..CosmeticEntry::plain("wizard", WIZARD_HAT, &[("robe", "#4527A0"), ("band", "#FFD54F"), ("star", "#FFF176")])
    },
    CosmeticEntry {
        effects: &[EffectAttachment {
            spec: EffectSpec::Stream {
                count: 20,
                spread: 0.2,
                direction: [0.0, 1.0, 0.0],
                speed: 0.6,
                max_distance: 0.5,
                colors: &["#FF4500", "#FF8C00", "#FFD700"],
            },
            offset: [0.0, 2.0, 0.0],
        }],
        light: Some(LightSpec {
            color: "#FF8C00",
            intensity: 1.5,
            range: 2.0,
            offset: [0.0, 3.0, 0.0],
        }),
        ..CosmeticEntry::plain("fire_crown", FIRE_CROWN, &[])
    },
    CosmeticEntry {
        effects: &[EffectAttachment {
            spec: EffectSpec::Orbit {
                count: 6,
                radius: 0.35,
                base_height: 0.0,
                amplitude: 0.04,
                frequency: 3.0,
                ring_speed: 1.5,
                colors: &["#FFF59D", "#FFFFFF"],
            },
            offset: [0.0, 3.0, 0.0],
        }],
        light: Some(LightSpec {
            color: "#FFF59D",
            intensity: 0.8,
            range: 1.5,
            offset: [0.0, 3.0, 0.0],
        }),
        ..CosmeticEntry::plain("halo", HALO, &[])
    },
    CosmeticEntry::plain("top_hat", TOP_HAT, &[]),
    CosmeticEntry::plain("crown", CROWN, &[]),
    CosmeticEntry::plain("lilypad_hat", LILYPAD_HAT, &[]),
];

// =============================================================================
// EYES
// =============================================================================

const NORMAL_EYES: &[Shape] = &[
    Shape::Box([-3, 0, 0], [-2, 1, 0], "eye"),
    Shape::Box([2, 0, 0], [3, 1, 0], "eye"),
    Shape::Voxel([-2, 0, 1], "pupil"),
    Shape::Voxel([2, 0, 1], "pupil"),
];

const SLEEPY_EYES: &[Shape] = &[
    Shape::Squashed([-3, 0, 0], "pupil", 0.4),
    Shape::Squashed([-2, 0, 0], "pupil", 0.4),
    Shape::Squashed([2, 0, 0], "pupil", 0.4),
    Shape::Squashed([3, 0, 0], "pupil", 0.4),
];

const ANGRY_EYES: &[Shape] = &[
    Shape::Box([-3, 0, 0], [-2, 1, 0], "eye"),
    Shape::Box([2, 0, 0], [3, 1, 0], "eye"),
    Shape::Voxel([-2, 0, 1], "pupil"),
    Shape::Voxel([2, 0, 1], "pupil"),
    Shape::Voxel([-3, 2, 0], "pupil"),
    Shape::Voxel([3, 2, 0], "pupil"),
];

const HEART_EYES: &[Shape] = &[
    Shape::Voxel([-4, 1, 0], "heart"),
    Shape::Voxel([-2, 1, 0], "heart"),
    Shape::Voxel([-3, 0, 0], "heart"),
    Shape::Voxel([2, 1, 0], "heart"),
    Shape::Voxel([4, 1, 0], "heart"),
    Shape::Voxel([3, 0, 0], "heart"),
];

const GLOW_EYES: &[Shape] = &[
    Shape::Box([-3, 0, 0], [-2, 1, 0], "glow"),
    Shape::Box([2, 0, 0], [3, 1, 0], "glow"),
];

const EYE_PALETTE: &[(&str, &str)] = &[("eye", "#FFFFFF"), ("pupil", "#111111"), ("heart", "#E91E63")];

pub(crate) const EYES: &[CosmeticEntry] = &[
    CosmeticEntry::plain("normal", NORMAL_EYES, EYE_PALETTE),
    CosmeticEntry::plain("sleepy", SLEEPY_EYES, EYE_PALETTE),
    CosmeticEntry::plain("angry", ANGRY_EYES, EYE_PALETTE),
    CosmeticEntry::plain("heart_eyes", HEART_EYES, EYE_PALETTE),
    CosmeticEntry {
        effects: &[
            EffectAttachment {
                spec: EffectSpec::Stream {
                    count: 8,
                    spread: 0.03,
                    direction: [0.0, 1.0, 0.2],
                    speed: 0.4,
                    max_distance: 0.25,
                    colors: &["#FF4500", "#FFD700"],
                },
                offset: [-2.5, 1.0, 0.5],
            },
            EffectAttachment {
                spec: EffectSpec::Stream {
                    count: 8,
                    spread: 0.03,
                    direction: [0.0, 1.0, 0.2],
                    speed: 0.4,
                    max_distance: 0.25,
                    colors: &["#FF4500", "#FFD700"],
                },
                offset: [2.5, 1.0, 0.5],
            },
        ],
        ..CosmeticEntry::plain("fire_eyes", GLOW_EYES, &[("glow", "#FF6D00")])
    },
    CosmeticEntry {
        effects: &[EffectAttachment {
            spec: EffectSpec::Twinkle {
                count: 10,
                extent: [0.45, 0.15, 0.05],
                speed: 4.0,
                colors: &["#FFFFFF", "#FFF59D"],
            },
            offset: [0.0, 0.5, 1.0],
        }],
        ..CosmeticEntry::plain("star_eyes", GLOW_EYES, &[("glow", "#FFEB3B")])
    },
];

// =============================================================================
// MOUTHS
// =============================================================================

pub(crate) const MOUTHS: &[CosmeticEntry] = &[
    CosmeticEntry::plain(
        "beak",
        &[
            Shape::Box([-1, 0, 0], [1, 1, 1], "beak"),
            Shape::Voxel([0, 0, 2], "beak_tip"),
        ],
        &[("beak", "#FFA726"), ("beak_tip", "#FB8C00")],
    ),
    CosmeticEntry::plain(
        "smile",
        &[
            Shape::Box([-1, 0, 0], [1, 0, 0], "#3E2723"),
            Shape::Voxel([-2, 1, 0], "#3E2723"),
            Shape::Voxel([2, 1, 0], "#3E2723"),
        ],
        &[],
    ),
    CosmeticEntry::plain(
        "open",
        &[
            Shape::Box([-1, 0, 0], [1, 1, 0], "#4E342E"),
            Shape::Box([-1, 0, 0], [1, 0, 0], "#EF5350"),
        ],
        &[],
    ),
    CosmeticEntry::plain(
        "tongue",
        &[
            Shape::Box([-1, 1, 0], [1, 1, 0], "#3E2723"),
            Shape::Box([0, -1, 0], [0, 0, 1], "#F06292"),
        ],
        &[],
    ),
    CosmeticEntry::plain(
        "fangs",
        &[
            Shape::Box([-2, 1, 0], [2, 1, 0], "#3E2723"),
            Shape::Voxel([-1, 0, 0], "#FFFFFF"),
            Shape::Voxel([1, 0, 0], "#FFFFFF"),
        ],
        &[],
    ),
];

// =============================================================================
// BODY ITEMS
// =============================================================================

const SCARF: &[Shape] = &[
    Shape::Box([-4, 9, -3], [4, 10, 3], "wool"),
    Shape::Paint([-4, 9, -3], [4, 9, 3], "stripe"),
    Shape::Box([2, 5, 3], [3, 8, 4], "wool"),
];

const SHIRT: &[Shape] = &[
    Shape::Box([-5, 3, -4], [5, 8, 4], "cloth"),
    Shape::Box([-4, 1, -4], [4, 2, 4], "cloth"),
    Shape::Paint([-5, 8, -4], [5, 8, 4], "trim"),
];

const GHOST_SHEET: &[Shape] = &[
    Shape::Box([-5, 0, -4], [5, 12, 4], "sheet"),
    Shape::Sphere([0, 13, 0], 4, "sheet"),
    Shape::Box([-2, 14, 4], [-1, 15, 4], "hole"),
    Shape::Box([1, 14, 4], [2, 15, 4], "hole"),
    Shape::Paint([-5, 0, -4], [5, 0, 4], "hem"),
];

const SWORD: &[Shape] = &[
    Shape::Box([0, 0, 0], [0, 2, 0], "#5D4037"),
    Shape::Box([-2, 3, 0], [2, 3, 0], "#FFC107"),
    Shape::Box([0, 4, 0], [0, 12, 0], "#CFD8DC"),
    Shape::Voxel([0, 13, 0], "#ECEFF1"),
];

const GUITAR: &[Shape] = &[
    Shape::Box([-2, 0, 0], [2, 4, 1], "#D84315"),
    Shape::Voxel([0, 2, 2], "#3E2723"),
    Shape::Box([0, 5, 0], [0, 11, 0], "#5D4037"),
    Shape::Box([-1, 12, 0], [1, 13, 0], "#3E2723"),
];

const CAPE: &[Shape] = &[
    Shape::Box([-4, 1, -4], [4, 10, -4], "#C62828"),
    Shape::Box([-3, 0, -5], [3, 6, -5], "#C62828"),
    Shape::Paint([-4, 10, -4], [4, 10, -4], "#FFC107"),
];

const AURA_RING: &[Shape] = &[Shape::Box([-1, 0, -1], [1, 0, 1], "#7C4DFF")];

const LIGHTNING_BOLT: &[Shape] = &[
    Shape::Voxel([0, 6, 4], "#FFEB3B"),
    Shape::Voxel([1, 5, 4], "#FFEB3B"),
    Shape::Voxel([0, 4, 4], "#FFEB3B"),
    Shape::Voxel([1, 3, 4], "#FFEB3B"),
];

pub(crate) const BODY_ITEMS: &[CosmeticEntry] = &[
    CosmeticEntry::plain("scarf", SCARF, &[("wool", "#D32F2F"), ("stripe", "#FFFFFF")]),
    CosmeticEntry {
        text_decal: Some(TextDecalSpec {
            text: "PLAZA",
            color: "#FFFFFF",
            background: None,
            offset: [0.0, 6.0, 4.6],
            width: 7.0,
        }),
        ..CosmeticEntry::plain("shirt", SHIRT, &[("cloth", "#1565C0"), ("trim", "#0D47A1")])
    },
    CosmeticEntry {
        text_decal: Some(TextDecalSpec {
            text: "I ♥ PLAZA",
            color: "#E91E63",
            background: Some("#FFFFFF"),
            offset: [0.0, 6.0, 4.6],
            width: 8.0,
        }),
        ..CosmeticEntry::plain("heart_shirt", SHIRT, &[("cloth", "#FFFFFF"), ("trim", "#F8BBD0")])
    },
    CosmeticEntry {
        hide_body: true,
        ..CosmeticEntry::plain(
            "ghost_sheet",
            GHOST_SHEET,
            &[("sheet", "#FAFAFA"), ("hole", "#212121"), ("hem", "#E0E0E0")],
        )
    },
    CosmeticEntry {
        held: true,
        ..CosmeticEntry::plain("sword", SWORD, &[])
    },
    CosmeticEntry {
        held: true,
        ..CosmeticEntry::plain("guitar", GUITAR, &[])
    },
    CosmeticEntry::plain("cape", CAPE, &[]),
    CosmeticEntry {
        effects: &[EffectAttachment {
            spec: EffectSpec::Orbit {
                count: 10,
                radius: 0.7,
                base_height: 0.5,
                amplitude: 0.15,
                frequency: 2.0,
                ring_speed: 1.2,
                colors: &["#7C4DFF", "#B388FF", "#E040FB"],
            },
            offset: [0.0, 0.0, 0.0],
        }],
        ..CosmeticEntry::plain("aura", AURA_RING, &[])
    },
    CosmeticEntry {
        effects: &[EffectAttachment {
            spec: EffectSpec::Burst {
                count: 16,
                speed: 0.9,
                rate_min: 1.5,
                rate_max: 3.0,
                colors: &["#FFEB3B", "#FFFFFF", "#81D4FA"],
            },
            offset: [0.0, 6.0, 0.0],
        }],
        sub_parts: &[SubPart {
            name: "bolt",
            shapes: LIGHTNING_BOLT,
            pivot: [0.0, 5.0, 4.0],
            motion: Some(Motion::Flap {
                axis: Axis::Z,
                frequency: 9.0,
                amplitude: PI / 16.0,
                phase: 0.0,
            }),
        }],
        ..CosmeticEntry::plain("lightning", &[], &[])
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::build_shapes;

    #[test]
    fn test_every_entry_has_geometry() {
        for entry in HATS.iter().chain(EYES).chain(MOUTHS).chain(BODY_ITEMS) {
            let voxels = build_shapes(entry.shapes).len()
                + entry.sub_parts.iter().map(|s| build_shapes(s.shapes).len()).sum::<usize>();
            assert!(voxels > 0, "{} has no voxels", entry.id);
        }
    }

    #[test]
    fn test_held_items_rise_from_anchor() {
        for entry in BODY_ITEMS.iter().filter(|e| e.held) {
            let voxels = build_shapes(entry.shapes);
            assert!(voxels.iter().all(|v| v.y >= 0), "{}", entry.id);
        }
    }
}
