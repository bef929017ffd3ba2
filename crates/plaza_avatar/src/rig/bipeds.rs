//! Upright rigs.
//!
//! Grid: feet at `y = 0`, face toward `+z`, character's left at `+x`.

use super::{CosmeticOffsets, PaletteSource, PartSpec, PivotRule, RigDescriptor, ALL_CATEGORIES};
use crate::voxel::Shape;

const fn part(name: &'static str, shapes: &'static [Shape], pivot: [f32; 3]) -> PartSpec {
    PartSpec {
        name,
        shapes,
        pivot: PivotRule::Fixed(pivot),
    }
}

// =============================================================================
// PENGUIN (standard biped)
// =============================================================================

const PENGUIN_BODY: &[Shape] = &[
    Shape::Box([-4, 2, -3], [4, 11, 3], "main"),
    Shape::Paint([-2, 3, 3], [2, 9, 3], "belly"),
];
const PENGUIN_HEAD: &[Shape] = &[
    Shape::Box([-3, 12, -3], [3, 17, 3], "main"),
    Shape::Paint([-2, 12, 3], [2, 15, 3], "belly"),
];
const PENGUIN_FLIPPER_L: &[Shape] = &[Shape::Box([5, 5, -1], [5, 10, 1], "main")];
const PENGUIN_FLIPPER_R: &[Shape] = &[Shape::Box([-5, 5, -1], [-5, 10, 1], "main")];
const PENGUIN_FOOT_L: &[Shape] = &[Shape::Box([1, 0, -1], [3, 1, 3], "feet")];
const PENGUIN_FOOT_R: &[Shape] = &[Shape::Box([-3, 0, -1], [-1, 1, 3], "feet")];
/// Torso core left under a full-body costume.
const PENGUIN_BODY_HIDDEN: &[Shape] = &[Shape::Box([-2, 2, -2], [2, 11, 2], "main")];

const PENGUIN_OFFSETS: CosmeticOffsets = CosmeticOffsets {
    hat: [0.0, 18.0, 0.0],
    eyes: [0.0, 15.0, 4.0],
    mouth: [0.0, 13.0, 4.0],
    body_item: [0.0, 2.0, 0.0],
    held: [0.0, -5.0, 1.0],
};

pub(super) const PENGUIN: RigDescriptor = RigDescriptor {
    id: "penguin",
    parts: &[
        part("body", PENGUIN_BODY, [0.0, 2.0, 0.0]),
        part("head", PENGUIN_HEAD, [0.0, 12.0, 0.0]),
        part("flipper_l", PENGUIN_FLIPPER_L, [5.0, 10.0, 0.0]),
        part("flipper_r", PENGUIN_FLIPPER_R, [-5.0, 10.0, 0.0]),
        part("foot_l", PENGUIN_FOOT_L, [2.0, 1.0, 0.0]),
        part("foot_r", PENGUIN_FOOT_R, [-2.0, 1.0, 0.0]),
    ],
    palette: &[("main", "#222222"), ("belly", "#FFFFFF"), ("feet", "#FFA500")],
    palette_source: PaletteSource::SkinTinted,
    offsets: PENGUIN_OFFSETS,
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: Some("flipper_r"),
    hidden_variant: Some(&PENGUIN_HIDDEN),
    scale: 1.0,
    lift: 0.0,
};

/// Penguin under a full-body costume: no flippers, thin torso.
pub(super) const PENGUIN_HIDDEN: RigDescriptor = RigDescriptor {
    id: "penguin",
    parts: &[
        part("body_hidden", PENGUIN_BODY_HIDDEN, [0.0, 2.0, 0.0]),
        part("head", PENGUIN_HEAD, [0.0, 12.0, 0.0]),
        part("foot_l", PENGUIN_FOOT_L, [2.0, 1.0, 0.0]),
        part("foot_r", PENGUIN_FOOT_R, [-2.0, 1.0, 0.0]),
    ],
    palette: &[("main", "#222222"), ("belly", "#FFFFFF"), ("feet", "#FFA500")],
    palette_source: PaletteSource::SkinTinted,
    offsets: PENGUIN_OFFSETS,
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};

// =============================================================================
// DUCK
// =============================================================================

pub(super) const DUCK: RigDescriptor = RigDescriptor {
    id: "duck",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-4, 2, -4], [4, 9, 3], "main"),
                Shape::Paint([-3, 2, 3], [3, 7, 3], "belly"),
            ],
            [0.0, 2.0, 0.0],
        ),
        part("head", &[Shape::Box([-3, 10, -2], [3, 15, 3], "main")], [0.0, 10.0, 0.0]),
        part("wing_l", &[Shape::Box([5, 4, -3], [5, 8, 2], "main")], [5.0, 8.0, 0.0]),
        part("wing_r", &[Shape::Box([-5, 4, -3], [-5, 8, 2], "main")], [-5.0, 8.0, 0.0]),
        part("tail", &[Shape::Box([-1, 6, -6], [1, 8, -5], "main")], [0.0, 6.0, -5.0]),
        part("foot_l", &[Shape::Box([1, 0, -1], [3, 1, 3], "feet")], [2.0, 1.0, 0.0]),
        part("foot_r", &[Shape::Box([-3, 0, -1], [-1, 1, 3], "feet")], [-2.0, 1.0, 0.0]),
    ],
    palette: &[("main", "#FFEB3B"), ("belly", "#FFF59D"), ("feet", "#FF9800")],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        hat: [0.0, 16.0, 0.0],
        eyes: [0.0, 13.0, 4.0],
        mouth: [0.0, 11.0, 4.0],
        body_item: [0.0, 1.0, 0.0],
        held: [0.0, -4.0, 1.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: Some("wing_r"),
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};

// =============================================================================
// BEAR
// =============================================================================

pub(super) const BEAR: RigDescriptor = RigDescriptor {
    id: "bear",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-5, 5, -4], [5, 14, 4], "main"),
                Shape::Paint([-3, 6, 4], [3, 12, 4], "belly"),
            ],
            [0.0, 5.0, 0.0],
        ),
        part(
            "head",
            &[
                Shape::Box([-4, 15, -3], [4, 21, 3], "main"),
                Shape::Box([-2, 15, 4], [2, 17, 5], "belly"),
                Shape::Voxel([0, 17, 6], "nose"),
            ],
            [0.0, 15.0, 0.0],
        ),
        part("ear_l", &[Shape::Box([3, 22, -1], [4, 23, 0], "main")], [3.5, 22.0, 0.0]),
        part("ear_r", &[Shape::Box([-4, 22, -1], [-3, 23, 0], "main")], [-3.5, 22.0, 0.0]),
        part("arm_l", &[Shape::Box([6, 7, -2], [7, 13, 1], "main")], [6.5, 13.0, 0.0]),
        part("arm_r", &[Shape::Box([-7, 7, -2], [-6, 13, 1], "main")], [-6.5, 13.0, 0.0]),
        part("leg_l", &[Shape::Box([1, 0, -2], [4, 4, 2], "main")], [2.5, 4.0, 0.0]),
        part("leg_r", &[Shape::Box([-4, 0, -2], [-1, 4, 2], "main")], [-2.5, 4.0, 0.0]),
    ],
    palette: &[("main", "#795548"), ("belly", "#D7CCC8"), ("nose", "#212121")],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        hat: [0.0, 22.0, 0.0],
        eyes: [0.0, 19.0, 4.0],
        mouth: [0.0, 16.0, 6.0],
        body_item: [0.0, 4.0, 0.0],
        held: [0.0, -6.0, 1.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: Some("arm_r"),
    hidden_variant: None,
    scale: 0.85,
    lift: 0.0,
};

// =============================================================================
// BUNNY
// =============================================================================

pub(super) const BUNNY: RigDescriptor = RigDescriptor {
    id: "bunny",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-3, 2, -3], [3, 9, 3], "main"),
                Shape::Paint([-2, 3, 3], [2, 8, 3], "belly"),
            ],
            [0.0, 2.0, 0.0],
        ),
        part("head", &[Shape::Box([-3, 10, -3], [3, 15, 3], "main")], [0.0, 10.0, 0.0]),
        part(
            "ear_l",
            &[
                Shape::Box([1, 16, -1], [2, 22, 0], "main"),
                Shape::Paint([1, 17, 0], [2, 21, 0], "inner"),
            ],
            [1.5, 16.0, 0.0],
        ),
        part(
            "ear_r",
            &[
                Shape::Box([-2, 16, -1], [-1, 22, 0], "main"),
                Shape::Paint([-2, 17, 0], [-1, 21, 0], "inner"),
            ],
            [-1.5, 16.0, 0.0],
        ),
        part("arm_l", &[Shape::Box([4, 5, -1], [4, 8, 1], "main")], [4.0, 8.0, 0.0]),
        part("arm_r", &[Shape::Box([-4, 5, -1], [-4, 8, 1], "main")], [-4.0, 8.0, 0.0]),
        part("foot_l", &[Shape::Box([1, 0, -1], [2, 1, 4], "main")], [1.5, 1.0, 0.0]),
        part("foot_r", &[Shape::Box([-2, 0, -1], [-1, 1, 4], "main")], [-1.5, 1.0, 0.0]),
        part("tail", &[Shape::Sphere([0, 4, -4], 1, "belly")], [0.0, 4.0, -4.0]),
    ],
    palette: &[("main", "#F5F5F5"), ("belly", "#FFFFFF"), ("inner", "#F8BBD0")],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        hat: [0.0, 16.0, 0.0],
        eyes: [0.0, 13.0, 4.0],
        mouth: [0.0, 11.0, 4.0],
        body_item: [0.0, 0.0, 0.0],
        held: [0.0, -3.0, 1.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: Some("arm_r"),
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};

// =============================================================================
// FROG (fixed colors, baked hat)
// =============================================================================

pub(super) const FROG: RigDescriptor = RigDescriptor {
    id: "frog",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-4, 2, -3], [4, 7, 3], "main"),
                Shape::Paint([-3, 2, 3], [3, 6, 3], "belly"),
            ],
            [0.0, 2.0, 0.0],
        ),
        part(
            "head",
            &[
                Shape::Box([-4, 8, -3], [4, 11, 3], "main"),
                Shape::Box([-4, 12, 0], [-2, 13, 2], "main"),
                Shape::Box([2, 12, 0], [4, 13, 2], "main"),
            ],
            [0.0, 8.0, 0.0],
        ),
        part("arm_l", &[Shape::Box([5, 3, 0], [5, 6, 2], "main")], [5.0, 6.0, 1.0]),
        part("arm_r", &[Shape::Box([-5, 3, 0], [-5, 6, 2], "main")], [-5.0, 6.0, 1.0]),
        part("leg_l", &[Shape::Box([3, 0, -3], [6, 1, 1], "main")], [4.0, 2.0, -1.0]),
        part("leg_r", &[Shape::Box([-6, 0, -3], [-3, 1, 1], "main")], [-4.0, 2.0, -1.0]),
    ],
    palette: &[("main", "#4CAF50"), ("belly", "#C5E1A5")],
    palette_source: PaletteSource::Fixed,
    offsets: CosmeticOffsets {
        hat: [0.0, 14.0, 0.0],
        eyes: [0.0, 12.0, 3.0],
        mouth: [0.0, 9.0, 4.0],
        body_item: [0.0, 0.0, 0.0],
        held: [0.0, -3.0, 1.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: Some("lilypad_hat"),
    held_limb: Some("arm_r"),
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};

// =============================================================================
// HUMAN (taller; face cosmetics shifted up)
// =============================================================================

pub(super) const HUMAN: RigDescriptor = RigDescriptor {
    id: "human",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-4, 8, -2], [4, 17, 2], "shirt"),
                Shape::Paint([-4, 8, -2], [4, 8, 2], "belt"),
            ],
            [0.0, 8.0, 0.0],
        ),
        part(
            "head",
            &[
                Shape::Box([-3, 18, -3], [3, 24, 3], "main"),
                Shape::Box([-3, 24, -3], [3, 25, 3], "hair"),
                Shape::Box([-3, 20, -3], [3, 24, -3], "hair"),
            ],
            [0.0, 18.0, 0.0],
        ),
        part("arm_l", &[Shape::Box([5, 9, -1], [6, 17, 1], "main")], [5.5, 17.0, 0.0]),
        part("arm_r", &[Shape::Box([-6, 9, -1], [-5, 17, 1], "main")], [-5.5, 17.0, 0.0]),
        part(
            "leg_l",
            &[
                Shape::Box([1, 0, -1], [3, 7, 1], "pants"),
                Shape::Box([1, 0, 1], [3, 0, 2], "shoe"),
            ],
            [2.0, 7.0, 0.0],
        ),
        part(
            "leg_r",
            &[
                Shape::Box([-3, 0, -1], [-1, 7, 1], "pants"),
                Shape::Box([-3, 0, 1], [-1, 0, 2], "shoe"),
            ],
            [-2.0, 7.0, 0.0],
        ),
    ],
    palette: &[
        ("main", "#F1C27D"),
        ("hair", "#4E342E"),
        ("shirt", "#546E7A"),
        ("belt", "#3E2723"),
        ("pants", "#37474F"),
        ("shoe", "#212121"),
    ],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        hat: [0.0, 26.0, 0.0],
        eyes: [0.0, 22.0, 4.0],
        mouth: [0.0, 19.0, 4.0],
        body_item: [0.0, 7.0, 0.0],
        held: [0.0, -8.0, 1.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: Some("arm_r"),
    hidden_variant: None,
    scale: 0.8,
    lift: 0.0,
};

// =============================================================================
// FREESTYLE (dual-tone; pivots derived from bounds)
// =============================================================================

pub(super) const FREESTYLE: RigDescriptor = RigDescriptor {
    id: "freestyle",
    parts: &[
        PartSpec {
            name: "body",
            shapes: &[
                Shape::Box([-4, 4, -3], [4, 12, 3], "main"),
                Shape::Paint([-3, 5, 3], [3, 11, 3], "belly"),
                Shape::Paint([-4, 4, -3], [4, 4, 3], "dark"),
            ],
            pivot: PivotRule::BoundsBottom,
        },
        PartSpec {
            name: "head",
            shapes: &[
                Shape::Sphere([0, 16, 0], 3, "main"),
                Shape::Paint([-2, 14, 2], [2, 16, 3], "light"),
                Shape::Voxel([-2, 20, 0], "accent"),
                Shape::Voxel([2, 20, 0], "accent"),
            ],
            pivot: PivotRule::BoundsBottom,
        },
        PartSpec {
            name: "arm_l",
            shapes: &[Shape::Box([5, 6, -1], [5, 11, 1], "dark")],
            pivot: PivotRule::BoundsTop,
        },
        PartSpec {
            name: "arm_r",
            shapes: &[Shape::Box([-5, 6, -1], [-5, 11, 1], "dark")],
            pivot: PivotRule::BoundsTop,
        },
        PartSpec {
            name: "leg_l",
            shapes: &[Shape::Box([1, 0, -1], [3, 3, 1], "dark")],
            pivot: PivotRule::BoundsTop,
        },
        PartSpec {
            name: "leg_r",
            shapes: &[Shape::Box([-3, 0, -1], [-1, 3, 1], "dark")],
            pivot: PivotRule::BoundsTop,
        },
    ],
    palette: &[],
    palette_source: PaletteSource::Freestyle,
    offsets: CosmeticOffsets {
        hat: [0.0, 20.0, 0.0],
        eyes: [0.0, 17.0, 4.0],
        mouth: [0.0, 15.0, 4.0],
        body_item: [0.0, 3.0, 0.0],
        held: [0.0, -5.0, 1.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: Some("arm_r"),
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};
