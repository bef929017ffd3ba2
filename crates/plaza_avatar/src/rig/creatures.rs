//! Four-legged, swimming and crawling rigs.
//!
//! Same grid as the bipeds. Quadrupeds face `+z` with the head in front of
//! the body, so face anchors sit further forward and lower than on a biped.

use super::{
    CosmeticOffsets, PaletteSource, PartSpec, PivotRule, RigDescriptor, ALL_CATEGORIES, NO_BODY_ITEMS,
};
use crate::voxel::Shape;

const fn part(name: &'static str, shapes: &'static [Shape], pivot: [f32; 3]) -> PartSpec {
    PartSpec {
        name,
        shapes,
        pivot: PivotRule::Fixed(pivot),
    }
}

const LEG_FL: &[Shape] = &[Shape::Box([2, 0, 3], [3, 4, 4], "main")];
const LEG_FR: &[Shape] = &[Shape::Box([-3, 0, 3], [-2, 4, 4], "main")];
const LEG_BL: &[Shape] = &[Shape::Box([2, 0, -5], [3, 4, -4], "main")];
const LEG_BR: &[Shape] = &[Shape::Box([-3, 0, -5], [-2, 4, -4], "main")];

const QUAD_BODY: &[Shape] = &[
    Shape::Box([-3, 5, -6], [3, 10, 5], "main"),
    Shape::Paint([-2, 5, -5], [2, 5, 4], "belly"),
];

const QUAD_OFFSETS: CosmeticOffsets = CosmeticOffsets {
    hat: [0.0, 16.0, 9.0],
    eyes: [0.0, 13.0, 12.0],
    mouth: [0.0, 10.0, 13.0],
    body_item: [0.0, 4.0, 0.0],
    held: [0.0, 0.0, 0.0],
};

// =============================================================================
// HORSE
// =============================================================================

pub(super) const HORSE: RigDescriptor = RigDescriptor {
    id: "horse",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-3, 6, -7], [3, 11, 6], "main"),
                Shape::Paint([-2, 6, -6], [2, 6, 5], "belly"),
            ],
            [0.0, 6.0, 0.0],
        ),
        part(
            "head",
            &[
                Shape::Box([-2, 10, 6], [2, 15, 9], "main"),
                Shape::Box([-2, 9, 10], [2, 12, 13], "main"),
                Shape::Paint([-2, 9, 13], [2, 10, 13], "muzzle"),
                Shape::Voxel([-1, 16, 7], "main"),
                Shape::Voxel([1, 16, 7], "main"),
            ],
            [0.0, 11.0, 6.0],
        ),
        part("mane", &[Shape::Box([0, 12, -1], [0, 16, 7], "hair")], [0.0, 12.0, 3.0]),
        part("leg_fl", &[Shape::Box([2, 0, 3], [3, 5, 4], "main"), Shape::Box([2, 0, 3], [3, 0, 4], "hoof")], [2.5, 6.0, 3.5]),
        part("leg_fr", &[Shape::Box([-3, 0, 3], [-2, 5, 4], "main"), Shape::Box([-3, 0, 3], [-2, 0, 4], "hoof")], [-2.5, 6.0, 3.5]),
        part("leg_bl", &[Shape::Box([2, 0, -6], [3, 5, -5], "main"), Shape::Box([2, 0, -6], [3, 0, -5], "hoof")], [2.5, 6.0, -5.5]),
        part("leg_br", &[Shape::Box([-3, 0, -6], [-2, 5, -5], "main"), Shape::Box([-3, 0, -6], [-2, 0, -5], "hoof")], [-2.5, 6.0, -5.5]),
        part("tail", &[Shape::Box([0, 5, -9], [0, 10, -8], "hair")], [0.0, 10.0, -8.0]),
    ],
    palette: &[("main", "#8D6E63"), ("belly", "#A1887F"), ("muzzle", "#5D4037"), ("hair", "#3E2723"), ("hoof", "#212121")],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        hat: [0.0, 17.0, 7.0],
        eyes: [0.0, 14.0, 10.0],
        mouth: [0.0, 10.0, 14.0],
        body_item: [0.0, 5.0, 0.0],
        held: [0.0, 0.0, 0.0],
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 0.9,
    lift: 0.0,
};

// =============================================================================
// DOG
// =============================================================================

pub(super) const DOG: RigDescriptor = RigDescriptor {
    id: "dog",
    parts: &[
        part("body", QUAD_BODY, [0.0, 5.0, 0.0]),
        part(
            "head",
            &[
                Shape::Box([-3, 9, 5], [3, 14, 10], "main"),
                Shape::Box([-2, 9, 11], [2, 11, 12], "belly"),
                Shape::Voxel([0, 11, 13], "nose"),
            ],
            [0.0, 9.0, 6.0],
        ),
        part("ear_l", &[Shape::Box([4, 10, 7], [4, 14, 8], "ear")], [4.0, 14.0, 7.5]),
        part("ear_r", &[Shape::Box([-4, 10, 7], [-4, 14, 8], "ear")], [-4.0, 14.0, 7.5]),
        part("leg_fl", LEG_FL, [2.5, 5.0, 3.5]),
        part("leg_fr", LEG_FR, [-2.5, 5.0, 3.5]),
        part("leg_bl", LEG_BL, [2.5, 5.0, -4.5]),
        part("leg_br", LEG_BR, [-2.5, 5.0, -4.5]),
        part("tail", &[Shape::Box([0, 10, -9], [0, 13, -7], "main")], [0.0, 10.0, -7.0]),
    ],
    palette: &[("main", "#C68642"), ("belly", "#F3E5AB"), ("ear", "#8D5524"), ("nose", "#212121")],
    palette_source: PaletteSource::SkinTinted,
    offsets: QUAD_OFFSETS,
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};

// =============================================================================
// CAT
// =============================================================================

pub(super) const CAT: RigDescriptor = RigDescriptor {
    id: "cat",
    parts: &[
        part("body", QUAD_BODY, [0.0, 5.0, 0.0]),
        part(
            "head",
            &[
                Shape::Box([-3, 9, 5], [3, 14, 10], "main"),
                Shape::Paint([-1, 9, 10], [1, 10, 10], "belly"),
                Shape::Voxel([0, 11, 11], "nose"),
            ],
            [0.0, 9.0, 6.0],
        ),
        part(
            "ear_l",
            &[Shape::Box([2, 15, 7], [3, 15, 8], "main"), Shape::Voxel([3, 16, 7], "main")],
            [2.5, 15.0, 7.5],
        ),
        part(
            "ear_r",
            &[Shape::Box([-3, 15, 7], [-2, 15, 8], "main"), Shape::Voxel([-3, 16, 7], "main")],
            [-2.5, 15.0, 7.5],
        ),
        part("leg_fl", LEG_FL, [2.5, 5.0, 3.5]),
        part("leg_fr", LEG_FR, [-2.5, 5.0, 3.5]),
        part("leg_bl", LEG_BL, [2.5, 5.0, -4.5]),
        part("leg_br", LEG_BR, [-2.5, 5.0, -4.5]),
        part(
            "tail",
            &[Shape::Box([0, 10, -7], [0, 16, -7], "main"), Shape::Voxel([0, 16, -6], "main")],
            [0.0, 10.0, -7.0],
        ),
    ],
    palette: &[("main", "#FF9800"), ("belly", "#FFFFFF"), ("nose", "#F48FB1")],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        eyes: [0.0, 13.0, 11.0],
        mouth: [0.0, 10.0, 11.0],
        ..QUAD_OFFSETS
    },
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 0.9,
    lift: 0.0,
};

// =============================================================================
// FOX
// =============================================================================

pub(super) const FOX: RigDescriptor = RigDescriptor {
    id: "fox",
    parts: &[
        part("body", QUAD_BODY, [0.0, 5.0, 0.0]),
        part(
            "head",
            &[
                Shape::Box([-3, 9, 5], [3, 13, 9], "main"),
                Shape::Box([-1, 9, 10], [1, 11, 12], "belly"),
                Shape::Voxel([0, 11, 13], "nose"),
            ],
            [0.0, 9.0, 6.0],
        ),
        part(
            "ear_l",
            &[Shape::Box([2, 14, 6], [3, 16, 7], "main"), Shape::Paint([2, 16, 6], [3, 16, 7], "tip")],
            [2.5, 14.0, 6.5],
        ),
        part(
            "ear_r",
            &[Shape::Box([-3, 14, 6], [-2, 16, 7], "main"), Shape::Paint([-3, 16, 6], [-2, 16, 7], "tip")],
            [-2.5, 14.0, 6.5],
        ),
        part("leg_fl", LEG_FL, [2.5, 5.0, 3.5]),
        part("leg_fr", LEG_FR, [-2.5, 5.0, 3.5]),
        part("leg_bl", LEG_BL, [2.5, 5.0, -4.5]),
        part("leg_br", LEG_BR, [-2.5, 5.0, -4.5]),
        part(
            "tail",
            &[
                Shape::Box([-2, 7, -12], [2, 10, -7], "main"),
                Shape::Paint([-2, 7, -12], [2, 10, -11], "belly"),
            ],
            [0.0, 9.0, -7.0],
        ),
    ],
    palette: &[("main", "#E65100"), ("belly", "#FFFFFF"), ("tip", "#212121"), ("nose", "#212121")],
    palette_source: PaletteSource::SkinTinted,
    offsets: QUAD_OFFSETS,
    supports: ALL_CATEGORIES,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 0.95,
    lift: 0.0,
};

// =============================================================================
// SHARK (no body items, hovers)
// =============================================================================

pub(super) const SHARK: RigDescriptor = RigDescriptor {
    id: "shark",
    parts: &[
        part(
            "body",
            &[
                Shape::Box([-3, 0, -8], [3, 5, 4], "main"),
                Shape::Paint([-2, 0, -7], [2, 0, 3], "belly"),
            ],
            [0.0, 0.0, 0.0],
        ),
        part(
            "head",
            &[
                Shape::Box([-3, 0, 5], [3, 5, 9], "main"),
                Shape::Paint([-3, 0, 5], [3, 1, 9], "belly"),
                Shape::Box([-2, 1, 10], [2, 4, 11], "main"),
            ],
            [0.0, 0.0, 5.0],
        ),
        part("fin_dorsal", &[Shape::Box([0, 6, -3], [0, 9, 0], "main"), Shape::Voxel([0, 10, -2], "main")], [0.0, 6.0, -1.0]),
        part("fin_l", &[Shape::Box([4, 1, 0], [7, 1, 2], "main")], [4.0, 1.0, 1.0]),
        part("fin_r", &[Shape::Box([-7, 1, 0], [-4, 1, 2], "main")], [-4.0, 1.0, 1.0]),
        part(
            "tail",
            &[Shape::Box([0, 1, -11], [0, 4, -9], "main"), Shape::Box([0, 5, -13], [0, 7, -12], "main")],
            [0.0, 2.5, -9.0],
        ),
    ],
    palette: &[("main", "#607D8B"), ("belly", "#ECEFF1")],
    palette_source: PaletteSource::SkinTinted,
    offsets: CosmeticOffsets {
        hat: [0.0, 6.0, 7.0],
        eyes: [0.0, 4.0, 10.0],
        mouth: [0.0, 1.0, 10.0],
        body_item: [0.0, 0.0, 0.0],
        held: [0.0, 0.0, 0.0],
    },
    supports: NO_BODY_ITEMS,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 1.0,
    lift: 3.0,
};

// =============================================================================
// SNAIL (no body items, fixed colors)
// =============================================================================

pub(super) const SNAIL: RigDescriptor = RigDescriptor {
    id: "snail",
    parts: &[
        part("body", &[Shape::Box([-2, 0, -6], [2, 2, 5], "main")], [0.0, 0.0, 0.0]),
        part("head", &[Shape::Box([-2, 3, 3], [2, 7, 6], "main")], [0.0, 3.0, 4.5]),
        part(
            "shell",
            &[
                Shape::Sphere([0, 7, -2], 4, "shell"),
                Shape::Paint([-4, 7, -6], [4, 7, 2], "spiral"),
                Shape::Paint([-4, 4, -2], [4, 10, -2], "spiral"),
            ],
            [0.0, 3.0, -2.0],
        ),
        part(
            "eye_stalk_l",
            &[Shape::Box([1, 8, 5], [1, 10, 5], "main"), Shape::Voxel([1, 11, 5], "#111111")],
            [1.0, 8.0, 5.0],
        ),
        part(
            "eye_stalk_r",
            &[Shape::Box([-1, 8, 5], [-1, 10, 5], "main"), Shape::Voxel([-1, 11, 5], "#111111")],
            [-1.0, 8.0, 5.0],
        ),
    ],
    palette: &[("main", "#BCAAA4"), ("shell", "#A1887F"), ("spiral", "#6D4C41")],
    palette_source: PaletteSource::Fixed,
    offsets: CosmeticOffsets {
        hat: [0.0, 12.0, 5.0],
        eyes: [0.0, 6.0, 7.0],
        mouth: [0.0, 4.0, 7.0],
        body_item: [0.0, 0.0, 0.0],
        held: [0.0, 0.0, 0.0],
    },
    supports: NO_BODY_ITEMS,
    baked_hat: None,
    held_limb: None,
    hidden_variant: None,
    scale: 1.0,
    lift: 0.0,
};
