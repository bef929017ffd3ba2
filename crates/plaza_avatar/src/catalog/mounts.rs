//! Mount table.
//!
//! Mount geometry is authored around its own origin (deck top center at
//! `y = 0`, forward = `+z`). The whole mount is placed under the rider at
//! `offset` and scaled by `scale`.

use std::f32::consts::PI;

use super::{EffectAttachment, LightSpec, MountEntry, SubPart};
use crate::effects::{EffectSpec, Motion};
use crate::math::Axis;
use crate::voxel::Shape;

// === BOAT ===

const BOAT_HULL: &[Shape] = &[
    Shape::Box([-5, -3, -9], [5, -1, 9], "hull"),
    Shape::Box([-4, -4, -8], [4, -4, 8], "hull"),
    Shape::Box([-4, -1, -8], [4, -1, 8], "deck"),
    Shape::Paint([-5, -2, -9], [5, -2, 9], "stripe"),
    Shape::Box([-1, -3, 9], [1, 0, 10], "hull"),
];

const OAR: &[Shape] = &[
    Shape::Box([0, 0, 0], [6, 0, 0], "oar"),
    Shape::Box([7, -1, -1], [8, 0, 1], "blade"),
];

const OAR_MIRRORED: &[Shape] = &[
    Shape::Box([-6, 0, 0], [0, 0, 0], "oar"),
    Shape::Box([-8, -1, -1], [-7, 0, 1], "blade"),
];

// === SKATEBOARD ===

const SKATE_DECK: &[Shape] = &[
    Shape::Box([-3, -1, -8], [3, -1, 8], "deck"),
    Shape::Box([-2, -1, 9], [2, 0, 9], "deck"),
    Shape::Box([-2, -1, -9], [2, 0, -9], "deck"),
    Shape::Paint([-3, -1, -2], [3, -1, 2], "grip"),
];

const TRUCK: &[Shape] = &[Shape::Box([-3, 0, 0], [3, 0, 0], "#B0BEC5")];

const WHEEL: &[Shape] = &[
    Shape::Box([0, -1, -1], [0, 1, 1], "wheel"),
    Shape::Voxel([0, 0, 0], "#ECEFF1"),
];

// === DRAGONS ===

const DRAGON_BODY: &[Shape] = &[
    Shape::Box([-4, -5, -8], [4, -1, 6], "scale"),
    Shape::Paint([-3, -5, -7], [3, -5, 5], "belly"),
    Shape::Box([-2, -3, 7], [2, 1, 11], "scale"),
    Shape::Box([-1, -2, 12], [1, -1, 13], "belly"),
    Shape::Voxel([-2, 2, 9], "horn"),
    Shape::Voxel([2, 2, 9], "horn"),
    Shape::Box([-1, -4, -14], [1, -3, -9], "scale"),
    Shape::Voxel([0, -2, -12], "horn"),
];

const WING_L: &[Shape] = &[
    Shape::Box([1, 0, -3], [10, 0, 3], "wing"),
    Shape::Box([1, 1, -1], [8, 1, 1], "scale"),
];

const WING_R: &[Shape] = &[
    Shape::Box([-10, 0, -3], [-1, 0, 3], "wing"),
    Shape::Box([-8, 1, -1], [-1, 1, 1], "scale"),
];

// === UFO ===

const UFO_SAUCER: &[Shape] = &[
    Shape::CylinderY([0, 0], [-3, -2], 8, "metal"),
    Shape::CylinderY([0, 0], [-4, -4], 5, "metal"),
    Shape::CylinderY([0, 0], [-1, -1], 6, "rim"),
];

const UFO_LIGHTS: &[Shape] = &[
    Shape::Voxel([7, -2, 0], "#76FF03"),
    Shape::Voxel([-7, -2, 0], "#76FF03"),
    Shape::Voxel([0, -2, 7], "#FF1744"),
    Shape::Voxel([0, -2, -7], "#FF1744"),
];

// === CLOUD ===

const CLOUD: &[Shape] = &[
    Shape::Sphere([0, -3, 0], 3, "puff"),
    Shape::Sphere([-4, -3, 1], 2, "puff"),
    Shape::Sphere([4, -3, -1], 2, "puff"),
    Shape::Paint([-6, -5, -3], [6, -5, 3], "shade"),
];

const fn flap(axis: Axis, frequency: f32, amplitude: f32, phase: f32) -> Option<Motion> {
    Some(Motion::Flap {
        axis,
        frequency,
        amplitude,
        phase,
    })
}

pub(crate) const MOUNTS: &[MountEntry] = &[
    MountEntry {
        id: "boat",
        hull: BOAT_HULL,
        palette: &[("hull", "#8D6E63"), ("deck", "#BCAAA4"), ("stripe", "#FFFFFF"), ("oar", "#6D4C41"), ("blade", "#A1887F")],
        sub_parts: &[
            SubPart {
                name: "oar_l",
                shapes: OAR,
                pivot: [5.0, -1.0, 0.0],
                motion: flap(Axis::Y, 3.0, PI / 6.0, 0.0),
            },
            SubPart {
                name: "oar_r",
                shapes: OAR_MIRRORED,
                pivot: [-5.0, -1.0, 0.0],
                motion: flap(Axis::Y, 3.0, PI / 6.0, PI),
            },
        ],
        effects: &[],
        light: None,
        offset: [0.0, 0.0, 0.0],
        scale: 1.0,
    },
    MountEntry {
        id: "skateboard",
        hull: SKATE_DECK,
        palette: &[("deck", "#FF7043"), ("grip", "#212121"), ("wheel", "#FFEB3B")],
        sub_parts: &[
            SubPart { name: "truck_front", shapes: TRUCK, pivot: [0.0, -2.0, 6.0], motion: None },
            SubPart { name: "truck_back", shapes: TRUCK, pivot: [0.0, -2.0, -6.0], motion: None },
            SubPart {
                name: "wheel_fl",
                shapes: WHEEL,
                pivot: [3.0, -3.0, 6.0],
                motion: Some(Motion::Spin { axis: Axis::X, speed: 10.0 }),
            },
            SubPart {
                name: "wheel_fr",
                shapes: WHEEL,
                pivot: [-3.0, -3.0, 6.0],
                motion: Some(Motion::Spin { axis: Axis::X, speed: 10.0 }),
            },
            SubPart {
                name: "wheel_bl",
                shapes: WHEEL,
                pivot: [3.0, -3.0, -6.0],
                motion: Some(Motion::Spin { axis: Axis::X, speed: 10.0 }),
            },
            SubPart {
                name: "wheel_br",
                shapes: WHEEL,
                pivot: [-3.0, -3.0, -6.0],
                motion: Some(Motion::Spin { axis: Axis::X, speed: 10.0 }),
            },
        ],
        effects: &[],
        light: None,
        offset: [0.0, 0.0, 0.0],
        scale: 1.0,
    },
    MountEntry {
        id: "dragon",
        hull: DRAGON_BODY,
        palette: &[("scale", "#2E7D32"), ("belly", "#C5E1A5"), ("horn", "#FFF8E1"), ("wing", "#66BB6A")],
        sub_parts: &[
            SubPart { name: "wing_l", shapes: WING_L, pivot: [4.0, -1.0, 0.0], motion: flap(Axis::Z, 4.0, PI / 5.0, 0.0) },
            SubPart { name: "wing_r", shapes: WING_R, pivot: [-4.0, -1.0, 0.0], motion: flap(Axis::Z, 4.0, -PI / 5.0, 0.0) },
        ],
        effects: &[EffectAttachment {
            spec: EffectSpec::Trail {
                count: 40,
                spread: 0.08,
                direction: [0.0, 0.1, -1.0],
                length: 0.8,
                speed: 1.2,
                colors: &["#FF3D00", "#FF9100", "#FFEA00"],
            },
            offset: [0.0, -3.0, -14.0],
        }],
        light: None,
        offset: [0.0, 0.0, 0.0],
        scale: 1.2,
    },
    MountEntry {
        id: "ice_dragon",
        hull: DRAGON_BODY,
        palette: &[("scale", "#0288D1"), ("belly", "#E1F5FE"), ("horn", "#FFFFFF"), ("wing", "#81D4FA")],
        sub_parts: &[
            SubPart { name: "wing_l", shapes: WING_L, pivot: [4.0, -1.0, 0.0], motion: flap(Axis::Z, 3.5, PI / 5.0, 0.0) },
            SubPart { name: "wing_r", shapes: WING_R, pivot: [-4.0, -1.0, 0.0], motion: flap(Axis::Z, 3.5, -PI / 5.0, 0.0) },
        ],
        effects: &[EffectAttachment {
            spec: EffectSpec::Trail {
                count: 32,
                spread: 0.05,
                direction: [0.0, -0.1, 1.0],
                length: 0.6,
                speed: 1.5,
                colors: &["#E1F5FE", "#B3E5FC", "#FFFFFF"],
            },
            offset: [0.0, -1.0, 14.0],
        }],
        light: None,
        offset: [0.0, 0.0, 0.0],
        scale: 1.2,
    },
    MountEntry {
        id: "ufo",
        hull: UFO_SAUCER,
        palette: &[("metal", "#B0BEC5"), ("rim", "#78909C")],
        sub_parts: &[SubPart {
            name: "ufo_lights",
            shapes: UFO_LIGHTS,
            pivot: [0.0, 0.0, 0.0],
            motion: Some(Motion::Spin { axis: Axis::Y, speed: 2.5 }),
        }],
        effects: &[],
        light: Some(LightSpec {
            color: "#76FF03",
            intensity: 1.2,
            range: 3.0,
            offset: [0.0, -5.0, 0.0],
        }),
        offset: [0.0, 0.0, 0.0],
        scale: 1.0,
    },
    MountEntry {
        id: "cloud",
        hull: CLOUD,
        palette: &[("puff", "#FFFFFF"), ("shade", "#E3F2FD")],
        sub_parts: &[],
        effects: &[EffectAttachment {
            spec: EffectSpec::Twinkle {
                count: 12,
                extent: [0.7, 0.2, 0.4],
                speed: 2.0,
                colors: &["#FFFFFF", "#B3E5FC"],
            },
            offset: [0.0, -3.0, 0.0],
        }],
        light: None,
        offset: [0.0, 0.0, 0.0],
        scale: 1.0,
    },
];
