//! Carport eligibility requirements
//!
//! SEPP (Exempt and Complying Development Codes) 2008
//! Schedule 2, Part 1, Division 1C

use super::{gated, rule};
use shared_types::{Expected, Requirement};

pub const REQUIREMENTS: &[Requirement] = &[
    rule(
        "is_metal",
        "Will your carport be made of metal?",
        Expected::Gate,
    ),
    gated(
        "low_reflective_materials",
        "Will you use low-reflective, factory-coloured materials?",
        Expected::Yes,
        "is_metal",
        true,
    ),
    rule(
        "new_driveway",
        "Will you be creating a new driveway or gutter crossing?",
        Expected::Gate,
    ),
    gated(
        "has_road_approval",
        "Will you have approval from the road authority?",
        Expected::Yes,
        "new_driveway",
        true,
    ),
    rule(
        "stormwater_connection",
        "Will roofwater connect to the stormwater drainage system?",
        Expected::Yes,
    ),
    rule(
        "reduces_access",
        "Will your carport reduce or block vehicle access, parking, or loading?",
        Expected::No,
    ),
];
