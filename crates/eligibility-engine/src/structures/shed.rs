//! Shed (cabana/garden shed) eligibility requirements
//!
//! SEPP (Exempt and Complying Development Codes) 2008
//! Schedule 2, Part 1, Division 1A

use super::{gated, rule};
use shared_types::{Expected, Requirement};

pub const REQUIREMENTS: &[Requirement] = &[
    rule(
        "is_shipping_container",
        "Will your structure be a shipping container?",
        Expected::No,
    ),
    rule(
        "roofwater_drains",
        "Will roofwater drain without causing nuisance to neighbours?",
        Expected::Yes,
    ),
    rule(
        "is_metal",
        "Will your structure be made of metal?",
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
        "in_bushfire_area",
        "Will your structure be in a bushfire area?",
        Expected::Gate,
    ),
    gated(
        "near_dwelling",
        "Will your structure be less than 5m from a dwelling?",
        Expected::No,
        "in_bushfire_area",
        true,
    ),
    gated(
        "is_non_combustible",
        "Will your structure be made of non-combustible materials?",
        Expected::Yes,
        "in_bushfire_area",
        true,
    ),
    rule(
        "in_heritage_area",
        "Will your property be in a heritage area?",
        Expected::Gate,
    ),
    gated(
        "in_rear_yard",
        "Will your structure be in the rear yard?",
        Expected::Yes,
        "in_heritage_area",
        true,
    ),
    rule(
        "blocks_access",
        "Will your structure block entry, exit, or fire safety measures of nearby buildings?",
        Expected::No,
    ),
    rule(
        "clear_of_easements",
        "Will your structure be at least 1m clear of registered easements?",
        Expected::Yes,
    ),
];
