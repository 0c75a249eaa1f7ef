//! Patio, pergola, and verandah eligibility requirements
//!
//! SEPP (Exempt and Complying Development Codes) 2008
//! Schedule 2, Part 1, Division 1B

use super::{gated, rule};
use shared_types::{Expected, Requirement};

pub const REQUIREMENTS: &[Requirement] = &[
    rule(
        "enclosing_wall_height",
        "Will your patio have an enclosing wall higher than 1.4m?",
        Expected::No,
    ),
    rule(
        "floor_height",
        "Will the floor height be more than 1m above ground level?",
        Expected::No,
    ),
    rule(
        "is_roofed",
        "Will your patio/pergola be roofed?",
        Expected::Gate,
    ),
    gated(
        "roof_overhang",
        "Will the roof overhang be 600mm or less on each side?",
        Expected::Yes,
        "is_roofed",
        true,
    ),
    // Gate that is itself gated: only roofed patios can be dwelling-attached.
    gated(
        "attached_to_dwelling",
        "Will your patio/pergola be attached to a dwelling?",
        Expected::Gate,
        "is_roofed",
        true,
    ),
    gated(
        "extends_above_gutter",
        "Will it extend above the gutter line?",
        Expected::No,
        "attached_to_dwelling",
        true,
    ),
    gated(
        "stormwater_connection",
        "Will roofwater connect to the stormwater drainage system?",
        Expected::Yes,
        "is_roofed",
        true,
    ),
    rule(
        "is_metal",
        "Will your patio/pergola be made of metal?",
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
        "is_fascia_connected",
        "Will your patio/pergola be fascia-connected?",
        Expected::Gate,
    ),
    gated(
        "follows_engineer_specs",
        "Will it follow engineer's specifications?",
        Expected::Yes,
        "is_fascia_connected",
        true,
    ),
    rule(
        "obstructs_drainage",
        "Will your structure obstruct existing drainage paths?",
        Expected::No,
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
];
