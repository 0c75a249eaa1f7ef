//! Per-structure eligibility rule tables
//!
//! Each structure category owns one fixed, ordered list of requirements.
//! The tables are the single source of truth for the interview, the active-
//! rule resolver, and the verdict; call sites never carry their own copies.

pub mod carport;
pub mod patio;
pub mod shed;

use shared_types::{Dependency, Expected, Requirement, StructureType};

/// Get the ordered rule table for a structure category
pub fn requirements_for(structure: StructureType) -> &'static [Requirement] {
    match structure {
        StructureType::Shed => shed::REQUIREMENTS,
        StructureType::Patio => patio::REQUIREMENTS,
        StructureType::Carport => carport::REQUIREMENTS,
    }
}

/// An unconditional requirement
pub(crate) const fn rule(key: &'static str, label: &'static str, expected: Expected) -> Requirement {
    Requirement {
        key,
        label,
        expected,
        depends_on: None,
    }
}

/// A requirement that only applies when `gate` was answered `activate_on`
pub(crate) const fn gated(
    key: &'static str,
    label: &'static str,
    expected: Expected,
    gate: &'static str,
    activate_on: bool,
) -> Requirement {
    Requirement {
        key,
        label,
        expected,
        depends_on: Some(Dependency {
            key: gate,
            activate_on,
        }),
    }
}
