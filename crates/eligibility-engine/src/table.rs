//! Rule table validation
//!
//! A requirement may only depend on a key declared earlier in the same
//! table, which rules out unknown, forward, self, and cyclic references in
//! one pass. Malformed tables are a configuration defect, so validation runs
//! once at load time rather than during evaluation.

use crate::error::TableError;
use crate::structures;
use shared_types::{Requirement, StructureType};

/// Validate one structure's rule table
pub fn validate(structure: StructureType, rules: &[Requirement]) -> Result<(), TableError> {
    for (idx, rule) in rules.iter().enumerate() {
        if let Some(dep) = rule.depends_on {
            match rules.iter().position(|r| r.key == dep.key) {
                None => {
                    return Err(TableError::UnknownDependency {
                        structure,
                        key: rule.key,
                        depends_on: dep.key,
                    })
                }
                Some(pos) if pos >= idx => {
                    return Err(TableError::ForwardDependency {
                        structure,
                        key: rule.key,
                        depends_on: dep.key,
                    })
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Validate every built-in rule table
pub fn validate_all() -> Result<(), TableError> {
    for structure in StructureType::all() {
        validate(structure, structures::requirements_for(structure))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Dependency, Expected};

    fn req(key: &'static str, depends_on: Option<Dependency>) -> Requirement {
        Requirement {
            key,
            label: "",
            expected: Expected::Yes,
            depends_on,
        }
    }

    #[test]
    fn test_builtin_tables_are_well_formed() {
        validate_all().expect("built-in rule tables must validate");
    }

    #[test]
    fn test_unknown_dependency_is_rejected() {
        let rules = [req(
            "b",
            Some(Dependency {
                key: "missing",
                activate_on: true,
            }),
        )];
        assert_eq!(
            validate(StructureType::Shed, &rules),
            Err(TableError::UnknownDependency {
                structure: StructureType::Shed,
                key: "b",
                depends_on: "missing",
            })
        );
    }

    #[test]
    fn test_forward_dependency_is_rejected() {
        let rules = [
            req(
                "a",
                Some(Dependency {
                    key: "b",
                    activate_on: true,
                }),
            ),
            req("b", None),
        ];
        assert_eq!(
            validate(StructureType::Patio, &rules),
            Err(TableError::ForwardDependency {
                structure: StructureType::Patio,
                key: "a",
                depends_on: "b",
            })
        );
    }

    #[test]
    fn test_self_dependency_is_rejected() {
        let rules = [req(
            "a",
            Some(Dependency {
                key: "a",
                activate_on: true,
            }),
        )];
        assert!(matches!(
            validate(StructureType::Carport, &rules),
            Err(TableError::ForwardDependency { .. })
        ));
    }
}
