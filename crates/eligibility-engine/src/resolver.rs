//! Active-rule resolution
//!
//! A requirement is "active" when every gate in its dependency chain has been
//! answered with the activating value. Gating is transitive: if a parent gate
//! is itself inactive, every dependent stays inactive no matter what was
//! answered for it. Inactive requirements pass vacuously and are never
//! reported as failures.
//!
//! Resolution is incremental by design: answering one gate can reveal or hide
//! later requirements, so callers re-resolve after every recorded answer.

use shared_types::{AnswerSet, Expected, Requirement};

/// Whether a requirement currently applies, given the answers so far
pub fn is_active(rules: &[Requirement], rule: &Requirement, answers: &AnswerSet) -> bool {
    match rule.depends_on {
        None => true,
        Some(dep) => {
            let Some(parent) = rules.iter().find(|r| r.key == dep.key) else {
                // Unknown gate; table validation rejects this before use.
                return false;
            };
            is_active(rules, parent, answers) && answers.get(dep.key) == Some(dep.activate_on)
        }
    }
}

/// The ordered subsequence of rules that apply given the answers so far
pub fn active_requirements(rules: &[Requirement], answers: &AnswerSet) -> Vec<Requirement> {
    rules
        .iter()
        .filter(|rule| is_active(rules, rule, answers))
        .copied()
        .collect()
}

/// The next active requirement without a recorded answer, if any
pub fn next_unanswered(rules: &[Requirement], answers: &AnswerSet) -> Option<Requirement> {
    rules
        .iter()
        .find(|rule| is_active(rules, rule, answers) && answers.get(rule.key).is_none())
        .copied()
}

/// Active requirements whose recorded answer does not satisfy them
///
/// A scored requirement fails when its answer differs from the expected one.
/// A gate fails only by being active yet never answered; callers that require
/// a complete interview before evaluating will never observe that case.
pub fn failed_requirements(rules: &[Requirement], answers: &AnswerSet) -> Vec<Requirement> {
    rules
        .iter()
        .filter(|rule| is_active(rules, rule, answers))
        .filter(|rule| match rule.expected {
            Expected::Yes => answers.get(rule.key) != Some(true),
            Expected::No => answers.get(rule.key) != Some(false),
            Expected::Gate => answers.get(rule.key).is_none(),
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures;
    use shared_types::StructureType;

    fn keys(rules: &[Requirement]) -> Vec<&'static str> {
        rules.iter().map(|r| r.key).collect()
    }

    #[test]
    fn test_unconditional_rules_are_active_with_no_answers() {
        let rules = structures::requirements_for(StructureType::Carport);
        let active = active_requirements(rules, &AnswerSet::new());
        assert_eq!(
            keys(&active),
            vec![
                "is_metal",
                "new_driveway",
                "stormwater_connection",
                "reduces_access"
            ]
        );
    }

    #[test]
    fn test_answering_a_gate_reveals_its_dependents() {
        let rules = structures::requirements_for(StructureType::Carport);
        let answers: AnswerSet = [("is_metal", true)].into_iter().collect();
        let active = active_requirements(rules, &answers);
        assert!(keys(&active).contains(&"low_reflective_materials"));

        let answers: AnswerSet = [("is_metal", false)].into_iter().collect();
        let active = active_requirements(rules, &answers);
        assert!(!keys(&active).contains(&"low_reflective_materials"));
    }

    #[test]
    fn test_transitive_gating_through_an_inactive_parent() {
        // extends_above_gutter depends on attached_to_dwelling, which itself
        // depends on is_roofed. With no roof the whole chain stays inactive,
        // even if a stray answer for the middle gate is present.
        let rules = structures::requirements_for(StructureType::Patio);
        let answers: AnswerSet = [("is_roofed", false), ("attached_to_dwelling", true)]
            .into_iter()
            .collect();
        let active = active_requirements(rules, &answers);
        assert!(!keys(&active).contains(&"attached_to_dwelling"));
        assert!(!keys(&active).contains(&"extends_above_gutter"));
    }

    #[test]
    fn test_next_unanswered_walks_the_table_in_order() {
        let rules = structures::requirements_for(StructureType::Carport);
        let mut answers = AnswerSet::new();
        assert_eq!(next_unanswered(rules, &answers).unwrap().key, "is_metal");

        answers.record("is_metal", true);
        assert_eq!(
            next_unanswered(rules, &answers).unwrap().key,
            "low_reflective_materials"
        );

        answers.record("low_reflective_materials", true);
        answers.record("new_driveway", false);
        answers.record("stormwater_connection", true);
        answers.record("reduces_access", false);
        assert_eq!(next_unanswered(rules, &answers), None);
    }

    #[test]
    fn test_inactive_dependent_never_fails() {
        // newDriveway=false leaves hasRoadApproval inactive; unanswered or
        // answered wrongly, it must not be reported.
        let rules = structures::requirements_for(StructureType::Carport);
        let answers: AnswerSet = [
            ("is_metal", false),
            ("new_driveway", false),
            ("has_road_approval", false),
            ("stormwater_connection", true),
            ("reduces_access", false),
        ]
        .into_iter()
        .collect();
        let failed = failed_requirements(rules, &answers);
        assert!(failed.iter().all(|r| r.key != "has_road_approval"));
        assert!(failed.is_empty());
    }

    #[test]
    fn test_scored_mismatch_is_reported_in_table_order() {
        let rules = structures::requirements_for(StructureType::Carport);
        let answers: AnswerSet = [
            ("is_metal", true),
            ("low_reflective_materials", false),
            ("new_driveway", false),
            ("stormwater_connection", false),
            ("reduces_access", false),
        ]
        .into_iter()
        .collect();
        let failed = failed_requirements(rules, &answers);
        assert_eq!(
            keys(&failed),
            vec!["low_reflective_materials", "stormwater_connection"]
        );
    }

    #[test]
    fn test_active_unanswered_gate_is_flagged() {
        let rules = structures::requirements_for(StructureType::Carport);
        let failed = failed_requirements(rules, &AnswerSet::new());
        assert!(keys(&failed).contains(&"is_metal"));
    }
}
