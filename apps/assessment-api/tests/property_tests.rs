//! Property-based tests for assessment-api payloads
//!
//! Exercises the wire shapes the API exchanges with clients: answer-set
//! round trips and the serialized report the assess endpoint returns.

use eligibility_engine::EligibilityEngine;
use proptest::prelude::*;
use shared_types::{
    AnswerSet, Dimensions, Expected, LotSize, PropertyClass, Setbacks, StructureType, Zone,
};

fn any_structure() -> impl Strategy<Value = StructureType> {
    prop_oneof![
        Just(StructureType::Shed),
        Just(StructureType::Patio),
        Just(StructureType::Carport),
    ]
}

/// Answer every active question, gates from the supplied choices, scored
/// rules compliantly.
fn complete_answers(structure: StructureType, gates: &[bool]) -> AnswerSet {
    let engine = EligibilityEngine::new();
    let mut answers = AnswerSet::new();
    let mut gates = gates.iter().copied().cycle();
    while let Some(rule) = engine.next_requirement(structure, &answers) {
        let value = match rule.expected {
            Expected::Yes => true,
            Expected::No => false,
            Expected::Gate => gates.next().unwrap(),
        };
        answers.record(rule.key, value);
    }
    answers
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Answer-set wire format
    // ============================================================

    #[test]
    fn answer_sets_round_trip_through_json(
        structure in any_structure(),
        gates in prop::collection::vec(any::<bool>(), 8),
    ) {
        let answers = complete_answers(structure, &gates);
        let json = serde_json::to_string(&answers).unwrap();
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, answers);
    }

    // ============================================================
    // Report payload
    // ============================================================

    #[test]
    fn report_json_itemizes_every_check(
        structure in any_structure(),
        gates in prop::collection::vec(any::<bool>(), 8),
        length in 0.5f64..10.0,
        width in 0.5f64..10.0,
    ) {
        let engine = EligibilityEngine::new();
        let answers = complete_answers(structure, &gates);
        let report = engine
            .assess(
                structure,
                PropertyClass::new(Zone::Urban, LotSize::Standard),
                Dimensions::new(length, width, 2.7),
                Setbacks::new(6.0, 1.0, 1.0),
                &answers,
            )
            .unwrap();

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        let checks = &json["verdict"]["checks"];
        for field in ["area", "height", "front", "side", "rear"] {
            prop_assert!(checks[field].is_boolean(), "missing check `{}`", field);
        }
        prop_assert!(json["verdict"]["failed_requirements"].is_array());
        prop_assert!(json["citation"].as_str().unwrap().contains("SEPP"));
    }

    // ============================================================
    // Structure codes
    // ============================================================

    #[test]
    fn structure_codes_round_trip(structure in any_structure()) {
        let code = serde_json::to_value(structure).unwrap();
        let parsed = StructureType::parse_code(code.as_str().unwrap());
        prop_assert_eq!(parsed, Some(structure));
    }
}
