//! Interview flow for collecting an assessment step by step
//!
//! The interview is an explicit value object: every transition consumes the
//! previous state and returns the next one, so callers never thread answers
//! through UI-local mutable state. After each recorded answer the active-rule
//! list is re-resolved, because answering a gate can reveal or hide later
//! requirements.

use crate::error::InterviewError;
use crate::{resolver, structures, EligibilityEngine};
use shared_types::{
    AnswerSet, Dimensions, PropertyClass, Requirement, Setbacks, StructureType, Verdict,
};

/// Where the interview currently stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterviewStep {
    CollectingDimensions,
    CollectingSetbacks,
    /// Waiting on an answer to this requirement
    CollectingRequirements(Requirement),
    Complete,
}

/// One assessment session in progress
#[derive(Debug, Clone)]
pub struct Interview {
    structure: StructureType,
    dimensions: Option<Dimensions>,
    setbacks: Option<Setbacks>,
    answers: AnswerSet,
}

impl Interview {
    pub fn new(structure: StructureType) -> Self {
        Self {
            structure,
            dimensions: None,
            setbacks: None,
            answers: AnswerSet::new(),
        }
    }

    pub fn structure(&self) -> StructureType {
        self.structure
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The current step, derived from what has been collected so far
    pub fn step(&self) -> InterviewStep {
        if self.dimensions.is_none() {
            return InterviewStep::CollectingDimensions;
        }
        if self.setbacks.is_none() {
            return InterviewStep::CollectingSetbacks;
        }
        let rules = structures::requirements_for(self.structure);
        match resolver::next_unanswered(rules, &self.answers) {
            Some(rule) => InterviewStep::CollectingRequirements(rule),
            None => InterviewStep::Complete,
        }
    }

    pub fn provide_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn provide_setbacks(mut self, setbacks: Setbacks) -> Self {
        self.setbacks = Some(setbacks);
        self
    }

    /// Answer the requirement currently being asked
    pub fn answer(mut self, value: bool) -> Result<Self, InterviewError> {
        match self.step() {
            InterviewStep::CollectingRequirements(rule) => {
                self.answers.record(rule.key, value);
                Ok(self)
            }
            _ => Err(InterviewError::NoPendingRequirement),
        }
    }

    /// Evaluate the completed interview against a property class
    pub fn finish(
        &self,
        engine: &EligibilityEngine,
        property: PropertyClass,
    ) -> Result<Verdict, InterviewError> {
        let (InterviewStep::Complete, Some(dimensions), Some(setbacks)) =
            (self.step(), self.dimensions, self.setbacks)
        else {
            return Err(InterviewError::NotComplete);
        };
        let verdict =
            engine.evaluate(self.structure, property, dimensions, setbacks, &self.answers)?;
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{LotSize, Zone};

    fn asked(interview: &Interview) -> Option<&'static str> {
        match interview.step() {
            InterviewStep::CollectingRequirements(rule) => Some(rule.key),
            _ => None,
        }
    }

    #[test]
    fn test_carport_interview_walks_every_active_rule() {
        let engine = EligibilityEngine::new();
        let interview = Interview::new(StructureType::Carport);
        assert_eq!(interview.step(), InterviewStep::CollectingDimensions);

        let interview = interview.provide_dimensions(Dimensions::new(5.0, 4.0, 2.7));
        assert_eq!(interview.step(), InterviewStep::CollectingSetbacks);

        let interview = interview.provide_setbacks(Setbacks::new(6.0, 1.0, 1.0));
        assert_eq!(asked(&interview), Some("is_metal"));

        // Not metal: the reflectivity question is skipped entirely.
        let interview = interview.answer(false).unwrap();
        assert_eq!(asked(&interview), Some("new_driveway"));

        let interview = interview.answer(false).unwrap();
        assert_eq!(asked(&interview), Some("stormwater_connection"));

        let interview = interview.answer(true).unwrap();
        assert_eq!(asked(&interview), Some("reduces_access"));

        let interview = interview.answer(false).unwrap();
        assert_eq!(interview.step(), InterviewStep::Complete);

        let verdict = interview
            .finish(&engine, PropertyClass::new(Zone::Urban, LotSize::Standard))
            .unwrap();
        assert!(verdict.is_exempt);
    }

    #[test]
    fn test_answering_a_gate_reveals_the_dependent_question() {
        let interview = Interview::new(StructureType::Carport)
            .provide_dimensions(Dimensions::new(5.0, 4.0, 2.7))
            .provide_setbacks(Setbacks::new(6.0, 1.0, 1.0));
        assert_eq!(asked(&interview), Some("is_metal"));

        let interview = interview.answer(true).unwrap();
        assert_eq!(asked(&interview), Some("low_reflective_materials"));
    }

    #[test]
    fn test_answer_out_of_turn_is_rejected() {
        let interview = Interview::new(StructureType::Shed);
        assert_eq!(
            interview.answer(true).unwrap_err(),
            InterviewError::NoPendingRequirement
        );
    }

    #[test]
    fn test_finish_before_complete_is_rejected() {
        let engine = EligibilityEngine::new();
        let interview = Interview::new(StructureType::Carport)
            .provide_dimensions(Dimensions::new(5.0, 4.0, 2.7))
            .provide_setbacks(Setbacks::new(6.0, 1.0, 1.0));
        assert_eq!(
            interview
                .finish(&engine, PropertyClass::new(Zone::Urban, LotSize::Standard))
                .unwrap_err(),
            InterviewError::NotComplete
        );
    }
}
