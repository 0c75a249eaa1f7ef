pub mod error;
pub mod interview;
pub mod limits;
pub mod resolver;
pub mod structures;
pub mod table;

pub use error::{EvaluateError, InterviewError, TableError};
pub use interview::{Interview, InterviewStep};
pub use limits::LimitsConfig;

use shared_types::{
    AnswerSet, AssessmentReport, Dimensions, PropertyClass, Requirement, Setbacks, StructureType,
    Verdict,
};

/// EligibilityEngine entry point
///
/// A pure evaluator: given a structure category, the property's planning
/// class, dimensions, setbacks, and a complete answer set, it produces an
/// itemized exempt-development verdict. No I/O, no shared state.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    limits: LimitsConfig,
}

impl EligibilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// The full ordered rule table for a structure category
    pub fn requirements(&self, structure: StructureType) -> &'static [Requirement] {
        structures::requirements_for(structure)
    }

    /// The rules that currently apply, given the answers so far
    pub fn active_requirements(
        &self,
        structure: StructureType,
        answers: &AnswerSet,
    ) -> Vec<Requirement> {
        resolver::active_requirements(structures::requirements_for(structure), answers)
    }

    /// The next question to ask, or `None` when the interview is complete
    pub fn next_requirement(
        &self,
        structure: StructureType,
        answers: &AnswerSet,
    ) -> Option<Requirement> {
        resolver::next_unanswered(structures::requirements_for(structure), answers)
    }

    /// Compute the verdict for a complete assessment
    ///
    /// Refuses with a typed error when any dimension or setback is not a
    /// positive number, or when an active requirement is unanswered.
    pub fn evaluate(
        &self,
        structure: StructureType,
        property: PropertyClass,
        dimensions: Dimensions,
        setbacks: Setbacks,
        answers: &AnswerSet,
    ) -> Result<Verdict, EvaluateError> {
        for (field, value) in [
            ("length", dimensions.length_m),
            ("width", dimensions.width_m),
            ("height", dimensions.height_m),
        ] {
            if !(value > 0.0) {
                return Err(EvaluateError::NonPositiveDimension { field, value });
            }
        }
        for (field, value) in [
            ("front", setbacks.front_m),
            ("side", setbacks.side_m),
            ("rear", setbacks.rear_m),
        ] {
            if !(value > 0.0) {
                return Err(EvaluateError::NonPositiveSetback { field, value });
            }
        }

        let rules = structures::requirements_for(structure);
        if let Some(rule) = resolver::next_unanswered(rules, answers) {
            return Err(EvaluateError::Unanswered { key: rule.key });
        }

        let checks = self.limits.check(structure, property, dimensions, setbacks);
        let failed_requirements = resolver::failed_requirements(rules, answers);

        Ok(Verdict {
            is_exempt: checks.all_pass() && failed_requirements.is_empty(),
            checks,
            failed_requirements,
        })
    }

    /// Evaluate and wrap the verdict in a report envelope for callers
    pub fn assess(
        &self,
        structure: StructureType,
        property: PropertyClass,
        dimensions: Dimensions,
        setbacks: Setbacks,
        answers: &AnswerSet,
    ) -> Result<AssessmentReport, EvaluateError> {
        let verdict = self.evaluate(structure, property, dimensions, setbacks, answers)?;
        Ok(AssessmentReport {
            structure,
            property,
            dimensions,
            setbacks,
            verdict,
            citation: structure.code_citation(),
            checked_at: chrono::Utc::now().timestamp() as u64,
        })
    }
}
