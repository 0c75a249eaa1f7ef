//! Error types for the eligibility engine

use shared_types::StructureType;
use thiserror::Error;

/// Configuration errors in a rule table, detected at load time
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("{structure} requirement `{key}` depends on unknown key `{depends_on}`")]
    UnknownDependency {
        structure: StructureType,
        key: &'static str,
        depends_on: &'static str,
    },

    #[error("{structure} requirement `{key}` depends on `{depends_on}`, which is not declared earlier in the table")]
    ForwardDependency {
        structure: StructureType,
        key: &'static str,
        depends_on: &'static str,
    },
}

/// Input problems that prevent an assessment from being computed
///
/// These are reported to the caller instead of evaluating against defaults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluateError {
    #[error("dimension `{field}` must be a positive number of metres (got {value})")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("setback `{field}` must be a positive number of metres (got {value})")]
    NonPositiveSetback { field: &'static str, value: f64 },

    #[error("active requirement `{key}` has not been answered")]
    Unanswered { key: &'static str },
}

/// Out-of-turn transitions in the interview flow
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterviewError {
    #[error("the interview is not currently waiting on a requirement answer")]
    NoPendingRequirement,

    #[error("the interview is not complete")]
    NotComplete,

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}
