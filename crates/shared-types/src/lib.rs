pub mod types;

pub use types::{
    Answer, AnswerSet, AssessmentReport, Dependency, DimensionalChecks, Dimensions, Expected,
    LotSize, PropertyClass, Requirement, Setbacks, StructureType, Verdict, Zone,
};
