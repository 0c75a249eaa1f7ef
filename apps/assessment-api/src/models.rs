//! Request/response models for the Assessment API

use serde::{Deserialize, Serialize};
use shared_types::{AnswerSet, Dimensions, PropertyClass, Requirement, Setbacks, StructureType};

#[derive(Debug, Serialize)]
pub struct StructureInfo {
    pub id: StructureType,
    pub name: &'static str,
    pub citation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub structure: StructureType,
    pub requirements: &'static [Requirement],
}

#[derive(Debug, Deserialize)]
pub struct ActiveRequirementsRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct ActiveRequirementsResponse {
    pub structure: StructureType,
    /// Rules that currently apply, in presentation order
    pub active: Vec<Requirement>,
    /// The next unanswered question, if the interview is still open
    pub next: Option<Requirement>,
    pub complete: bool,
}

#[derive(Debug, Serialize)]
pub struct PropertyInfo {
    pub id: &'static str,
    pub address: &'static str,
    pub zoning: &'static str,
    pub lot_area_m2: f64,
    pub description: &'static str,
    pub class: PropertyClass,
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub structure: String,
    /// Sample property id; alternative to an explicit `property` class
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub property: Option<PropertyClass>,
    pub dimensions: Dimensions,
    pub setbacks: Setbacks,
    #[serde(default)]
    pub answers: AnswerSet,
}
