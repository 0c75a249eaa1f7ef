//! HTTP handlers for the Assessment API

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use shared_types::{AssessmentReport, StructureType};

use crate::error::ApiError;
use crate::models::*;
use crate::properties;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

fn parse_structure(s: &str) -> Result<StructureType, ApiError> {
    StructureType::parse_code(s).ok_or_else(|| ApiError::UnknownStructure(s.to_string()))
}

/// List the assessable structure categories
pub async fn list_structures() -> Json<Vec<StructureInfo>> {
    Json(
        StructureType::all()
            .into_iter()
            .map(|structure| StructureInfo {
                id: structure,
                name: structure.name(),
                citation: structure.code_citation(),
            })
            .collect(),
    )
}

/// Full rule table for a structure category
pub async fn get_requirements(
    State(state): State<Arc<AppState>>,
    Path(structure): Path<String>,
) -> Result<Json<RequirementsResponse>, ApiError> {
    let structure = parse_structure(&structure)?;
    Ok(Json(RequirementsResponse {
        structure,
        requirements: state.engine.requirements(structure),
    }))
}

/// Resolve the rules that apply given the answers so far
///
/// Called after every recorded answer: answering a gate can reveal or hide
/// later questions.
pub async fn active_requirements(
    State(state): State<Arc<AppState>>,
    Path(structure): Path<String>,
    Json(req): Json<ActiveRequirementsRequest>,
) -> Result<Json<ActiveRequirementsResponse>, ApiError> {
    let structure = parse_structure(&structure)?;
    let active = state.engine.active_requirements(structure, &req.answers);
    let next = state.engine.next_requirement(structure, &req.answers);
    Ok(Json(ActiveRequirementsResponse {
        structure,
        complete: next.is_none(),
        active,
        next,
    }))
}

/// List the sample properties
pub async fn list_properties() -> Json<Vec<PropertyInfo>> {
    Json(
        properties::SAMPLE_PROPERTIES
            .iter()
            .map(property_info)
            .collect(),
    )
}

/// Look up one sample property
pub async fn get_property(Path(id): Path<String>) -> Result<Json<PropertyInfo>, ApiError> {
    let property = properties::find(&id).ok_or(ApiError::PropertyNotFound(id))?;
    Ok(Json(property_info(property)))
}

fn property_info(property: &properties::SampleProperty) -> PropertyInfo {
    PropertyInfo {
        id: property.id,
        address: property.address,
        zoning: property.zoning,
        lot_area_m2: property.lot_area_m2,
        description: property.description,
        class: property.class(),
    }
}

/// Run a full exempt-development assessment
pub async fn assess(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssessRequest>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let structure = parse_structure(&req.structure)?;

    let property = match (&req.property_id, req.property) {
        (Some(id), _) => properties::find(id)
            .ok_or_else(|| ApiError::PropertyNotFound(id.clone()))?
            .class(),
        (None, Some(class)) => class,
        (None, None) => {
            return Err(ApiError::InvalidRequest(
                "either property_id or property is required".to_string(),
            ))
        }
    };

    let report = state
        .engine
        .assess(structure, property, req.dimensions, req.setbacks, &req.answers)?;

    tracing::info!(
        structure = %structure,
        exempt = report.verdict.is_exempt,
        "assessment complete"
    );

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structure_accepts_common_names() {
        assert!(parse_structure("shed").is_ok());
        assert!(parse_structure("Pergola").is_ok());
        assert!(matches!(
            parse_structure("gazebo"),
            Err(ApiError::UnknownStructure(_))
        ));
    }
}
