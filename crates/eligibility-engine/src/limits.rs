//! Numeric threshold tables and the five dimensional checks
//!
//! Area and height are inclusive maxima; setbacks are inclusive minima.
//! The setback thresholds are deliberately configuration, not constants:
//! the governing code has been read both as zone-dependent (rural 5.0m /
//! urban 0.9m, applied uniformly) and as a flat 6.0m front / 0.9m side-rear
//! split. The zone-dependent reading is the default; deployments can
//! override it without a code change.

use serde::{Deserialize, Serialize};
use shared_types::{
    DimensionalChecks, Dimensions, LotSize, PropertyClass, Setbacks, StructureType, Zone,
};

const PATIO_MAX_AREA_M2: f64 = 25.0;
const SHED_MAX_AREA_M2: f64 = 20.0;
const SHED_RURAL_STANDARD_MAX_AREA_M2: f64 = 50.0;
const CARPORT_SMALL_LOT_MAX_AREA_M2: f64 = 20.0;
const CARPORT_URBAN_STANDARD_MAX_AREA_M2: f64 = 25.0;
const CARPORT_RURAL_STANDARD_MAX_AREA_M2: f64 = 50.0;

/// Maximum floor area for a structure on a given class of property
pub fn max_area_m2(structure: StructureType, property: PropertyClass) -> f64 {
    match structure {
        StructureType::Patio => PATIO_MAX_AREA_M2,
        StructureType::Shed => match (property.zone, property.lot_size) {
            (Zone::Rural, LotSize::Standard) => SHED_RURAL_STANDARD_MAX_AREA_M2,
            _ => SHED_MAX_AREA_M2,
        },
        StructureType::Carport => match (property.zone, property.lot_size) {
            (_, LotSize::Small) => CARPORT_SMALL_LOT_MAX_AREA_M2,
            (Zone::Urban, LotSize::Standard) => CARPORT_URBAN_STANDARD_MAX_AREA_M2,
            (Zone::Rural, LotSize::Standard) => CARPORT_RURAL_STANDARD_MAX_AREA_M2,
        },
    }
}

/// Height and setback thresholds, overridable per deployment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum structure height, all categories
    pub max_height_m: f64,
    /// Minimum front/side/rear setback in urban zones
    pub urban_setback_m: f64,
    /// Minimum front/side/rear setback in rural zones
    pub rural_setback_m: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_height_m: 3.0,
            urban_setback_m: 0.9,
            rural_setback_m: 5.0,
        }
    }
}

impl LimitsConfig {
    /// Minimum boundary setback for a zone, applied to front, side, and rear
    pub fn min_setback_m(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Urban => self.urban_setback_m,
            Zone::Rural => self.rural_setback_m,
        }
    }

    /// Run the five numeric checks against the proposed structure
    pub fn check(
        &self,
        structure: StructureType,
        property: PropertyClass,
        dimensions: Dimensions,
        setbacks: Setbacks,
    ) -> DimensionalChecks {
        let min_setback = self.min_setback_m(property.zone);
        DimensionalChecks {
            area: dimensions.area_m2() <= max_area_m2(structure, property),
            height: dimensions.height_m <= self.max_height_m,
            front: setbacks.front_m >= min_setback,
            side: setbacks.side_m >= min_setback,
            rear: setbacks.rear_m >= min_setback,
        }
    }
}
