//! Sample property lookup
//!
//! Fixed demonstration lots standing in for a cadastre integration. The
//! engine only ever sees the derived `PropertyClass`; the zoning-code and
//! lot-area classification below is presentation-layer glue.

use shared_types::{LotSize, PropertyClass, Zone};

/// Lots at or under this area count as small for the threshold tables
const SMALL_LOT_MAX_AREA_M2: f64 = 450.0;

#[derive(Debug, Clone, Copy)]
pub struct SampleProperty {
    pub id: &'static str,
    pub address: &'static str,
    pub zoning: &'static str,
    pub lot_area_m2: f64,
    pub description: &'static str,
}

impl SampleProperty {
    /// Planning class derived from the zoning code and lot area
    pub fn class(&self) -> PropertyClass {
        let zone = if self.zoning.starts_with("RU") || self.zoning.starts_with("R5") {
            Zone::Rural
        } else {
            Zone::Urban
        };
        let lot_size = if self.lot_area_m2 <= SMALL_LOT_MAX_AREA_M2 {
            LotSize::Small
        } else {
            LotSize::Standard
        };
        PropertyClass::new(zone, lot_size)
    }
}

pub const SAMPLE_PROPERTIES: &[SampleProperty] = &[
    SampleProperty {
        id: "1",
        address: "Urban Lot - Small (300m²)",
        zoning: "R1 General Residential",
        lot_area_m2: 300.0,
        description: "Typical inner-city residential lot",
    },
    SampleProperty {
        id: "2",
        address: "Urban Lot - Medium (500m²)",
        zoning: "R2 Low Density Residential",
        lot_area_m2: 500.0,
        description: "Standard suburban residential lot",
    },
    SampleProperty {
        id: "3",
        address: "Urban Lot - Large (800m²)",
        zoning: "R2 Low Density Residential",
        lot_area_m2: 800.0,
        description: "Large suburban residential lot",
    },
    SampleProperty {
        id: "4",
        address: "Rural Block - Small (1200m²)",
        zoning: "R5 Large Lot Residential",
        lot_area_m2: 1200.0,
        description: "Small rural residential block",
    },
    SampleProperty {
        id: "5",
        address: "Rural Block - Med (2000m²)",
        zoning: "RU5 Village",
        lot_area_m2: 2000.0,
        description: "Medium rural residential block",
    },
    SampleProperty {
        id: "6",
        address: "Rural Block - Large (5000m²)",
        zoning: "RU1 Primary Production",
        lot_area_m2: 5000.0,
        description: "Large rural residential block",
    },
    SampleProperty {
        id: "7",
        address: "Urban Corner Lot (600m²)",
        zoning: "R2 Low Density Residential",
        lot_area_m2: 600.0,
        description: "Corner lot in suburban area",
    },
    SampleProperty {
        id: "8",
        address: "Urban Compact (250m²)",
        zoning: "R3 Medium Density Residential",
        lot_area_m2: 250.0,
        description: "Compact urban dwelling lot",
    },
    SampleProperty {
        id: "9",
        address: "Rural Acreage (1 hectare)",
        zoning: "RU1 Primary Production",
        lot_area_m2: 10_000.0,
        description: "Small acreage property",
    },
    SampleProperty {
        id: "10",
        address: "Urban Duplex Site (400m²)",
        zoning: "R3 Medium Density Residential",
        lot_area_m2: 400.0,
        description: "Duplex development site",
    },
    SampleProperty {
        id: "11",
        address: "Rural Farmlet (2 hectares)",
        zoning: "RU1 Primary Production",
        lot_area_m2: 20_000.0,
        description: "Small farming property",
    },
    SampleProperty {
        id: "12",
        address: "Urban Townhouse (350m²)",
        zoning: "R4 High Density Residential",
        lot_area_m2: 350.0,
        description: "Townhouse development lot",
    },
];

pub fn find(id: &str) -> Option<&'static SampleProperty> {
    SAMPLE_PROPERTIES.iter().find(|p| p.id == id)
}
