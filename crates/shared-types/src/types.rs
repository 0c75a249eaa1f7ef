use serde::{Deserialize, Serialize};

/// Structure categories covered by the exempt development codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureType {
    Shed,
    Patio,
    Carport,
}

impl StructureType {
    /// Display name shown to applicants
    pub fn name(&self) -> &'static str {
        match self {
            StructureType::Shed => "Shed",
            StructureType::Patio => "Patio/Pergola",
            StructureType::Carport => "Carport",
        }
    }

    /// Governing clause of the exempt development codes
    pub fn code_citation(&self) -> &'static str {
        match self {
            StructureType::Shed => {
                "SEPP (Exempt and Complying Development Codes) 2008 - Schedule 2, Part 1, Division 1A"
            }
            StructureType::Patio => {
                "SEPP (Exempt and Complying Development Codes) 2008 - Schedule 2, Part 1, Division 1B"
            }
            StructureType::Carport => {
                "SEPP (Exempt and Complying Development Codes) 2008 - Schedule 2, Part 1, Division 1C"
            }
        }
    }

    /// Parse from a structure code or common name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shed" => Some(StructureType::Shed),
            "patio" | "pergola" | "verandah" => Some(StructureType::Patio),
            "carport" => Some(StructureType::Carport),
            _ => None,
        }
    }

    /// All assessable structure types, in presentation order
    pub fn all() -> [Self; 3] {
        [
            StructureType::Shed,
            StructureType::Patio,
            StructureType::Carport,
        ]
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Residential zone family a property sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Urban,
    Rural,
}

/// Lot size band used by the area and setback thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotSize {
    Small,
    Standard,
}

/// Planning attributes of the property being built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyClass {
    pub zone: Zone,
    pub lot_size: LotSize,
}

impl PropertyClass {
    pub fn new(zone: Zone, lot_size: LotSize) -> Self {
        Self { zone, lot_size }
    }
}

/// Proposed structure dimensions, in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

impl Dimensions {
    pub fn new(length_m: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            length_m,
            width_m,
            height_m,
        }
    }

    /// Floor area in square metres
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// Distances from the structure to each property boundary, in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setbacks {
    pub front_m: f64,
    pub side_m: f64,
    pub rear_m: f64,
}

impl Setbacks {
    pub fn new(front_m: f64, side_m: f64, rear_m: f64) -> Self {
        Self {
            front_m,
            side_m,
            rear_m,
        }
    }
}

/// What answer a requirement must receive to stay eligible
///
/// `Gate` requirements are informational only: their answer is never scored,
/// it only controls whether dependent requirements apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expected {
    Yes,
    No,
    Gate,
}

/// Link from a requirement to the earlier gate that activates it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub key: &'static str,
    /// The requirement applies only when the gate was answered with this value
    pub activate_on: bool,
}

/// One yes/no eligibility requirement within a structure's rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub key: &'static str,
    pub label: &'static str,
    pub expected: Expected,
    pub depends_on: Option<Dependency>,
}

/// A recorded answer to one requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub key: String,
    pub value: bool,
}

/// Answers collected so far, in the order they were given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value)
    }

    /// Record an answer, replacing any previous answer to the same key
    pub fn record(&mut self, key: impl Into<String>, value: bool) {
        let key = key.into();
        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Answer { key, value }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(&'static str, bool)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (&'static str, bool)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (key, value) in iter {
            answers.record(key, value);
        }
        answers
    }
}

/// Outcome of the five numeric threshold checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionalChecks {
    pub area: bool,
    pub height: bool,
    pub front: bool,
    pub side: bool,
    pub rear: bool,
}

impl DimensionalChecks {
    pub fn all_pass(&self) -> bool {
        self.area && self.height && self.front && self.side && self.rear
    }
}

/// Aggregate eligibility determination with itemized detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub is_exempt: bool,
    pub checks: DimensionalChecks,
    /// Active requirements whose answer did not match the expected one,
    /// in rule-table order
    pub failed_requirements: Vec<Requirement>,
}

/// Verdict plus the inputs it was computed from and the governing citation
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub structure: StructureType,
    pub property: PropertyClass,
    pub dimensions: Dimensions,
    pub setbacks: Setbacks,
    pub verdict: Verdict,
    pub citation: &'static str,
    pub checked_at: u64,
}
