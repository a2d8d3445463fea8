use serde::{Deserialize, Serialize};

// Geographic point in decimal degrees. Ranges are not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// A token bound to one issuance event. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckinToken {
    pub id: String,
    pub location: Coordinate,
}

impl CheckinToken {
    // Wire form carried inside the scannable code.
    pub fn payload(&self) -> ScanPayload {
        ScanPayload {
            id: Some(self.id.clone()),
            lat: self.location.latitude,
            lon: self.location.longitude,
        }
    }
}

// Row submitted to the remote token store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenRecord {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

// Decoded scan payload. Field names are part of the wire contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScanPayload {
    pub id: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl ScanPayload {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

// Outcome of one verification attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Valid { distance_m: f64 },
    TooFar { distance_m: f64 },
    Malformed,
}

impl Verdict {
    pub fn distance_m(&self) -> Option<f64> {
        match self {
            Verdict::Valid { distance_m } | Verdict::TooFar { distance_m } => Some(*distance_m),
            Verdict::Malformed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Valid { .. } => "valid",
            Verdict::TooFar { .. } => "too_far",
            Verdict::Malformed => "malformed",
        }
    }
}

// Platform permission answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    #[default]
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

// Which capability a permission denial refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionKind {
    Camera,
    Location,
}
