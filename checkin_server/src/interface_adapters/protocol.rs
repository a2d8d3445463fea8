use serde::{Deserialize, Serialize};

use crate::domain::entities::{Coordinate, PermissionStatus};

// Request payload for token issuance. Manual coordinates are raw form text.
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    pub title: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    // What the issuing device reported for its location permission and fix.
    #[serde(default)]
    pub location_permission: PermissionStatus,
    #[serde(default)]
    pub device_location: Option<Coordinate>,
}

// Response payload for token issuance.
#[derive(Debug, Serialize)]
pub struct IssueTokenResponse {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    // Text to encode in the QR code.
    pub payload: String,
    pub qr_svg: String,
}

// Request payload for a scan verification.
#[derive(Debug, Deserialize)]
pub struct VerifyScanRequest {
    pub payload: String,
    #[serde(default)]
    pub camera_permission: PermissionStatus,
    #[serde(default)]
    pub location_permission: PermissionStatus,
    #[serde(default)]
    pub device_location: Option<Coordinate>,
}

// Response payload for a scan verification.
#[derive(Debug, Serialize)]
pub struct VerifyScanResponse {
    pub verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    pub message: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
