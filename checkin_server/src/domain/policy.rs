use crate::domain::entities::Verdict;

// Default check-in radius around the bound coordinate.
pub const THRESHOLD_METERS: f64 = 50.0;

// Classify a measured distance. The threshold itself is inside the fence.
pub fn classify(distance_m: f64, threshold_m: f64) -> Verdict {
    if distance_m <= threshold_m {
        Verdict::Valid { distance_m }
    } else {
        Verdict::TooFar { distance_m }
    }
}

// Round half away from zero to two decimals for display.
pub fn round_to_centimeters(distance_m: f64) -> f64 {
    (distance_m * 100.0).round() / 100.0
}

// User-facing line for a verdict.
pub fn verdict_message(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid { distance_m } => {
            format!("Valid scan ({:.2} m)", round_to_centimeters(*distance_m))
        }
        Verdict::TooFar { distance_m } => {
            format!("Too far ({:.2} m)", round_to_centimeters(*distance_m))
        }
        Verdict::Malformed => "Invalid QR code or malformed data.".to_string(),
    }
}
