use crate::domain::entities::{PermissionKind, PermissionStatus, Verdict};
use crate::domain::errors::CheckinError;
use crate::domain::geo::distance_meters;
use crate::domain::payload::decode_payload;
use crate::domain::policy::classify;
use crate::domain::ports::LocationService;

// Result of one accepted scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub token_id: Option<String>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    PermissionPending,
    PermissionDenied(PermissionKind),
    AwaitingScan,
    Scanning,
    Scanned(ScanReport),
    LocationFailed,
}

// What happened to a scan event handed to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    // The session was not armed; the event was dropped.
    Ignored,
    Completed(ScanReport),
    Failed(CheckinError),
}

// One verifier screen: accepts a single scan per arming.
#[derive(Debug)]
pub struct VerificationSession {
    state: SessionState,
    threshold_m: f64,
}

impl VerificationSession {
    pub fn new(threshold_m: f64) -> Self {
        Self {
            state: SessionState::PermissionPending,
            threshold_m,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // Gate on both grants. A denial stays for the lifetime of the session.
    pub fn start(
        &mut self,
        camera: PermissionStatus,
        location: PermissionStatus,
    ) -> Result<(), CheckinError> {
        if self.state != SessionState::PermissionPending {
            return match &self.state {
                SessionState::PermissionDenied(kind) => Err(CheckinError::PermissionDenied(*kind)),
                _ => Ok(()),
            };
        }

        let denied = if !camera.is_granted() {
            Some(PermissionKind::Camera)
        } else if !location.is_granted() {
            Some(PermissionKind::Location)
        } else {
            None
        };

        match denied {
            Some(kind) => {
                self.state = SessionState::PermissionDenied(kind);
                Err(CheckinError::PermissionDenied(kind))
            }
            None => {
                self.state = SessionState::AwaitingScan;
                Ok(())
            }
        }
    }

    // Decode, then locate, then measure. A malformed payload never reaches
    // the location service.
    pub async fn handle_scan<L>(&mut self, raw: &str, location: &L) -> ScanEvent
    where
        L: LocationService + ?Sized,
    {
        if self.state != SessionState::AwaitingScan {
            tracing::debug!(state = ?self.state, "scan ignored");
            return ScanEvent::Ignored;
        }
        self.state = SessionState::Scanning;

        let payload = match decode_payload(raw) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(reason = %err, "malformed scan payload");
                let report = ScanReport {
                    token_id: None,
                    verdict: Verdict::Malformed,
                };
                self.state = SessionState::Scanned(report.clone());
                return ScanEvent::Completed(report);
            }
        };

        let device = match location.current_coordinate().await {
            Ok(coordinate) => coordinate,
            Err(_) => {
                self.state = SessionState::LocationFailed;
                return ScanEvent::Failed(CheckinError::LocationUnavailable);
            }
        };

        let distance_m = distance_meters(payload.coordinate(), device);
        let report = ScanReport {
            token_id: payload.id,
            verdict: classify(distance_m, self.threshold_m),
        };
        self.state = SessionState::Scanned(report.clone());
        ScanEvent::Completed(report)
    }

    // Re-arm after a verdict or a failed fix. Returns false when there was
    // nothing to reset.
    pub fn reset(&mut self) -> bool {
        match self.state {
            SessionState::Scanned(_) | SessionState::LocationFailed => {
                self.state = SessionState::AwaitingScan;
                true
            }
            _ => false,
        }
    }
}
