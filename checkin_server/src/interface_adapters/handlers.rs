use crate::domain::entities::PermissionKind;
use crate::domain::errors::CheckinError;
use crate::domain::payload::encode_payload;
use crate::domain::policy::verdict_message;
use crate::interface_adapters::protocol::{
    ErrorResponse, IssueTokenRequest, IssueTokenResponse, VerifyScanRequest, VerifyScanResponse,
};
use crate::interface_adapters::qr::render_svg;
use crate::interface_adapters::state::{AppState, ReportedLocation, UuidGenerator};
use crate::use_cases::issue_token::{IssueTokenInput, IssueTokenUseCase};
use crate::use_cases::verify_scan::{ScanEvent, VerificationSession};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

// Handler for issuing a location-bound token.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<IssueTokenRequest>,
) -> Result<(StatusCode, Json<IssueTokenResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = IssueTokenUseCase {
        location: ReportedLocation {
            permission: payload.location_permission,
            coordinate: payload.device_location,
        },
        store: state.store.clone(),
        ids: UuidGenerator,
    };

    let issued = use_case
        .execute(IssueTokenInput {
            title: payload.title,
            latitude: payload.latitude,
            longitude: payload.longitude,
        })
        .await
        .map_err(|err| {
            warn!(error = %err, "token issuance failed");
            map_checkin_error(err)
        })?;

    let wire = encode_payload(&issued.token.payload());
    let qr_svg = render_svg(&wire).map_err(|err| {
        warn!(token_id = %issued.token.id, error = %err, "qr rendering failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "qr rendering failed")
    })?;

    info!(
        token_id = %issued.token.id,
        latitude = issued.token.location.latitude,
        longitude = issued.token.location.longitude,
        "token issued"
    );

    Ok((
        StatusCode::CREATED,
        Json(IssueTokenResponse {
            id: issued.token.id,
            title: issued.title,
            latitude: issued.token.location.latitude,
            longitude: issued.token.location.longitude,
            payload: wire,
            qr_svg,
        }),
    ))
}

// Handler for verifying one scanned payload against the reporting device.
pub async fn verify_scan(
    State(state): State<AppState>,
    Json(payload): Json<VerifyScanRequest>,
) -> Result<Json<VerifyScanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let location = ReportedLocation {
        permission: payload.location_permission,
        coordinate: payload.device_location,
    };

    let mut session = VerificationSession::new(state.threshold_m);
    session
        .start(payload.camera_permission, payload.location_permission)
        .map_err(map_checkin_error)?;

    match session.handle_scan(&payload.payload, &location).await {
        ScanEvent::Completed(report) => {
            info!(
                token_id = report.token_id.as_deref().unwrap_or("-"),
                verdict = report.verdict.label(),
                distance_m = report.verdict.distance_m(),
                "scan verified"
            );
            Ok(Json(VerifyScanResponse {
                verdict: report.verdict.label(),
                distance_m: report.verdict.distance_m(),
                token_id: report.token_id,
                message: verdict_message(&report.verdict),
            }))
        }
        ScanEvent::Failed(err) => Err(map_checkin_error(err)),
        // A fresh session is always armed after start().
        ScanEvent::Ignored => Err(error_response(
            StatusCode::CONFLICT,
            "scan session not ready",
        )),
    }
}

// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_checkin_error(err: CheckinError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        CheckinError::TitleRequired => error_response(StatusCode::BAD_REQUEST, "title is required"),
        CheckinError::PermissionDenied(PermissionKind::Camera) => {
            error_response(StatusCode::FORBIDDEN, "camera permission denied")
        }
        CheckinError::PermissionDenied(PermissionKind::Location) => {
            error_response(StatusCode::FORBIDDEN, "location permission denied")
        }
        CheckinError::LocationUnavailable => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, "location unavailable")
        }
        CheckinError::StoreFailure(_) => error_response(StatusCode::BAD_GATEWAY, "token store error"),
    }
}
