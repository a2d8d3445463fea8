use crate::domain::entities::{CheckinToken, Coordinate, PermissionKind, TokenRecord};
use crate::domain::errors::CheckinError;
use crate::domain::ports::{IdGenerator, LocationService, TokenStore};

// Input accepted by the issuance use case. Coordinates arrive as raw text.
#[derive(Debug, Clone, Default)]
pub struct IssueTokenInput {
    pub title: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

// Response returned by the issuance use case.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: CheckinToken,
    pub title: String,
}

// Token issuance use case with injected dependencies.
pub struct IssueTokenUseCase<L, S, G> {
    pub location: L,
    pub store: S,
    pub ids: G,
}

impl<L, S, G> IssueTokenUseCase<L, S, G>
where
    L: LocationService,
    S: TokenStore,
    G: IdGenerator,
{
    pub async fn execute(&self, request: IssueTokenInput) -> Result<IssuedToken, CheckinError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(CheckinError::TitleRequired);
        }

        let location = match manual_coordinate(
            request.latitude.as_deref(),
            request.longitude.as_deref(),
        ) {
            Some(coordinate) => coordinate,
            None => self.device_coordinate().await?,
        };

        let id = self.ids.new_id();
        let record = TokenRecord {
            id: id.clone(),
            title: title.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
        };

        self.store
            .insert(record)
            .await
            .map_err(CheckinError::StoreFailure)?;

        Ok(IssuedToken {
            token: CheckinToken { id, location },
            title: title.to_string(),
        })
    }

    async fn device_coordinate(&self) -> Result<Coordinate, CheckinError> {
        if !self.location.request_permission().await.is_granted() {
            return Err(CheckinError::PermissionDenied(PermissionKind::Location));
        }

        self.location
            .current_coordinate()
            .await
            .map_err(|_| CheckinError::LocationUnavailable)
    }
}

// Both fields must parse as finite decimals, otherwise the device is asked.
fn manual_coordinate(latitude: Option<&str>, longitude: Option<&str>) -> Option<Coordinate> {
    let latitude = parse_degrees(latitude?)?;
    let longitude = parse_degrees(longitude?)?;
    Some(Coordinate::new(latitude, longitude))
}

fn parse_degrees(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
}
