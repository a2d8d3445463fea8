// Domain layer: check-in entities, geometry and the acceptance policy.

pub mod entities;
pub mod errors;
pub mod geo;
pub mod payload;
pub mod policy;
pub mod ports;

pub use entities::{
    CheckinToken, Coordinate, PermissionKind, PermissionStatus, ScanPayload, TokenRecord, Verdict,
};
pub use errors::{CheckinError, LocationUnavailable, MalformedPayload};
pub use ports::{IdGenerator, LocationService, TokenStore};
