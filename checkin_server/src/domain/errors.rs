use std::fmt;

use crate::domain::entities::PermissionKind;

// Domain-level errors for issuance and verification workflows.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckinError {
    TitleRequired,
    PermissionDenied(PermissionKind),
    LocationUnavailable,
    StoreFailure(String),
}

impl fmt::Display for CheckinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckinError::TitleRequired => write!(f, "title is required"),
            CheckinError::PermissionDenied(PermissionKind::Camera) => {
                write!(f, "camera permission denied")
            }
            CheckinError::PermissionDenied(PermissionKind::Location) => {
                write!(f, "location permission denied")
            }
            CheckinError::LocationUnavailable => write!(f, "location unavailable"),
            CheckinError::StoreFailure(reason) => write!(f, "token store error: {reason}"),
        }
    }
}

impl std::error::Error for CheckinError {}

// Scanned text could not be read as a check-in payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedPayload {
    NotJson,
    NotAnObject,
    MissingField(&'static str),
    NotNumeric(&'static str),
}

impl fmt::Display for MalformedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPayload::NotJson => write!(f, "payload is not valid json"),
            MalformedPayload::NotAnObject => write!(f, "payload is not a json object"),
            MalformedPayload::MissingField(field) => write!(f, "payload is missing `{field}`"),
            MalformedPayload::NotNumeric(field) => write!(f, "payload `{field}` is not a number"),
        }
    }
}

impl std::error::Error for MalformedPayload {}

// Location service could not produce a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationUnavailable;

impl fmt::Display for LocationUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "current location unavailable")
    }
}

impl std::error::Error for LocationUnavailable {}
