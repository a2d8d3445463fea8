use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{Coordinate, PermissionStatus, TokenRecord};
use crate::domain::errors::LocationUnavailable;
use crate::domain::ports::{IdGenerator, LocationService, TokenStore};

// Calls observed by the fake location service, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LocationCall {
    RequestPermission,
    CurrentCoordinate,
}

#[derive(Clone)]
pub(crate) struct FakeLocation {
    permission: PermissionStatus,
    coordinate: Option<Coordinate>,
    calls: Arc<Mutex<Vec<LocationCall>>>,
}

impl FakeLocation {
    pub(crate) fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            coordinate: Some(Coordinate::new(latitude, longitude)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            coordinate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // Permission granted but no fix available.
    pub(crate) fn without_fix() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            coordinate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<LocationCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl LocationService for FakeLocation {
    async fn request_permission(&self) -> PermissionStatus {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push(LocationCall::RequestPermission);
        self.permission
    }

    async fn current_coordinate(&self) -> Result<Coordinate, LocationUnavailable> {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push(LocationCall::CurrentCoordinate);
        self.coordinate.ok_or(LocationUnavailable)
    }
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    records: Arc<Mutex<Vec<TokenRecord>>>,
    fail_insert: bool,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail_insert: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_insert: true,
            ..Self::new()
        }
    }

    pub(crate) fn records(&self) -> Vec<TokenRecord> {
        self.records.lock().expect("records mutex poisoned").clone()
    }
}

#[async_trait]
impl TokenStore for RecordingStore {
    async fn insert(&self, record: TokenRecord) -> Result<(), String> {
        if self.fail_insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.records.lock().expect("records mutex poisoned");
        guard.push(record);
        Ok(())
    }
}

// Deterministic ids: token-1, token-2, ...
#[derive(Default)]
pub(crate) struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> String {
        let next = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        format!("token-{next}")
    }
}
