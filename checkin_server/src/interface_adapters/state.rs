use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::{Coordinate, PermissionStatus, TokenRecord};
use crate::domain::errors::LocationUnavailable;
use crate::domain::ports::{IdGenerator, LocationService, TokenStore};

// Application state shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // Any store backend can be plugged in (in-memory or remote).
    pub store: Arc<dyn TokenStore>,
    pub threshold_m: f64,
}

// In-memory token store adapter used when no remote store is configured.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    pub records: Arc<Mutex<HashMap<String, TokenRecord>>>,
}

impl InMemoryTokenStore {
    pub async fn get(&self, id: &str) -> Option<TokenRecord> {
        self.records.lock().await.get(id).cloned()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn insert(&self, record: TokenRecord) -> Result<(), String> {
        let mut records = self.records.lock().await;
        if records.contains_key(&record.id) {
            return Err(format!("duplicate token id {}", record.id));
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }
}

// Random v4 ids for issued tokens.
#[derive(Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// Location service backed by what the calling device reported in its request.
#[derive(Clone, Copy, Debug)]
pub struct ReportedLocation {
    pub permission: PermissionStatus,
    pub coordinate: Option<Coordinate>,
}

#[async_trait]
impl LocationService for ReportedLocation {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_coordinate(&self) -> Result<Coordinate, LocationUnavailable> {
        if !self.permission.is_granted() {
            return Err(LocationUnavailable);
        }
        self.coordinate.ok_or(LocationUnavailable)
    }
}
