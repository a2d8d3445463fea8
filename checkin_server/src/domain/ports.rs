use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Coordinate, PermissionStatus, TokenRecord};
use crate::domain::errors::LocationUnavailable;

// Port for the device location service used by issuance and verification.
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;
    async fn current_coordinate(&self) -> Result<Coordinate, LocationUnavailable>;
}

// Port for the remote record store. Only inserts are needed.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn insert(&self, record: TokenRecord) -> Result<(), String>;
}

// Port for generating token identifiers.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

#[async_trait]
impl<T> LocationService for Arc<T>
where
    T: LocationService + ?Sized,
{
    async fn request_permission(&self) -> PermissionStatus {
        (**self).request_permission().await
    }

    async fn current_coordinate(&self) -> Result<Coordinate, LocationUnavailable> {
        (**self).current_coordinate().await
    }
}

#[async_trait]
impl<T> TokenStore for Arc<T>
where
    T: TokenStore + ?Sized,
{
    async fn insert(&self, record: TokenRecord) -> Result<(), String> {
        (**self).insert(record).await
    }
}
