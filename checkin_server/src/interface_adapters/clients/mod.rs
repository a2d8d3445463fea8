// Outbound clients for services this server talks to.

pub mod token_store;

pub use token_store::{HttpTokenStore, StoreClientError};
