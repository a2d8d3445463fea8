// Interface adapters: HTTP protocol, handlers, and concrete port implementations.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod qr;
pub mod routes;
pub mod state;
