use std::{env, net::IpAddr, time::Duration};

use crate::domain::policy::THRESHOLD_METERS;

// Runtime/server settings, read from the environment (.env is loaded first).

pub fn http_port() -> u16 {
    env::var("CHECKIN_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3003)
}

pub fn bind_addr() -> IpAddr {
    env::var("CHECKIN_BIND_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

// Unset means tokens are kept in memory only.
pub fn token_store_url() -> Option<String> {
    env::var("TOKEN_STORE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn token_store_api_key() -> Option<String> {
    env::var("TOKEN_STORE_API_KEY")
        .ok()
        .filter(|value| !value.is_empty())
}

pub fn token_store_table() -> String {
    env::var("TOKEN_STORE_TABLE").unwrap_or_else(|_| "qrcodes".to_string())
}

pub fn token_store_timeout() -> Duration {
    let millis = env::var("TOKEN_STORE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

pub fn checkin_radius_meters() -> f64 {
    parse_radius(env::var("CHECKIN_RADIUS_METERS").ok().as_deref())
}

fn parse_radius(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|radius| radius.is_finite() && *radius >= 0.0)
        .unwrap_or(THRESHOLD_METERS)
}
