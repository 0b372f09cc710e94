//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Body of `GET /api/health/detailed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub store: StoreStatus,
}

/// Connectivity of the configured store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatus {
    pub provider: String,
    pub connected: bool,
}
