// src/dtos/response.rs
use serde::Deserialize;

/// Success body of GET/POST/PUT: the resource lives under `data`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Status and message pair the server attaches to error bodies and DELETE
/// responses. Update responses can carry `success: false` under a 2xx
/// status, so this is checked before the data envelope.
#[derive(Debug, Default, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}
