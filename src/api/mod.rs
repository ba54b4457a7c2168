mod client;
mod types;

pub use client::{ApiClient, HttpApiClient};
pub use types::{HttpMethod, ProbeRequest, ProbeResponse, RequestBody};
