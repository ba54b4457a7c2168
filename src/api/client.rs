use super::types::*;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse>;
}

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        // 3xx responses are returned as-is, never followed.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse> {
        let url = self.url_for(&request.path);
        debug!("Sending {} {}", request.method, url);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        req_builder = match &request.body {
            Some(RequestBody::Raw(text)) => req_builder
                .header(CONTENT_TYPE, "application/json")
                .body(text.clone()),
            Some(RequestBody::Json(value)) => req_builder.json(value),
            None => req_builder,
        };

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Received status {} with {} byte body", status, body.len());

        Ok(ProbeResponse { status, body })
    }
}
