use crate::config::ApiConfig;
use anyhow::{Context, Result};
use crux_http::{
    HttpError,
    protocol::{HttpRequest, HttpResponse, HttpResult},
};
use log::debug;
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::{Client, Method};
use trait_variant::make;

/// Executes the core's HTTP effects
#[make(Send)]
#[cfg_attr(feature = "mock", automock)]
pub trait ApiTransport {
    async fn send(&self, request: HttpRequest) -> HttpResult;
}

/// Sends requests to the remote CRUD API
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    api: ApiConfig,
}

impl ReqwestTransport {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client, api })
    }

    async fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, HttpError> {
        let url = self
            .api
            .resolve(&request.url)
            .map_err(|e| HttpError::Url(format!("{e:#}")))?;
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| HttpError::Url(format!("invalid method {}: {e}", request.method)))?;

        debug!("{method} {url}");

        let mut builder = self.client.request(method, url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::Io(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Io(e.to_string()))?;

        Ok(HttpResponse::status(status).body(body.to_vec()).build())
    }
}

impl ApiTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> HttpResult {
        match self.execute(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => HttpResult::Err(e),
        }
    }
}
