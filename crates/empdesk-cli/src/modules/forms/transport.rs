use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use tracing::debug;

use empdesk_core::{HttpMethod, HttpReply, OutboundRequest, Transport, TransportError};

pub(crate) struct ReqwestTransport<'a> {
    client: &'a reqwest::Client,
}

impl<'a> ReqwestTransport<'a> {
    pub(crate) fn new(client: &'a reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport<'_> {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, TransportError> {
        let mut builder = self.client.request(to_method(request.method), &request.url);
        if let Some(authorization) = &request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        debug!(method = %request.method, url = %request.url, "http request");
        let response = builder.send().await.map_err(|err| {
            if err.is_connect() {
                TransportError::Connect(err.to_string())
            } else {
                TransportError::Request(err.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;
        Ok(HttpReply { status, body })
    }
}
