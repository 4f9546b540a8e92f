use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use tracing::debug;

use crate::modules::system::CommandContext;

/// Sends an authenticated request to the backend.
pub(crate) async fn send_request(
    ctx: &CommandContext<'_>,
    method: Method,
    url: String,
    payload: Option<serde_json::Value>,
) -> anyhow::Result<reqwest::Response> {
    let method_clone = method.clone();
    let builder = ctx
        .client
        .request(method, &url)
        .header(AUTHORIZATION, ctx.credentials.header_value());
    let builder = if let Some(payload) = payload {
        builder.json(&payload)
    } else {
        builder
    };
    debug!(method = %method_clone, url = %url, "http request");
    let start = std::time::Instant::now();
    let response = builder.send().await.map_err(|err| {
        anyhow::anyhow!("request to {url} failed: {err}; check that the server is running")
    })?;
    debug!(
        method = %method_clone,
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    Ok(response)
}

pub(crate) async fn print_json_response(response: reqwest::Response) -> anyhow::Result<()> {
    let body = ensure_success(response).await?.json::<serde_json::Value>().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub(crate) async fn print_empty_response(
    response: reqwest::Response,
    message: &str,
) -> anyhow::Result<()> {
    ensure_success(response).await?;
    println!("{message}");
    Ok(())
}

/// Turns a non-2xx response into an error carrying the server's message.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> anyhow::Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .map(|value| empdesk_core::ErrorBody::from_value(&value).banner_message(&body))
        .unwrap_or(body);
    anyhow::bail!("Request failed: {status} {message}");
}

pub(crate) fn api_url(ctx: &CommandContext<'_>, path: &str) -> String {
    empdesk_core::join_url(&ctx.addr, path)
}
