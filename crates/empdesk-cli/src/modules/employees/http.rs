use reqwest::Method;

use empdesk_core::{paths, EmployeeResponse};

use crate::modules::system::http::{api_url, ensure_success, send_request};
use crate::modules::system::CommandContext;

pub(crate) async fn list_employees(
    ctx: &CommandContext<'_>,
) -> anyhow::Result<Vec<EmployeeResponse>> {
    let url = api_url(ctx, paths::EMPLOYEES);
    let response = ensure_success(send_request(ctx, Method::GET, url, None).await?).await?;
    Ok(response.json::<Vec<EmployeeResponse>>().await?)
}

pub(crate) async fn get_employee(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<EmployeeResponse> {
    let url = api_url(ctx, &format!("{}/{id}", paths::EMPLOYEES));
    let response = ensure_success(send_request(ctx, Method::GET, url, None).await?).await?;
    Ok(response.json::<EmployeeResponse>().await?)
}

pub(crate) async fn delete_employee(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = api_url(ctx, &format!("{}/{id}", paths::EMPLOYEES));
    send_request(ctx, Method::DELETE, url, None).await
}
