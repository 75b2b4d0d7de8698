use tracing::instrument;

use crate::services::client::errors::ApiResult;
use crate::services::client::types::*;
use crate::services::client::ApiClient;

/// Fetch every listed worker. Geofencing happens client-side, on top of
/// this unfiltered list.
#[instrument(skip(client), err)]
pub async fn list_workers_impl(client: &ApiClient) -> ApiResult<Vec<Worker>> {
    let response = client.get("/workers").await?;
    let listing: WorkerListResponse = response.json()?;
    Ok(listing.list)
}

#[instrument(skip(client), err)]
pub async fn worker_detail_impl(client: &ApiClient, worker_id: &str) -> ApiResult<Worker> {
    let response = client.get(&format!("/workers/{}", worker_id)).await?;
    response.json()
}

#[instrument(skip(client), err)]
pub async fn worker_services_impl(
    client: &ApiClient,
    worker_id: &str,
) -> ApiResult<Vec<ServiceOffering>> {
    let response = client
        .get(&format!("/workers/{}/services", worker_id))
        .await?;
    let listing: ServiceListResponse = response.json()?;
    Ok(listing.list)
}
