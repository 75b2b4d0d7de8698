use serde_json::json;
use tracing::instrument;

use crate::services::client::errors::ApiResult;
use crate::services::client::types::*;
use crate::services::client::ApiClient;

#[instrument(skip(client, request), err)]
pub async fn create_booking_impl(
    client: &ApiClient,
    request: &BookingRequest,
) -> ApiResult<BookingResponse> {
    let response = client
        .post(
            "/bookings",
            json!({
                "workerId": request.worker_id,
                "serviceId": request.service_id,
                "date": request.date,
                "slot": request.slot,
            }),
        )
        .await?;

    response.json()
}
