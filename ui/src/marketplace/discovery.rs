use crate::services::client::{ApiClient, ApiResult, Worker};
use crate::utils::geo::{is_within_service_radius, GeoPoint};

/// Fetch all listed workers and keep the approved ones within service range
/// of the user.
pub async fn nearby_workers(client: &ApiClient, location: GeoPoint) -> ApiResult<Vec<Worker>> {
    let workers = client.list_workers().await?;
    Ok(filter_nearby(workers, location))
}

/// Approved workers within the service radius, in listing order.
pub fn filter_nearby(workers: Vec<Worker>, location: GeoPoint) -> Vec<Worker> {
    workers
        .into_iter()
        .filter(|worker| worker.active)
        .filter(|worker| {
            is_within_service_radius(
                location,
                GeoPoint {
                    lat: worker.lat,
                    long: worker.long,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: &str, lat: f64, long: f64, active: bool) -> Worker {
        Worker {
            id: id.to_string(),
            name: format!("worker {}", id),
            service: "plumbing".to_string(),
            lat,
            long,
            active,
            image: None,
            description: None,
        }
    }

    #[test]
    fn test_filter_keeps_active_workers_in_range() {
        let here = GeoPoint {
            lat: 9.9312,
            long: 76.2673,
        };
        let workers = vec![
            worker("near", 9.9412, 76.2673, true),
            worker("inactive", 9.9412, 76.2673, false),
            worker("far", 10.4312, 76.2673, true),
        ];

        let nearby = filter_nearby(workers, here);

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].id, "near");
    }

    #[test]
    fn test_filter_preserves_listing_order() {
        let here = GeoPoint { lat: 0.0, long: 0.0 };
        let workers = vec![
            worker("b", 0.01, 0.0, true),
            worker("a", 0.02, 0.0, true),
        ];

        let nearby = filter_nearby(workers, here);

        let ids: Vec<&str> = nearby.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
