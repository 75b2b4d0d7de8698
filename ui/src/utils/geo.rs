//! Great-circle distance and the service-radius predicate used by worker
//! discovery.

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Workers farther than this from the user are not shown.
pub const SERVICE_RADIUS_KM: f64 = 10.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub long: f64,
}

/// Haversine great-circle distance between two points, in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_long = (b.long - a.long).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_long / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

pub fn is_within_radius(user: GeoPoint, worker: GeoPoint, radius_km: f64) -> bool {
    haversine_km(user, worker) <= radius_km
}

/// Whether a worker is close enough to the user to be offered.
pub fn is_within_service_radius(user: GeoPoint, worker: GeoPoint) -> bool {
    is_within_radius(user, worker, SERVICE_RADIUS_KM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_same_point() {
        let p = GeoPoint {
            lat: 9.9312,
            long: 76.2673,
        };
        assert!(haversine_km(p, p) < 1e-9);
    }

    #[test]
    fn test_one_degree_of_longitude_at_the_equator() {
        let a = GeoPoint { lat: 0.0, long: 0.0 };
        let b = GeoPoint { lat: 0.0, long: 1.0 };
        let d = haversine_km(a, b);
        // One degree of longitude at the equator is ~111.2 km
        assert!((d - 111.19).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn test_service_radius_predicate() {
        let user = GeoPoint {
            lat: 9.9312,
            long: 76.2673,
        };
        // ~1.1 km north
        let near = GeoPoint {
            lat: 9.9412,
            long: 76.2673,
        };
        // ~55 km north
        let far = GeoPoint {
            lat: 10.4312,
            long: 76.2673,
        };

        assert!(is_within_service_radius(user, near));
        assert!(!is_within_service_radius(user, far));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let user = GeoPoint { lat: 0.0, long: 0.0 };
        assert!(is_within_radius(user, user, 0.0));
    }
}
