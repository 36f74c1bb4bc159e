use crate::models::{BoundingBox, Location};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Great-circle distance between two locations in kilometers
///
/// Symmetric, and exactly zero for identical points. Coordinates are not
/// validated here; use [`Location::validate`] on untrusted input.
#[inline]
pub fn calculate_distance(a: &Location, b: &Location) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Calculate a bounding box around a center point
///
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude).
/// Used to place simulated candidates around a mission site.
pub fn calculate_bounding_box(center: &Location, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;

    // Clamp the cosine so boxes near the poles stay finite
    let lon_delta = radius_km / (111.0 * center.latitude.to_radians().cos().abs().max(1e-6));

    BoundingBox {
        min_lat: (center.latitude - lat_delta).max(-90.0),
        max_lat: (center.latitude + lat_delta).min(90.0),
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: &Location, bbox: &BoundingBox) -> bool {
    point.latitude >= bbox.min_lat
        && point.latitude <= bbox.max_lat
        && point.longitude >= bbox.min_lon
        && point.longitude <= bbox.max_lon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Ouagadougou to Bobo-Dioulasso (approximately 330 km)
        let ouaga = Location::new(12.3714, -1.5197);
        let bobo = Location::new(11.1771, -4.2979);

        let distance = calculate_distance(&ouaga, &bobo);
        assert!((distance - 330.0).abs() < 15.0, "Distance should be ~330km, got {}", distance);
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let ouaga = Location::new(12.3714, -1.5197);
        assert_eq!(calculate_distance(&ouaga, &ouaga), 0.0);
    }

    #[test]
    fn test_distance_antipodal_is_finite() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(0.0, 180.0);

        let distance = calculate_distance(&a, &b);
        assert!(distance.is_finite());
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }

    #[test]
    fn test_bounding_box() {
        let center = Location::new(12.3714, -1.5197);
        let bbox = calculate_bounding_box(&center, 10.0);

        assert!(bbox.min_lat < center.latitude);
        assert!(bbox.max_lat > center.latitude);
        assert!(bbox.min_lon < center.longitude);
        assert!(bbox.max_lon > center.longitude);

        // 20km / 111km per degree = ~0.18 degrees
        let lat_span = bbox.max_lat - bbox.min_lat;
        assert!((lat_span - 0.18).abs() < 0.02, "Lat span should be ~0.18 degrees");
    }

    #[test]
    fn test_point_within_bbox() {
        let center = Location::new(12.3714, -1.5197);
        let bbox = calculate_bounding_box(&center, 10.0);

        assert!(is_within_bounding_box(&center, &bbox));
        assert!(is_within_bounding_box(&Location::new(12.38, -1.52), &bbox));
        assert!(!is_within_bounding_box(&Location::new(11.1771, -4.2979), &bbox));
    }
}
