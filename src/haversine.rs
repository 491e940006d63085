//! Distance engine: great-circle distance and walking-time estimates.
//!
//! Straight-line distance only. Roads, traffic and transit are ignored, which
//! is good enough to compare visiting orders within a single day.

use crate::stop::Coordinates;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average pedestrian pace used for every time estimate.
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// One-way distance along an ordered list of points (no return leg).
///
/// Zero for fewer than two points.
pub fn route_distance(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_km(pair[0], pair[1]))
        .sum()
}

/// Walking minutes for a distance at [`WALKING_SPEED_KMH`].
pub fn estimate_walking_time(distance_km: f64) -> f64 {
    distance_km / WALKING_SPEED_KMH * 60.0
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinates]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in i + 1..n {
                let km = haversine_km(locations[i], locations[j]);
                matrix[i][j] = km;
                matrix[j][i] = km;
            }
        }

        matrix
    }
}
