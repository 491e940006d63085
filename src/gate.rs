//! Optimizability gate.
//!
//! Cheap checks the UI runs before offering "optimize this day": is there
//! anything to reorder, and roughly how much would it save? Only a single
//! nearest-neighbor pass is used, never the full 2-opt search.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::haversine::HaversineMatrix;
use crate::nearest::{nearest_neighbor, order_distance};
use crate::stop::{Coordinates, Stop};
use crate::traits::DistanceMatrixProvider;

/// Tuning knobs for the gate. Defaults are calibration choices, not a contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateThresholds {
    /// Fewer stops than this are never worth optimizing.
    pub min_stops: usize,
    /// Relative savings below this mean the input is already efficient.
    pub efficient_ratio: f64,
    /// Savings above this (with enough stops) earn `Confidence::High`.
    pub high_confidence_ratio: f64,
    /// Savings at or above this earn at least `Confidence::Medium`.
    pub medium_confidence_ratio: f64,
    pub high_confidence_min_stops: usize,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            min_stops: 3,
            efficient_ratio: 0.10,
            high_confidence_ratio: 0.20,
            medium_confidence_ratio: 0.05,
            high_confidence_min_stops: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Ballpark savings from a greedy reorder, without committing to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEstimate {
    /// Kilometers.
    pub potential_savings: f64,
    /// 0..=100.
    pub percent_savings: f64,
    pub confidence: Confidence,
}

/// Whether running the optimizer on `stops` is likely to pay off.
pub fn should_optimize(stops: &[Stop]) -> bool {
    should_optimize_with(stops, &GateThresholds::default())
}

pub fn should_optimize_with(stops: &[Stop], thresholds: &GateThresholds) -> bool {
    if stops.len() < thresholds.min_stops.max(2) {
        debug!(stops = stops.len(), "too few stops to optimize");
        return false;
    }

    let (original, greedy) = greedy_comparison(stops);
    let ratio = savings_ratio(original, greedy);
    let worth_it = ratio >= thresholds.efficient_ratio;
    debug!(
        stops = stops.len(),
        original_km = original,
        greedy_km = greedy,
        ratio,
        worth_it,
        "optimizability check"
    );
    worth_it
}

/// Estimates savings from a single nearest-neighbor pass.
pub fn estimate_optimization_savings(stops: &[Stop]) -> SavingsEstimate {
    estimate_optimization_savings_with(stops, &GateThresholds::default())
}

pub fn estimate_optimization_savings_with(
    stops: &[Stop],
    thresholds: &GateThresholds,
) -> SavingsEstimate {
    if stops.len() < 2 {
        return SavingsEstimate {
            potential_savings: 0.0,
            percent_savings: 0.0,
            confidence: Confidence::Low,
        };
    }

    let (original, greedy) = greedy_comparison(stops);
    let ratio = savings_ratio(original, greedy);

    let confidence = if stops.len() >= thresholds.high_confidence_min_stops
        && ratio > thresholds.high_confidence_ratio
    {
        Confidence::High
    } else if ratio >= thresholds.medium_confidence_ratio {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    SavingsEstimate {
        potential_savings: (original - greedy).max(0.0),
        percent_savings: ratio * 100.0,
        confidence,
    }
}

/// (input-order distance, nearest-neighbor distance) in kilometers.
fn greedy_comparison(stops: &[Stop]) -> (f64, f64) {
    let locations: Vec<Coordinates> = stops.iter().map(Stop::coordinates).collect();
    let matrix = HaversineMatrix.matrix_for(&locations);

    let input_order: Vec<usize> = (0..stops.len()).collect();
    let greedy_order = nearest_neighbor(&input_order, &matrix);

    (
        order_distance(&input_order, &matrix),
        order_distance(&greedy_order, &matrix),
    )
}

fn savings_ratio(original: f64, candidate: f64) -> f64 {
    if original > 0.0 {
        ((original - candidate) / original).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, lat: f64, lng: f64) -> Stop {
        Stop::at(id, id, lat, lng).unwrap()
    }

    fn zig_zag() -> Vec<Stop> {
        vec![
            stop("a", 0.0, 0.0),
            stop("b", 0.0, 0.04),
            stop("c", 0.0, 0.01),
            stop("d", 0.0, 0.03),
            stop("e", 0.0, 0.02),
        ]
    }

    #[test]
    fn test_too_few_stops() {
        assert!(!should_optimize(&[]));
        assert!(!should_optimize(&[stop("a", 0.0, 0.0)]));
        assert!(!should_optimize(&[stop("a", 0.0, 0.0), stop("b", 0.0, 0.05)]));
    }

    #[test]
    fn test_zig_zag_is_worth_optimizing() {
        assert!(should_optimize(&zig_zag()));
    }

    #[test]
    fn test_straight_line_is_efficient() {
        let stops = vec![
            stop("a", 0.0, 0.0),
            stop("b", 0.0, 0.01),
            stop("c", 0.0, 0.02),
            stop("d", 0.0, 0.03),
        ];
        assert!(!should_optimize(&stops));
    }

    #[test]
    fn test_coincident_stops_not_worth_optimizing() {
        let stops = vec![stop("a", 1.0, 1.0), stop("b", 1.0, 1.0), stop("c", 1.0, 1.0)];
        assert!(!should_optimize(&stops));
    }

    #[test]
    fn test_estimate_high_confidence() {
        let estimate = estimate_optimization_savings(&zig_zag());
        // Input walks 4+3+2+1 = 10 units, greedy walks 4 units.
        assert_eq!(estimate.confidence, Confidence::High);
        assert!((estimate.percent_savings - 60.0).abs() < 0.01);
        assert!(estimate.potential_savings > 0.0);
    }

    #[test]
    fn test_estimate_few_stops_caps_at_medium() {
        let stops = vec![stop("a", 0.0, 0.0), stop("b", 0.0, 0.02), stop("c", 0.0, 0.01)];
        let estimate = estimate_optimization_savings(&stops);
        assert_eq!(estimate.confidence, Confidence::Medium);
    }

    #[test]
    fn test_estimate_efficient_route_is_low() {
        let stops = vec![stop("a", 0.0, 0.0), stop("b", 0.0, 0.01), stop("c", 0.0, 0.02)];
        let estimate = estimate_optimization_savings(&stops);
        assert_eq!(estimate.confidence, Confidence::Low);
        assert_eq!(estimate.potential_savings, 0.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = GateThresholds {
            efficient_ratio: 0.9,
            ..GateThresholds::default()
        };
        assert!(!should_optimize_with(&zig_zag(), &strict));
    }
}
