//! Routes and optimization results handed back to the caller.

use serde::{Deserialize, Serialize};

use crate::format::{format_distance, format_duration};
use crate::haversine::estimate_walking_time;
use crate::stop::Stop;

/// An ordered visit sequence for one day plus its one-way distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Stop ids in visiting order.
    pub order: Vec<String>,
    /// The stops themselves, in `order` sequence.
    pub stops: Vec<Stop>,
    /// Kilometers, start to end, no return leg.
    pub total_distance: f64,
}

impl Route {
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            stops: Vec::new(),
            total_distance: 0.0,
        }
    }

    pub(crate) fn from_stops(stops: Vec<Stop>, total_distance: f64) -> Self {
        let order = stops.iter().map(|stop| stop.id().to_string()).collect();
        Self {
            order,
            stops,
            total_distance,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn estimated_walking_minutes(&self) -> f64 {
        estimate_walking_time(self.total_distance)
    }
}

/// What the optimized order buys over the original one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    /// Kilometers, never negative.
    pub distance_saved: f64,
    /// Walking minutes, never negative.
    pub time_saved: f64,
    /// 0..=100.
    pub percent_improvement: f64,
}

impl Improvement {
    pub fn between(original_km: f64, optimized_km: f64) -> Self {
        let distance_saved = (original_km - optimized_km).max(0.0);
        let percent_improvement = if original_km > 0.0 {
            (distance_saved / original_km * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            distance_saved,
            time_saved: estimate_walking_time(distance_saved),
            percent_improvement,
        }
    }

    /// e.g. `"Saves 1.2 km (15 min, 23%)"`.
    pub fn summary(&self) -> String {
        format!(
            "Saves {} ({}, {:.0}%)",
            format_distance(self.distance_saved),
            format_duration(self.time_saved),
            self.percent_improvement
        )
    }
}

/// Bookkeeping about a single optimizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationStats {
    /// Full 2-opt scans performed.
    pub two_opt_passes: usize,
    /// Segment reversals applied.
    pub improving_moves: usize,
    /// The pass cap stopped the search while it was still improving.
    pub pass_cap_reached: bool,
    /// The optimizability gate judged the input efficient and skipped the search.
    pub skipped_by_gate: bool,
    /// The heuristic did not beat the input order, which was returned instead.
    pub fell_back_to_input: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub original_route: Route,
    pub optimized_route: Route,
    pub improvement: Improvement,
    pub stats: OptimizationStats,
}

impl OptimizationResult {
    pub(crate) fn unchanged(route: Route, stats: OptimizationStats) -> Self {
        Self {
            original_route: route.clone(),
            optimized_route: route,
            improvement: Improvement::default(),
            stats,
        }
    }

    /// Whether applying the optimized order changes anything.
    pub fn has_improvement(&self) -> bool {
        self.improvement.distance_saved > 0.0 && self.original_route.order != self.optimized_route.order
    }
}
