//! Daily route optimizer.
//!
//! Two phases: a nearest-neighbor construction (per time block when blocks
//! are respected), then open-path 2-opt refinement confined to each block.
//! The result is compared against the input order and never returned if it
//! is longer.

use std::collections::HashSet;
use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{RouteError, RouteResult};
use crate::gate::should_optimize;
use crate::haversine::HaversineMatrix;
use crate::nearest::{nearest_neighbor, order_distance};
use crate::route::{Improvement, OptimizationResult, OptimizationStats, Route};
use crate::stop::{Coordinates, Stop, TimeBlock};
use crate::traits::DistanceMatrixProvider;

/// Smallest distance change (km) that counts as an improvement.
///
/// Keeps float noise from producing endless zero-gain reversals.
const IMPROVEMENT_EPSILON_KM: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Keep morning < afternoon < evening ordering. Unconstrained stops go last.
    pub respect_time_blocks: bool,
    /// Refine the nearest-neighbor route with 2-opt.
    pub use_two_opt: bool,
    /// Upper bound on full 2-opt passes. The effective cap is
    /// `min(stops.len(), max_two_opt_passes)`, so a 20-stop day gets at most
    /// 20 passes of at most 190 reversal checks each.
    pub max_two_opt_passes: usize,
    /// Return the input unchanged when the optimizability gate says the
    /// order is already efficient.
    pub skip_if_efficient: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            respect_time_blocks: true,
            use_two_opt: true,
            max_two_opt_passes: 200,
            skip_if_efficient: false,
        }
    }
}

/// Optimizes one day's visiting order using great-circle distances.
pub fn optimize_route(stops: &[Stop], options: &OptimizeOptions) -> RouteResult<OptimizationResult> {
    optimize_route_with(stops, options, &HaversineMatrix)
}

/// Optimizes one day's visiting order against an arbitrary distance source.
///
/// The 2-opt step assumes the provider's matrix is symmetric.
pub fn optimize_route_with<M>(
    stops: &[Stop],
    options: &OptimizeOptions,
    matrix_provider: &M,
) -> RouteResult<OptimizationResult>
where
    M: DistanceMatrixProvider,
{
    validate_stops(stops)?;

    let n = stops.len();
    debug!(
        stops = n,
        respect_time_blocks = options.respect_time_blocks,
        use_two_opt = options.use_two_opt,
        "optimizing route"
    );

    let input_order: Vec<usize> = (0..n).collect();
    if n <= 1 {
        let route = build_route(stops, &input_order, 0.0);
        return Ok(OptimizationResult::unchanged(route, OptimizationStats::default()));
    }

    let locations: Vec<Coordinates> = stops.iter().map(Stop::coordinates).collect();
    let matrix = matrix_provider.matrix_for(&locations);
    check_matrix(&matrix, n)?;

    let original_distance = order_distance(&input_order, &matrix);
    let original_route = build_route(stops, &input_order, original_distance);
    let mut stats = OptimizationStats::default();

    let buckets = partition_by_time_block(stops, options.respect_time_blocks);
    let baseline: Vec<usize> = buckets.concat();

    if options.skip_if_efficient && baseline == input_order && !should_optimize(stops) {
        debug!(stops = n, "input order already efficient, skipping");
        stats.skipped_by_gate = true;
        return Ok(OptimizationResult::unchanged(original_route, stats));
    }

    // Phase 1: nearest-neighbor within each bucket, buckets in day order.
    let mut candidate = Vec::with_capacity(n);
    let mut ranges = Vec::with_capacity(buckets.len());
    for bucket in &buckets {
        let start = candidate.len();
        candidate.extend(nearest_neighbor(bucket, &matrix));
        ranges.push(start..candidate.len());
    }

    // Phase 2: 2-opt, never crossing bucket boundaries.
    if options.use_two_opt {
        let max_passes = options.max_two_opt_passes.min(n).max(1);
        two_opt(&mut candidate, &ranges, &matrix, max_passes, &mut stats);
    }

    let candidate_distance = order_distance(&candidate, &matrix);
    let baseline_distance = order_distance(&baseline, &matrix);

    let (final_order, final_distance) =
        if candidate_distance < baseline_distance - IMPROVEMENT_EPSILON_KM {
            (candidate, candidate_distance)
        } else {
            if candidate != baseline {
                debug!(
                    candidate_km = candidate_distance,
                    baseline_km = baseline_distance,
                    "heuristic did not beat input order"
                );
                stats.fell_back_to_input = true;
            }
            (baseline, baseline_distance)
        };

    let optimized_route = build_route(stops, &final_order, final_distance);
    let improvement = Improvement::between(original_distance, final_distance);

    debug!(
        original_km = original_distance,
        optimized_km = final_distance,
        passes = stats.two_opt_passes,
        moves = stats.improving_moves,
        "route optimized"
    );

    Ok(OptimizationResult {
        original_route,
        optimized_route,
        improvement,
        stats,
    })
}

/// Optimizes several days independently, in parallel.
///
/// Results come back in the same order as `days`; one bad day does not
/// affect the others.
pub fn optimize_days(
    days: &[Vec<Stop>],
    options: &OptimizeOptions,
) -> Vec<RouteResult<OptimizationResult>> {
    days.par_iter()
        .map(|stops| optimize_route(stops, options))
        .collect()
}

fn validate_stops(stops: &[Stop]) -> RouteResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(stops.len());
    for stop in stops {
        if stop.id().trim().is_empty() {
            return Err(RouteError::EmptyId);
        }
        let coordinates = stop.coordinates();
        if !coordinates.is_valid() {
            return Err(RouteError::InvalidStop {
                id: stop.id().to_string(),
                reason: format!(
                    "coordinates ({}, {}) out of range",
                    coordinates.latitude, coordinates.longitude
                ),
            });
        }
        if !seen.insert(stop.id()) {
            return Err(RouteError::DuplicateId(stop.id().to_string()));
        }
    }
    Ok(())
}

fn check_matrix(matrix: &[Vec<f64>], expected: usize) -> RouteResult<()> {
    if matrix.len() != expected {
        return Err(RouteError::MatrixShape {
            expected,
            actual: matrix.len(),
        });
    }
    if let Some(row) = matrix.iter().find(|row| row.len() != expected) {
        return Err(RouteError::MatrixShape {
            expected,
            actual: row.len(),
        });
    }
    Ok(())
}

/// Splits input indices into non-empty buckets in day order.
///
/// Buckets are morning, afternoon, evening, then unconstrained. Each bucket
/// keeps input order. Without time blocks (or when they are ignored) there
/// is a single bucket holding every stop.
fn partition_by_time_block(stops: &[Stop], respect_time_blocks: bool) -> Vec<Vec<usize>> {
    let any_blocked = stops.iter().any(|stop| stop.time_block().is_some());
    if !respect_time_blocks || !any_blocked {
        return vec![(0..stops.len()).collect()];
    }

    let slots = TimeBlock::ALL.iter().copied().map(Some).chain([None]);
    slots
        .map(|slot| {
            stops
                .iter()
                .enumerate()
                .filter(|(_, stop)| stop.time_block() == slot)
                .map(|(index, _)| index)
                .collect::<Vec<_>>()
        })
        .filter(|bucket| !bucket.is_empty())
        .collect()
}

/// Open-path 2-opt over `order`, confined to `ranges`.
///
/// Each pass tries every reversal `a..=b` inside each range and applies it
/// as soon as it shortens the route. Position 0 never moves, so the day
/// still starts at its seed stop. Stops after a pass with no improvement or
/// after `max_passes` passes.
fn two_opt(
    order: &mut [usize],
    ranges: &[Range<usize>],
    matrix: &[Vec<f64>],
    max_passes: usize,
    stats: &mut OptimizationStats,
) {
    for _ in 0..max_passes {
        let mut improved = false;

        for range in ranges {
            for a in range.start.max(1)..range.end {
                for b in a + 1..range.end {
                    let delta = reversal_delta(order, a, b, matrix);
                    if delta < -IMPROVEMENT_EPSILON_KM {
                        order[a..=b].reverse();
                        stats.improving_moves += 1;
                        improved = true;
                        trace!(from = a, to = b, delta_km = delta, "2-opt reversal");
                    }
                }
            }
        }

        stats.two_opt_passes += 1;
        if !improved {
            return;
        }
    }

    stats.pass_cap_reached = true;
}

/// Distance change from reversing `order[a..=b]` on an open path.
///
/// Only the edge into `a` and the edge out of `b` change; a missing edge at
/// either end of the path costs nothing.
fn reversal_delta(order: &[usize], a: usize, b: usize, matrix: &[Vec<f64>]) -> f64 {
    let first = order[a];
    let last = order[b];
    let mut delta = 0.0;

    if a > 0 {
        let prev = order[a - 1];
        delta += matrix[prev][last] - matrix[prev][first];
    }
    if let Some(&next) = order.get(b + 1) {
        delta += matrix[first][next] - matrix[last][next];
    }

    delta
}

fn build_route(stops: &[Stop], order: &[usize], total_distance: f64) -> Route {
    let ordered = order.iter().map(|&index| stops[index].clone()).collect();
    Route::from_stops(ordered, total_distance)
}
