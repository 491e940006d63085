//! day-route-optimizer
//!
//! Reorders one itinerary day's stops to cut walking distance, optionally
//! keeping morning/afternoon/evening stops in day order.

pub mod error;
pub mod format;
pub mod gate;
pub mod haversine;
mod nearest;
pub mod route;
pub mod solver;
pub mod stop;
pub mod traits;

pub use error::{RouteError, RouteResult};
pub use gate::{Confidence, GateThresholds, SavingsEstimate, estimate_optimization_savings, should_optimize};
pub use haversine::{estimate_walking_time, haversine_km, route_distance};
pub use route::{Improvement, OptimizationResult, OptimizationStats, Route};
pub use solver::{OptimizeOptions, optimize_days, optimize_route, optimize_route_with};
pub use stop::{Coordinates, Stop, TimeBlock};
