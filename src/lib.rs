//! Blood Match - donor ranking and blood demand forecasting core
//!
//! This library ranks donors for incoming blood requests, tracks donor
//! eligibility under the 56-day re-donation interval and forecasts short-term
//! demand per blood type from daily usage history. All core functions are
//! pure: the calling layer owns storage, network and clocks.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    forecast_demand, haversine_distance, is_compatible, is_eligible, rank_donors_for_request,
    Ranker,
};
pub use error::{BloodMatchError, Result};
pub use models::{
    BloodRequest, BloodType, DailyDemand, Donor, ForecastResult, Location, RankedDonor,
    RankingOptions, ScoringWeights,
};
