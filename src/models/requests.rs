use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::dates;
use super::domain::{BloodRequest, DailyDemand, Donor, RankingOptions, ScoringWeights};

/// Request to rank donors for one blood request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankDonorsRequest {
    #[validate(nested)]
    pub donors: Vec<Donor>,
    #[validate(nested)]
    pub request: BloodRequest,
    #[serde(default)]
    #[validate(nested)]
    pub options: Option<RankingOverrides>,
    #[serde(rename = "asOf", default, with = "dates::option")]
    pub as_of: Option<NaiveDate>,
}

impl RankDonorsRequest {
    /// Apply this request's overrides on top of configured options
    pub fn ranking_options(&self, base: &RankingOptions) -> RankingOptions {
        let mut options = *base;
        if let Some(overrides) = &self.options {
            if let Some(max_distance_km) = overrides.max_distance_km {
                options.max_distance_km = max_distance_km;
            }
            if let Some(weights) = overrides.weights {
                options.weights = weights;
            }
        }
        if self.as_of.is_some() {
            options.as_of = self.as_of;
        }
        options
    }
}

/// Per-call overrides of the ranking options
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankingOverrides {
    #[serde(rename = "maxDistanceKm", default)]
    #[validate(range(exclusive_min = 0.0))]
    pub max_distance_km: Option<f64>,
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
}

/// Request to forecast demand from usage history
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForecastDemandRequest {
    pub history: Vec<DailyDemand>,
    #[serde(default)]
    #[validate(range(min = 1, max = 365))]
    pub window: Option<usize>,
}
