use serde::{Deserialize, Serialize};

use crate::core::compatibility::is_compatible;
use crate::models::domain::{BloodRequest, ForecastResult, RankedDonor};

/// Response for a donor ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankDonorsResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub donors: Vec<RankedDonor>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCount")]
    pub eligible_count: usize,
    #[serde(rename = "compatibleCount")]
    pub compatible_count: usize,
}

impl RankDonorsResponse {
    pub fn new(request: &BloodRequest, donors: Vec<RankedDonor>) -> Self {
        let eligible_count = donors.iter().filter(|r| r.eligible).count();
        let compatible_count = donors
            .iter()
            .filter(|r| is_compatible(r.donor.blood_type, request.blood_type))
            .count();

        Self {
            request_id: request.id.clone(),
            total_candidates: donors.len(),
            eligible_count,
            compatible_count,
            donors,
        }
    }
}

/// Response for a demand forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDemandResponse {
    pub forecasts: Vec<ForecastResult>,
    pub window: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
