// Model exports
pub mod dates;
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BloodRequest, BloodType, DailyDemand, Donor, ForecastResult, Location,
    RankedDonor, RankingOptions, RiskLevel, ScoringWeights, Trend,
};
pub use requests::{ForecastDemandRequest, RankDonorsRequest, RankingOverrides};
pub use responses::{ForecastDemandResponse, RankDonorsResponse};
