// Core algorithm exports
pub mod compatibility;
pub mod distance;
pub mod eligibility;
pub mod filters;
pub mod forecast;
pub mod matcher;
pub mod scoring;

pub use compatibility::{donor_types_for, is_compatible, recipients_of};
pub use distance::haversine_distance;
pub use eligibility::{compute_next_eligible_date, is_eligible, is_eligible_now, next_donation_hint};
pub use filters::{compatible_only, eligible_only, within_radius};
pub use forecast::{forecast_demand, DEFAULT_FORECAST_WINDOW};
pub use matcher::{rank_donors_for_request, Ranker};
pub use scoring::{calculate_donor_score, ScoreBreakdown};
