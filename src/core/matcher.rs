use tracing::{debug, trace};

use crate::core::{
    eligibility::{compute_next_eligible_date, is_eligible},
    scoring::calculate_donor_score,
};
use crate::models::{BloodRequest, Donor, RankedDonor, RankingOptions};

/// Rank every donor for a request, best first
///
/// Nobody is filtered out: incompatible and ineligible donors are ranked and
/// annotated like everyone else, and the caller decides what to drop. The sort
/// is stable, so donors with equal scores keep their input order.
pub fn rank_donors_for_request(
    donors: &[Donor],
    request: &BloodRequest,
    options: &RankingOptions,
) -> Vec<RankedDonor> {
    let as_of = options.as_of_or_today();

    let mut ranked: Vec<RankedDonor> = donors
        .iter()
        .map(|donor| {
            let eligible = is_eligible(donor, as_of);
            let breakdown = calculate_donor_score(
                donor,
                request,
                eligible,
                options.max_distance_km,
                &options.weights,
            );

            trace!(
                donor_id = %donor.id,
                distance_score = breakdown.distance_score,
                type_score = breakdown.type_score,
                eligibility_score = breakdown.eligibility_score,
                score = breakdown.composite,
                "Scored donor"
            );

            RankedDonor {
                donor: donor.clone(),
                score: breakdown.composite,
                distance_km: breakdown.distance_km,
                eligible,
                next_eligible_date: compute_next_eligible_date(donor.last_donation_date),
            }
        })
        .collect();

    // Score only, descending; `sort_by` is stable and `total_cmp` keeps NaN scores grouped
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        request_id = %request.id,
        blood_type = %request.blood_type,
        candidates = ranked.len(),
        eligible = ranked.iter().filter(|r| r.eligible).count(),
        %as_of,
        "Ranked donors for request"
    );

    ranked
}

/// Reusable ranker holding the options a deployment was configured with
#[derive(Debug, Clone)]
pub struct Ranker {
    options: RankingOptions,
}

impl Ranker {
    pub fn new(options: RankingOptions) -> Self {
        Self { options }
    }

    pub fn with_default_options() -> Self {
        Self {
            options: RankingOptions::default(),
        }
    }

    pub fn options(&self) -> &RankingOptions {
        &self.options
    }

    /// Rank donors for a request using the configured options
    pub fn rank(&self, donors: &[Donor], request: &BloodRequest) -> Vec<RankedDonor> {
        rank_donors_for_request(donors, request, &self.options)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_options()
    }
}
