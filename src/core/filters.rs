//! Caller-side policies applied to ranked donors.
//!
//! Ranking never drops anyone; these helpers let the calling layer decide
//! afterwards whether to hide incompatible, ineligible or distant donors. All
//! of them preserve the ranked order.

use crate::core::compatibility::is_compatible;
use crate::models::{BloodType, RankedDonor};

/// Keep only donors eligible to give on the ranking day
pub fn eligible_only(ranked: &[RankedDonor]) -> Vec<RankedDonor> {
    ranked.iter().filter(|r| r.eligible).cloned().collect()
}

/// Keep only donors whose blood type can satisfy `request_type`
pub fn compatible_only(ranked: &[RankedDonor], request_type: BloodType) -> Vec<RankedDonor> {
    ranked
        .iter()
        .filter(|r| is_compatible(r.donor.blood_type, request_type))
        .cloned()
        .collect()
}

/// Keep only donors located within `radius_km` of the request site
///
/// Uses the distance computed during ranking. Donors without a distance (no
/// coordinates on either side) are dropped.
pub fn within_radius(ranked: &[RankedDonor], radius_km: f64) -> Vec<RankedDonor> {
    ranked
        .iter()
        .filter(|r| r.distance_km.is_some_and(|d| d <= radius_km))
        .cloned()
        .collect()
}
