use crate::core::{compatibility::is_compatible, distance::haversine_distance};
use crate::models::{BloodRequest, Donor, ScoringWeights};

/// Distance score used when either side has no coordinates
pub const NEUTRAL_DISTANCE_SCORE: f64 = 0.5;

/// Per-component breakdown of a donor's score for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub distance_km: Option<f64>,
    pub distance_score: f64,
    pub type_score: f64,
    pub eligibility_score: f64,
    pub composite: f64,
}

/// Calculate a donor's score for a request
///
/// Scoring formula:
/// score = (
///     distance_score * weights.distance +       # Linear falloff to 0 at max distance
///     type_score * weights.blood_type +         # 1 if compatible, else 0
///     eligibility_score * weights.eligibility   # 1 if eligible, else 0
/// )
///
/// Weights are not normalized and the composite is not clamped.
pub fn calculate_donor_score(
    donor: &Donor,
    request: &BloodRequest,
    eligible: bool,
    max_distance_km: f64,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let distance_km = match (&donor.location, &request.location) {
        (Some(donor_loc), Some(request_loc)) => Some(haversine_distance(donor_loc, request_loc)),
        _ => None,
    };

    let distance_score = distance_km
        .map(|d| calculate_distance_score(d, max_distance_km))
        .unwrap_or(NEUTRAL_DISTANCE_SCORE);

    let type_score = if is_compatible(donor.blood_type, request.blood_type) {
        1.0
    } else {
        0.0
    };

    let eligibility_score = if eligible { 1.0 } else { 0.0 };

    let composite = distance_score * weights.distance
        + type_score * weights.blood_type
        + eligibility_score * weights.eligibility;

    ScoreBreakdown {
        distance_km,
        distance_score,
        type_score,
        eligibility_score,
        composite,
    }
}

/// Calculate distance score (0-1)
/// Linear falloff from 1 at the request site to 0 at `max_distance_km`
#[inline]
pub fn calculate_distance_score(distance_km: f64, max_distance_km: f64) -> f64 {
    if max_distance_km <= 0.0 {
        return if distance_km <= 0.0 { 1.0 } else { 0.0 };
    }

    (1.0 - distance_km.min(max_distance_km) / max_distance_km).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodType, Location};

    fn create_donor(blood_type: BloodType, location: Option<Location>) -> Donor {
        Donor {
            id: "donor".to_string(),
            name: "Test Donor".to_string(),
            blood_type,
            last_donation_date: None,
            location,
            available: Some(true),
        }
    }

    fn create_request(blood_type: BloodType, location: Option<Location>) -> BloodRequest {
        BloodRequest {
            id: "req".to_string(),
            hospital: "General".to_string(),
            blood_type,
            units_needed: 2,
            location,
            time_posted: None,
        }
    }

    #[test]
    fn test_distance_score() {
        assert_eq!(calculate_distance_score(0.0, 50.0), 1.0);
        assert!((calculate_distance_score(10.0, 50.0) - 0.8).abs() < 1e-12);
        assert!((calculate_distance_score(25.0, 50.0) - 0.5).abs() < 1e-12);
        assert_eq!(calculate_distance_score(50.0, 50.0), 0.0);
        // Beyond the cap is clamped, never negative
        assert_eq!(calculate_distance_score(500.0, 50.0), 0.0);
    }

    #[test]
    fn test_distance_score_zero_cap() {
        assert_eq!(calculate_distance_score(0.0, 0.0), 1.0);
        assert_eq!(calculate_distance_score(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_missing_location_is_neutral() {
        let weights = ScoringWeights::default();
        let request = create_request(BloodType::APos, Some(Location::new(6.5, 3.4)));

        let no_donor_loc = calculate_donor_score(
            &create_donor(BloodType::APos, None),
            &request,
            true,
            50.0,
            &weights,
        );
        assert_eq!(no_donor_loc.distance_km, None);
        assert_eq!(no_donor_loc.distance_score, NEUTRAL_DISTANCE_SCORE);

        let no_request_loc = calculate_donor_score(
            &create_donor(BloodType::APos, Some(Location::new(6.5, 3.4))),
            &create_request(BloodType::APos, None),
            true,
            50.0,
            &weights,
        );
        assert_eq!(no_request_loc.distance_score, NEUTRAL_DISTANCE_SCORE);
    }

    #[test]
    fn test_type_score_is_binary() {
        let weights = ScoringWeights::default();
        let request = create_request(BloodType::ONeg, None);

        let compatible =
            calculate_donor_score(&create_donor(BloodType::ONeg, None), &request, true, 50.0, &weights);
        let incompatible =
            calculate_donor_score(&create_donor(BloodType::APos, None), &request, true, 50.0, &weights);

        assert_eq!(compatible.type_score, 1.0);
        assert_eq!(incompatible.type_score, 0.0);
    }

    #[test]
    fn test_composite_with_default_weights() {
        let weights = ScoringWeights::default();
        let here = Location::new(10.0, 10.0);
        let breakdown = calculate_donor_score(
            &create_donor(BloodType::ONeg, Some(here)),
            &create_request(BloodType::AbPos, Some(here)),
            true,
            50.0,
            &weights,
        );

        assert_eq!(breakdown.distance_km, Some(0.0));
        assert!((breakdown.composite - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_are_not_normalized() {
        let weights = ScoringWeights {
            distance: 1.0,
            blood_type: 1.0,
            eligibility: 1.0,
        };
        let breakdown = calculate_donor_score(
            &create_donor(BloodType::ONeg, None),
            &create_request(BloodType::ONeg, None),
            true,
            50.0,
            &weights,
        );

        assert!((breakdown.composite - 2.5).abs() < 1e-12);
    }
}
