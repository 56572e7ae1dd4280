use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::dates;
use crate::error::BloodMatchError;

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// ABO/Rh blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "O-")]
    ONeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "AB+")]
    AbPos,
}

impl BloodType {
    /// Every blood type, in reporting order
    pub const ALL: [BloodType; 8] = [
        BloodType::ONeg,
        BloodType::OPos,
        BloodType::ANeg,
        BloodType::APos,
        BloodType::BNeg,
        BloodType::BPos,
        BloodType::AbNeg,
        BloodType::AbPos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::ONeg => "O-",
            BloodType::OPos => "O+",
            BloodType::ANeg => "A-",
            BloodType::APos => "A+",
            BloodType::BNeg => "B-",
            BloodType::BPos => "B+",
            BloodType::AbNeg => "AB-",
            BloodType::AbPos => "AB+",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = BloodMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| BloodMatchError::InvalidBloodType(s.to_string()))
    }
}

/// Registered blood donor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Donor {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "bloodType")]
    pub blood_type: BloodType,
    #[serde(
        rename = "lastDonationDate",
        default,
        with = "dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_donation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Donor {
    /// Availability flag, defaulting to true when the donor never set it
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }
}

/// Hospital request for blood units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BloodRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub hospital: String,
    #[serde(rename = "bloodType")]
    pub blood_type: BloodType,
    #[validate(range(min = 1))]
    #[serde(rename = "unitsNeeded")]
    pub units_needed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "timePosted", default, skip_serializing_if = "Option::is_none")]
    pub time_posted: Option<DateTime<Utc>>,
}

/// Donor annotated with its score for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDonor {
    #[serde(flatten)]
    pub donor: Donor,
    pub score: f64,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub eligible: bool,
    #[serde(
        rename = "nextEligibleDate",
        default,
        with = "dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_eligible_date: Option<NaiveDate>,
}

/// Units of one blood type used on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDemand {
    #[serde(with = "dates")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub blood_type: BloodType,
    pub units: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Short-term demand outlook for one blood type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    #[serde(rename = "type")]
    pub blood_type: BloodType,
    #[serde(rename = "next7DayAvg")]
    pub next_7_day_avg: f64,
    pub trend: Trend,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

/// Scoring weights
///
/// Weights are applied as given. They are not required to sum to 1, so scores
/// are only comparable between rankings that used the same weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    #[serde(rename = "type")]
    pub blood_type: f64,
    pub eligibility: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.4,
            blood_type: 0.4,
            eligibility: 0.2,
        }
    }
}

/// Tunables for a single ranking call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingOptions {
    /// Distance at which the distance score reaches zero
    pub max_distance_km: f64,
    pub weights: ScoringWeights,
    /// Day eligibility is evaluated against; today (UTC) when unset
    pub as_of: Option<NaiveDate>,
}

impl RankingOptions {
    pub fn as_of_or_today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            max_distance_km: 50.0,
            weights: ScoringWeights::default(),
            as_of: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_type_roundtrip_strings() {
        for t in BloodType::ALL {
            assert_eq!(t.as_str().parse::<BloodType>().unwrap(), t);
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t));
        }
    }

    #[test]
    fn test_blood_type_rejects_unknown() {
        assert!("C+".parse::<BloodType>().is_err());
        assert!("ab+".parse::<BloodType>().is_err());
        assert!(serde_json::from_str::<BloodType>("\"O\"").is_err());
    }

    #[test]
    fn test_donor_defaults() {
        let donor: Donor = serde_json::from_str(
            r#"{"id":"d1","name":"Ada","bloodType":"A+"}"#,
        )
        .unwrap();

        assert!(donor.is_available());
        assert_eq!(donor.last_donation_date, None);
        assert_eq!(donor.location, None);
    }

    #[test]
    fn test_donor_rejects_bad_date() {
        let result = serde_json::from_str::<Donor>(
            r#"{"id":"d1","name":"Ada","bloodType":"A+","lastDonationDate":"not a date"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.distance, 0.4);
        assert_eq!(weights.blood_type, 0.4);
        assert_eq!(weights.eligibility, 0.2);
    }

    #[test]
    fn test_ranked_donor_serializes_flat() {
        let ranked = RankedDonor {
            donor: Donor {
                id: "d1".to_string(),
                name: "Ada".to_string(),
                blood_type: BloodType::ONeg,
                last_donation_date: None,
                location: None,
                available: None,
            },
            score: 0.7,
            distance_km: None,
            eligible: true,
            next_eligible_date: None,
        };

        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["id"], "d1");
        assert_eq!(json["bloodType"], "O-");
        assert_eq!(json["eligible"], true);
        assert!(json.get("distanceKm").is_none());
    }
}
