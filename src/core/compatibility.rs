use crate::models::BloodType;
use crate::models::BloodType::*;

/// Request types each donor type may give to (red cell transfusion rules)
#[inline]
pub fn recipients_of(donor: BloodType) -> &'static [BloodType] {
    match donor {
        ONeg => &[ONeg, OPos, ANeg, APos, BNeg, BPos, AbNeg, AbPos],
        OPos => &[OPos, APos, BPos, AbPos],
        ANeg => &[ANeg, APos, AbNeg, AbPos],
        APos => &[APos, AbPos],
        BNeg => &[BNeg, BPos, AbNeg, AbPos],
        BPos => &[BPos, AbPos],
        AbNeg => &[AbNeg, AbPos],
        AbPos => &[AbPos],
    }
}

/// Whether blood of type `donor` can satisfy a request for `request`
#[inline]
pub fn is_compatible(donor: BloodType, request: BloodType) -> bool {
    recipients_of(donor).contains(&request)
}

/// Donor types able to satisfy a request, in reporting order
pub fn donor_types_for(request: BloodType) -> Vec<BloodType> {
    BloodType::ALL
        .into_iter()
        .filter(|donor| is_compatible(*donor, request))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_donor_and_recipient() {
        for t in BloodType::ALL {
            assert!(is_compatible(ONeg, t), "O- should give to {}", t);
            assert!(is_compatible(t, AbPos), "{} should give to AB+", t);
        }
    }

    #[test]
    fn test_ab_pos_only_gives_to_itself() {
        assert_eq!(recipients_of(AbPos), &[AbPos]);
        for t in BloodType::ALL.into_iter().filter(|t| *t != AbPos) {
            assert!(!is_compatible(AbPos, t));
        }
    }

    #[test]
    fn test_rh_positive_never_gives_to_negative() {
        let positives = [OPos, APos, BPos, AbPos];
        let negatives = [ONeg, ANeg, BNeg, AbNeg];
        for p in positives {
            for n in negatives {
                assert!(!is_compatible(p, n), "{} must not give to {}", p, n);
            }
        }
    }

    #[test]
    fn test_pair_count() {
        let compatible_pairs = BloodType::ALL
            .into_iter()
            .flat_map(|d| BloodType::ALL.into_iter().map(move |r| (d, r)))
            .filter(|(d, r)| is_compatible(*d, *r))
            .count();
        // 8 + 4 + 4 + 2 + 4 + 2 + 2 + 1
        assert_eq!(compatible_pairs, 27);
    }

    #[test]
    fn test_donor_types_for() {
        assert_eq!(donor_types_for(ONeg), vec![ONeg]);
        assert_eq!(donor_types_for(APos), vec![ONeg, OPos, ANeg, APos]);
        assert_eq!(donor_types_for(AbPos).len(), 8);
    }
}
