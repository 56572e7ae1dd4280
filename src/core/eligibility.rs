use chrono::{Days, NaiveDate, Utc};

use crate::models::Donor;

/// Minimum number of days between two whole-blood donations
pub const DONATION_INTERVAL_DAYS: u64 = 56;

/// First calendar day a donor may give again, `None` if they never donated
#[inline]
pub fn compute_next_eligible_date(last_donation_date: Option<NaiveDate>) -> Option<NaiveDate> {
    last_donation_date.map(|last| {
        last.checked_add_days(Days::new(DONATION_INTERVAL_DAYS))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Check whether a donor can give blood on `as_of`
///
/// An explicit opt-out (`available == false`) always wins over dates. The
/// boundary is inclusive: a donor is eligible on their next eligible date.
pub fn is_eligible(donor: &Donor, as_of: NaiveDate) -> bool {
    if !donor.is_available() {
        return false;
    }

    match compute_next_eligible_date(donor.last_donation_date) {
        Some(next) => as_of >= next,
        None => true,
    }
}

/// Same as [`is_eligible`] evaluated against today's UTC date
pub fn is_eligible_now(donor: &Donor) -> bool {
    is_eligible(donor, Utc::now().date_naive())
}

/// Human-readable next eligible date, e.g. "Eligible from Mar 5, 2026"
pub fn next_donation_hint(donor: &Donor) -> Option<String> {
    compute_next_eligible_date(donor.last_donation_date)
        .map(|next| format!("Eligible from {}", next.format("%b %-d, %Y")))
}
