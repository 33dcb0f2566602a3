use chrono::{Datelike, NaiveDate};

pub const MAX_AGE_YEARS: i32 = 120;

/// Whole years between `birth_date` and `today`. The birthday itself counts
/// as having occurred, so the age increments on the day, not the day after.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
