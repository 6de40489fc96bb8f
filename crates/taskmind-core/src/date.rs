use chrono::{Duration, Local, NaiveDate};

/// Today per the local wall clock; the derivation functions take dates as
/// parameters so tests can pin fixed ones.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[must_use]
pub fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}
