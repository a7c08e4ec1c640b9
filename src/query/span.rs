use chrono::{Days, NaiveDate};

const SPAN_DAYS: u64 = 365;

/// Rolling one-year window ending at the given date, as `YYYY-MM-DD` bounds.
///
/// The caller supplies `today` explicitly so the window is testable and not
/// read ambiently from the wall clock.
pub fn rolling_year_span(today: NaiveDate) -> (String, String) {
    let spanmin = today
        .checked_sub_days(Days::new(SPAN_DAYS))
        .unwrap_or(NaiveDate::MIN);

    (format_date(spanmin), format_date(today))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
