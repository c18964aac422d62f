use chrono::NaiveDate;
use shared::Clock;

/// Get current local date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Reads today's date from the browser, in the user's time zone
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        shared::parse_date(&get_current_date()).unwrap_or_default()
    }
}
