//! # Delivery Dates
//!
//! ## Projection Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order date ──► + 5 days (standard) / + 2 days (expedited)              │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │              lands on Sat/Sun? ──yes──► next day, check again           │
//! │                      │ no                                               │
//! │                      ▼                                                  │
//! │                delivery date                                            │
//! │                                                                         │
//! │  Weekends inside the lead time are NOT skipped; only the landing day    │
//! │  is pushed forward.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const STANDARD_LEAD_DAYS: u64 = 5;
pub const EXPEDITED_LEAD_DAYS: u64 = 2;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Projects the delivery date of an order placed on `order_date`.
///
/// Returns `None` when the projection runs past the last date chrono can
/// represent.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use shopkit_core::dates::calculate_delivery_date;
///
/// // Thursday + 2 = Saturday → Monday
/// let thursday = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
/// assert_eq!(
///     calculate_delivery_date(thursday, true),
///     NaiveDate::from_ymd_opt(2023, 6, 19)
/// );
/// ```
pub fn calculate_delivery_date(order_date: NaiveDate, expedited: bool) -> Option<NaiveDate> {
    let lead_days = if expedited {
        EXPEDITED_LEAD_DAYS
    } else {
        STANDARD_LEAD_DAYS
    };

    let mut delivery = order_date.checked_add_days(Days::new(lead_days))?;
    while is_weekend(delivery.weekday()) {
        delivery = delivery.checked_add_days(Days::new(1))?;
    }

    Some(delivery)
}

/// Renders a date as `June 15, 2023`.
///
/// Works for anything with a calendar date, including `DateTime<Tz>`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use shopkit_core::dates::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
/// assert_eq!(format_date(&date), "June 5, 2023");
/// ```
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!(
        "{} {}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_standard_delivery_on_weekday() {
        // Monday + 5 = Saturday → Monday
        assert_eq!(calculate_delivery_date(date(2023, 6, 12), false), Some(date(2023, 6, 19)));
        // Wednesday + 5 = Monday
        assert_eq!(calculate_delivery_date(date(2023, 6, 14), false), Some(date(2023, 6, 19)));
    }

    #[test]
    fn test_expedited_delivery() {
        // Monday + 2 = Wednesday
        assert_eq!(calculate_delivery_date(date(2023, 6, 12), true), Some(date(2023, 6, 14)));
        // Friday + 2 = Sunday → Monday
        assert_eq!(calculate_delivery_date(date(2023, 6, 16), true), Some(date(2023, 6, 19)));
    }

    #[test]
    fn test_weekends_inside_lead_time_are_not_skipped() {
        // Friday + 5 = Wednesday, even though a weekend sits in between
        assert_eq!(calculate_delivery_date(date(2023, 6, 16), false), Some(date(2023, 6, 21)));
    }

    #[test]
    fn test_delivery_never_lands_on_weekend() {
        let start = date(2023, 12, 20);
        for offset in 0..28 {
            let order_date = start + Days::new(offset);
            for expedited in [false, true] {
                let delivery = calculate_delivery_date(order_date, expedited).unwrap();
                assert!(
                    !is_weekend(delivery.weekday()),
                    "{order_date} (expedited: {expedited}) landed on {delivery}"
                );
                assert!(delivery > order_date);
            }
        }
    }

    #[test]
    fn test_delivery_crosses_year_boundary() {
        // Thu Dec 28 2023 + 5 = Tue Jan 2 2024
        assert_eq!(calculate_delivery_date(date(2023, 12, 28), false), Some(date(2024, 1, 2)));
    }

    #[test]
    fn test_delivery_past_last_representable_date() {
        assert_eq!(calculate_delivery_date(NaiveDate::MAX, false), None);
        assert_eq!(calculate_delivery_date(NaiveDate::MAX, true), None);

        let near_end = NaiveDate::MAX - Days::new(1);
        assert_eq!(calculate_delivery_date(near_end, true), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(2023, 6, 15)), "June 15, 2023");
        assert_eq!(format_date(&date(2024, 1, 1)), "January 1, 2024");
        assert_eq!(format_date(&date(1999, 12, 31)), "December 31, 1999");
    }

    #[test]
    fn test_format_date_accepts_datetimes() {
        let timestamp = Utc.with_ymd_and_hms(2023, 6, 15, 23, 59, 0).unwrap();
        assert_eq!(format_date(&timestamp), "June 15, 2023");
    }
}
