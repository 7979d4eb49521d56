//! Event Entity

use chrono::NaiveDate;
use kernel::id::EventId;

use crate::error::InvalidField;

/// Park event, administered outside this service
#[derive(Debug, Clone)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    pub event_date: NaiveDate,
    /// Free text such as "10:00-12:00"
    pub event_time: String,
    pub participants: i32,
}

/// Half-open range `[first day of month, first day of next month)`
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), InvalidField> {
    if !(1..=12).contains(&month) {
        return Err(InvalidField::new("month", "must be between 1 and 12"));
    }
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| InvalidField::new("year", "out of range"))?;

    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1), 1)
    } else {
        (Some(year), month + 1)
    };
    let end = next_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .ok_or_else(|| InvalidField::new("year", "out of range"))?;

    Ok((start, end))
}
