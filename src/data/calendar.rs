use crate::error::{Result, RosterError};
use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Days with fewer total requested shifts than this get the light staffing band
pub const HEAVY_DAY_THRESHOLD: u32 = 5;
const LIGHT_BAND: (u32, u32) = (2, 3);
const HEAVY_BAND: (u32, u32) = (7, 9);

/// Accepts a month name ("September", "Sep") or its number ("9").
pub fn parse_month(month: &str) -> Result<u32> {
    let trimmed = month.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        if (1..=12).contains(&number) {
            return Ok(number);
        }
        return Err(RosterError::InvalidInput(format!(
            "Month number out of range: {}",
            number
        )));
    }

    trimmed
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| RosterError::InvalidInput(format!("Unknown month: '{}'", month)))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| RosterError::InvalidInput(format!("Invalid date: {}-{:02}", year, month)))
}

pub fn days_in_month(year: i32, month: u32) -> Result<usize> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok((next - first).num_days() as usize)
}

/// Every date of the month, in order
pub fn dates(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    Ok(first
        .iter_days()
        .take(days_in_month(year, month)?)
        .collect())
}

/// Saturday and Sunday are weekend days
pub fn weekend_positions(year: i32, month: u32) -> Result<Vec<bool>> {
    Ok(dates(year, month)?
        .into_iter()
        .map(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect())
}

/// Derive per-day (min, max) staffing from the total shifts requested per day.
pub fn staffing_band_from_totals(totals: &[u32]) -> (Vec<u32>, Vec<u32>) {
    totals
        .iter()
        .map(|&total| {
            if total < HEAVY_DAY_THRESHOLD {
                LIGHT_BAND
            } else {
                HEAVY_BAND
            }
        })
        .unzip()
}
