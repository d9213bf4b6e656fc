//! Violation counters over decoded per-doctor rows.
//!
//! Every counter is independent and non-negative; combining them into a cost
//! is the job of [`ConstraintModel`](super::ConstraintModel).

use crate::types::{Doctor, DoctorRows};

/// Adjacent days both worked by the same doctor
pub fn consecutive_shifts(rows: &DoctorRows) -> u64 {
    rows.iter()
        .map(|row| {
            row.windows(2)
                .filter(|pair| pair[0] == 1 && pair[1] == 1)
                .count() as u64
        })
        .sum()
}

/// Two-sided band on each doctor's total over the whole period.
///
/// The floor only binds doctors holding at least one shift; a row of zeros is
/// an unrostered doctor and is covered by the staffing counter instead.
pub fn period_cap(rows: &DoctorRows, floor: u32, ceiling: u32) -> u64 {
    rows.iter()
        .map(|row| {
            let total = assigned_days(row);
            if total > ceiling as u64 {
                total - ceiling as u64
            } else if total > 0 && total < floor as u64 {
                floor as u64 - total
            } else {
                0
            }
        })
        .sum()
}

/// Excess over max plus deficit under min, per day.
pub fn daily_staffing(rows: &DoctorRows, min_shifts: &[u32], max_shifts: &[u32]) -> u64 {
    let mut violations = 0u64;
    for (day, (&min, &max)) in min_shifts.iter().zip(max_shifts).enumerate() {
        let staffed: u64 = rows.iter().map(|row| row[day] as u64).sum();
        if staffed > max as u64 {
            violations += staffed - max as u64;
        }
        if staffed < min as u64 {
            violations += min as u64 - staffed;
        }
    }
    violations
}

/// Shifts assigned on declared days off. "NA" cells never count.
pub fn preference(rows: &DoctorRows, doctors: &[Doctor]) -> u64 {
    rows.iter()
        .zip(doctors)
        .map(|(row, doctor)| {
            row.iter()
                .zip(&doctor.preferences)
                .filter(|(&shift, pref)| shift == 1 && pref.is_unavailable())
                .count() as u64
        })
        .sum()
}

/// Pairs of successive shifts separated by more than one day but no more than
/// `min_distance` days. Back-to-back shifts are left to [`consecutive_shifts`].
pub fn rest_distance(rows: &DoctorRows, min_distance: u32) -> u64 {
    let mut violations = 0u64;
    for row in rows {
        let mut last: Option<usize> = None;
        for (day, &shift) in row.iter().enumerate() {
            if shift != 1 {
                continue;
            }
            if let Some(prev) = last {
                let distance = (day - prev) as u32;
                if distance > 1 && distance <= min_distance {
                    violations += 1;
                }
            }
            last = Some(day);
        }
    }
    violations
}

/// One per doctor whose average weekly load exceeds the limit
pub fn weekly_overwork(rows: &DoctorRows, weeks: u32, average_limit: f64) -> u64 {
    rows.iter()
        .filter(|row| assigned_days(row) as f64 / weeks as f64 > average_limit)
        .count() as u64
}

/// Weekend days worked beyond the per-doctor limit
pub fn weekend_excess(rows: &DoctorRows, weekend: &[bool], limit: u32) -> u64 {
    rows.iter()
        .map(|row| {
            let worked = row
                .iter()
                .zip(weekend)
                .filter(|(&shift, &is_weekend)| shift == 1 && is_weekend)
                .count() as u64;
            worked.saturating_sub(limit as u64)
        })
        .sum()
}

fn assigned_days(row: &[u8]) -> u64 {
    row.iter().map(|&b| b as u64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Preference;

    fn doctor(preferences: Vec<Preference>) -> Doctor {
        Doctor {
            index: 0,
            name: "A".to_string(),
            preferences,
        }
    }

    #[test]
    fn test_consecutive_pairs() {
        let rows = vec![vec![1, 1, 0, 1, 1, 1]];
        assert_eq!(consecutive_shifts(&rows), 3);
        assert_eq!(consecutive_shifts(&vec![vec![1, 0, 1, 0]]), 0);
        assert_eq!(consecutive_shifts(&vec![vec![1]]), 0);
    }

    #[test]
    fn test_period_band_both_sides() {
        // 9 shifts, ceiling 7 => 2; 3 shifts, floor 5 => 2; 6 shifts => 0
        let rows = vec![vec![1; 9], vec![1, 1, 1, 0, 0], vec![1; 6]];
        assert_eq!(period_cap(&rows, 5, 7), 4);
    }

    #[test]
    fn test_period_floor_skips_unrostered_doctors() {
        let rows = vec![vec![0; 7], vec![1, 0, 0, 0, 0, 0, 0]];
        assert_eq!(period_cap(&rows, 5, 7), 4);
    }

    #[test]
    fn test_daily_staffing() {
        let rows = vec![vec![1, 1, 0], vec![1, 0, 0], vec![1, 0, 0]];
        // day 0: 3 staffed, max 2 => 1; day 1: 1 staffed ok; day 2: 0 staffed, min 1 => 1
        assert_eq!(daily_staffing(&rows, &[1, 1, 1], &[2, 2, 2]), 2);
    }

    #[test]
    fn test_preference_violation() {
        let rows = vec![vec![1, 0, 1]];
        let doctors = vec![doctor(vec![
            Preference::Unavailable,
            Preference::Available,
            Preference::Available,
        ])];
        assert_eq!(preference(&rows, &doctors), 1);
    }

    #[test]
    fn test_na_cells_never_count() {
        let rows = vec![vec![1, 1]];
        let doctors = vec![doctor(vec![Preference::NotApplicable; 2])];
        assert_eq!(preference(&rows, &doctors), 0);
    }

    #[test]
    fn test_rest_distance() {
        // shifts on days 0, 2, 5, 6: gaps 2 (violation), 3 (ok), 1 (consecutive, ignored)
        let rows = vec![vec![1, 0, 1, 0, 0, 1, 1]];
        assert_eq!(rest_distance(&rows, 2), 1);
        assert_eq!(rest_distance(&rows, 3), 2);
    }

    #[test]
    fn test_weekly_overwork() {
        let rows = vec![vec![1; 9], vec![1; 8]];
        // 9/4 > 2, 8/4 == 2
        assert_eq!(weekly_overwork(&rows, 4, 2.0), 1);
    }

    #[test]
    fn test_weekend_excess() {
        let weekend = vec![true, true, false, true, true];
        let rows = vec![vec![1, 0, 1, 1, 1], vec![1, 1, 0, 0, 0]];
        assert_eq!(weekend_excess(&rows, &weekend, 2), 1);
    }
}
