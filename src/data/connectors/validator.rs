use crate::error::{Result, RosterError};
use crate::types::Preference;

pub struct RequestValidator;

impl RequestValidator {
    /// Check every per-day vector and the preference matrix against (D, days)
    pub fn validate_shapes(
        days: usize,
        weekend: &[bool],
        min_shifts: &[u32],
        max_shifts: &[u32],
        doctor_names: &[String],
        preferences: &[Vec<Preference>],
    ) -> Result<()> {
        if weekend.len() != days {
            return Err(RosterError::shape("weekend positions", days, weekend.len()));
        }
        if min_shifts.len() != days {
            return Err(RosterError::shape("minimum shifts", days, min_shifts.len()));
        }
        if max_shifts.len() != days {
            return Err(RosterError::shape("maximum shifts", days, max_shifts.len()));
        }
        if preferences.len() != doctor_names.len() {
            return Err(RosterError::shape(
                "preference matrix rows",
                doctor_names.len(),
                preferences.len(),
            ));
        }
        for (i, row) in preferences.iter().enumerate() {
            if row.len() != days {
                return Err(RosterError::shape(
                    format!("preference row {} ({})", i, doctor_names[i]),
                    days,
                    row.len(),
                ));
            }
        }
        Ok(())
    }

    /// Minimum staffing may never exceed maximum staffing on the same day
    pub fn validate_staffing(min_shifts: &[u32], max_shifts: &[u32]) -> Result<()> {
        for (day, (min, max)) in min_shifts.iter().zip(max_shifts).enumerate() {
            if min > max {
                return Err(RosterError::InvalidInput(format!(
                    "Day {}: minimum staffing ({}) exceeds maximum ({})",
                    day, min, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_good_shapes() {
        let result = RequestValidator::validate_shapes(
            2,
            &[false, true],
            &[1, 1],
            &[2, 2],
            &["A".to_string()],
            &[vec![Preference::Available, Preference::Unavailable]],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_short_preference_row() {
        let result = RequestValidator::validate_shapes(
            2,
            &[false, true],
            &[1, 1],
            &[2, 2],
            &["A".to_string()],
            &[vec![Preference::Available]],
        );
        match result {
            Err(RosterError::ShapeMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_staffing_band() {
        assert!(RequestValidator::validate_staffing(&[3, 1], &[2, 2]).is_err());
        assert!(RequestValidator::validate_staffing(&[2, 1], &[2, 2]).is_ok());
    }
}
