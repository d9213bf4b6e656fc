use super::types::{ClinicRequest, PreferenceMatrix};
use crate::data::calendar;
use crate::data::request::ScheduleRequest;
use crate::error::{Result, RosterError};
use crate::types::{Preference, NA_SENTINEL};
use std::path::Path;

pub struct JsonConnector;

impl JsonConnector {
    /// Load a clinic request file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ClinicRequest> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<ClinicRequest> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load and turn into a validated request
    pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ScheduleRequest> {
        let clinic = Self::load(&path)?;
        let request = ScheduleRequest::try_from(clinic)?;
        log::info!(
            "Loaded request for {} from {}: {} doctors, {} days",
            request.month(),
            path.as_ref().display(),
            request.doctor_count(),
            request.days()
        );
        Ok(request)
    }
}

impl TryFrom<ClinicRequest> for ScheduleRequest {
    type Error = RosterError;

    fn try_from(clinic: ClinicRequest) -> Result<Self> {
        let calendar_month = match clinic.year {
            Some(year) => Some((year, calendar::parse_month(&clinic.month)?)),
            None => None,
        };

        let (min_shifts, max_shifts) = if clinic.min_shifts.is_empty()
            && clinic.max_shifts.is_empty()
            && !clinic.total_shifts.is_empty()
        {
            calendar::staffing_band_from_totals(&clinic.total_shifts)
        } else {
            (clinic.min_shifts, clinic.max_shifts)
        };

        let days = match calendar_month {
            Some((year, month)) => calendar::days_in_month(year, month)?,
            None => min_shifts.len(),
        };

        let weekend = match (clinic.weekend_positions.is_empty(), calendar_month) {
            (true, Some((year, month))) => calendar::weekend_positions(year, month)?,
            _ => clinic
                .weekend_positions
                .iter()
                .map(|&flag| match flag {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(RosterError::InvalidInput(format!(
                        "Weekend flag must be 0 or 1, got {}",
                        other
                    ))),
                })
                .collect::<Result<Vec<bool>>>()?,
        };

        let preferences = match clinic.doctor_preference {
            PreferenceMatrix::Matrix(rows) => rows,
            sentinel if sentinel.is_sentinel() => {
                if clinic.doctor_names.iter().any(|n| n != NA_SENTINEL) {
                    return Err(RosterError::InvalidInput(
                        "Preference matrix is 'NA' but the roster names real doctors".to_string(),
                    ));
                }
                vec![vec![Preference::NotApplicable; days]; clinic.doctor_names.len()]
            }
            PreferenceMatrix::Sentinel(other) => {
                return Err(RosterError::InvalidInput(format!(
                    "Unknown preference matrix marker '{}'",
                    other
                )))
            }
        };

        ScheduleRequest::new(
            clinic.month,
            clinic.year,
            days,
            weekend,
            min_shifts,
            max_shifts,
            clinic.doctor_names,
            preferences,
        )
    }
}
