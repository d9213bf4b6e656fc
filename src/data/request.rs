use super::connectors::RequestValidator;
use crate::error::Result;
use crate::types::{Doctor, Preference};
use serde::Serialize;

/// Everything the engine needs to know about one month.
///
/// Built once per run and never mutated afterwards; construction goes
/// through [`ScheduleRequest::new`], which rejects any shape disagreement
/// between the roster, the preference matrix and the per-day vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRequest {
    month: String,
    year: Option<i32>,
    days: usize,
    weekend: Vec<bool>,
    min_shifts: Vec<u32>,
    max_shifts: Vec<u32>,
    doctors: Vec<Doctor>,
}

impl ScheduleRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        month: impl Into<String>,
        year: Option<i32>,
        days: usize,
        weekend: Vec<bool>,
        min_shifts: Vec<u32>,
        max_shifts: Vec<u32>,
        doctor_names: Vec<String>,
        preferences: Vec<Vec<Preference>>,
    ) -> Result<Self> {
        RequestValidator::validate_shapes(
            days,
            &weekend,
            &min_shifts,
            &max_shifts,
            &doctor_names,
            &preferences,
        )?;
        RequestValidator::validate_staffing(&min_shifts, &max_shifts)?;

        let doctors = doctor_names
            .into_iter()
            .zip(preferences)
            .enumerate()
            .map(|(index, (name, preferences))| Doctor {
                index,
                name,
                preferences,
            })
            .collect();

        Ok(Self {
            month: month.into(),
            year,
            days,
            weekend,
            min_shifts,
            max_shifts,
            doctors,
        })
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn weekend(&self) -> &[bool] {
        &self.weekend
    }

    pub fn min_shifts(&self) -> &[u32] {
        &self.min_shifts
    }

    pub fn max_shifts(&self) -> &[u32] {
        &self.max_shifts
    }

    pub fn preference(&self, doctor: usize, day: usize) -> Preference {
        self.doctors[doctor].preferences[day]
    }

    /// Bits in a genome for this request
    pub fn genome_length(&self) -> usize {
        self.doctors.len() * self.days
    }

    /// No doctors, no days, or only placeholder slots: nothing to schedule.
    pub fn is_degenerate(&self) -> bool {
        self.days == 0 || self.doctors.iter().all(Doctor::is_placeholder)
    }
}
