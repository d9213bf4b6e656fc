use crate::data::{calendar, ScheduleRequest};
use crate::engines::generation::genome::{self, Genome};
use crate::error::Result;
use crate::types::Assignment;
use chrono::NaiveDate;
use serde::Serialize;

/// One assigned (doctor, day) cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftSlot {
    pub doctor_index: usize,
    pub doctor_name: String,
    pub day: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Set for "NA" roster slots that no real doctor occupies
    pub placeholder: bool,
}

/// Best schedule in the shape persistence layers consume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedSchedule {
    pub month: String,
    /// `matrix[day][doctor]`
    pub matrix: Assignment,
    /// Day-major, then roster order
    pub slots: Vec<ShiftSlot>,
}

impl ExportedSchedule {
    /// `(doctor_index, day)` for every assigned slot
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.slots.iter().map(|s| (s.doctor_index, s.day)).collect()
    }

    /// Assigned slots held by real doctors only
    pub fn staffed_slots(&self) -> impl Iterator<Item = &ShiftSlot> {
        self.slots.iter().filter(|s| !s.placeholder)
    }
}

pub struct SolutionExporter;

impl SolutionExporter {
    pub fn export(request: &ScheduleRequest, genome: &Genome) -> Result<ExportedSchedule> {
        let rows = genome::decode(genome, request.doctor_count(), request.days())?;
        let matrix = genome::to_days_major(&rows, request.days());
        let dates = Self::dates_for(request);

        let mut slots = Vec::new();
        for (day, assigned) in matrix.iter().enumerate() {
            for (doctor_index, &bit) in assigned.iter().enumerate() {
                if bit != 1 {
                    continue;
                }
                let doctor = &request.doctors()[doctor_index];
                slots.push(ShiftSlot {
                    doctor_index,
                    doctor_name: doctor.name.clone(),
                    day,
                    date: dates.as_ref().and_then(|d| d.get(day).copied()),
                    placeholder: doctor.is_placeholder(),
                });
            }
        }

        log::debug!(
            "Exported {} assigned slots over {} days for {}",
            slots.len(),
            request.days(),
            request.month()
        );

        Ok(ExportedSchedule {
            month: request.month().to_string(),
            matrix,
            slots,
        })
    }

    // Calendar dates only when the request pins a year and the day count agrees
    fn dates_for(request: &ScheduleRequest) -> Option<Vec<NaiveDate>> {
        let year = request.year()?;
        let month = calendar::parse_month(request.month()).ok()?;
        let dates = calendar::dates(year, month).ok()?;
        (dates.len() == request.days()).then_some(dates)
    }
}
