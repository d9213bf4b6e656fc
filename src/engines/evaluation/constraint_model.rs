use super::violations;
use crate::config::{ConfigSection, ConstraintConfig};
use crate::data::ScheduleRequest;
use crate::engines::generation::genome::{self, Genome};
use crate::error::{Result, RosterError};
use crate::types::DoctorRows;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Named violation counters of one schedule and the scalar cost they add up to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub consecutive: u64,
    pub period_cap: u64,
    pub staffing: u64,
    pub preference: u64,
    pub rest_distance: u64,
    pub weekly_overwork: u64,
    pub weekend: u64,
    pub hard_penalty_weight: u64,
}

impl CostBreakdown {
    pub fn hard_violations(&self) -> u64 {
        self.consecutive + self.period_cap + self.staffing + self.preference
    }

    pub fn soft_violations(&self) -> u64 {
        self.rest_distance + self.weekly_overwork + self.weekend
    }

    pub fn total(&self) -> u64 {
        self.hard_penalty_weight
            .saturating_mul(self.hard_violations())
            .saturating_add(self.soft_violations())
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Consecutive shift violations = {}", self.consecutive)?;
        writeln!(f, "Period cap violations = {}", self.period_cap)?;
        writeln!(f, "Daily staffing violations = {}", self.staffing)?;
        writeln!(f, "Day preference violations = {}", self.preference)?;
        writeln!(f, "Rest distance violations = {}", self.rest_distance)?;
        writeln!(f, "Weekly overwork violations = {}", self.weekly_overwork)?;
        writeln!(f, "Weekend violations = {}", self.weekend)?;
        write!(f, "Total cost = {}", self.total())
    }
}

/// Decoded schedule plus its cost, for logging and inspection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub rows: Vec<(String, Vec<u8>)>,
    pub breakdown: CostBreakdown,
}

/// Scores genomes against one request.
///
/// Pure: the request is shared read-only, so one model can be evaluated from
/// many threads at once.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    request: Arc<ScheduleRequest>,
    config: ConstraintConfig,
}

impl ConstraintModel {
    pub fn new(request: Arc<ScheduleRequest>, config: ConstraintConfig) -> Self {
        Self { request, config }
    }

    /// Check the configuration against this request.
    ///
    /// With soft terms on, the hard weight must exceed the largest soft sum the
    /// request allows, so any hard-feasible roster beats every infeasible one.
    /// The largest possible cost must also fit in a `u64`.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let weight = self.config.hard_penalty_weight;
        let soft_bound = self.max_soft_violations();
        if self.config.soft.any_enabled() && weight <= soft_bound {
            return Err(RosterError::Configuration(format!(
                "Hard penalty weight ({}) must exceed the largest soft violation sum for this request ({})",
                weight, soft_bound
            )));
        }

        weight
            .checked_mul(self.max_hard_violations())
            .and_then(|cost| cost.checked_add(soft_bound))
            .ok_or_else(|| {
                RosterError::Configuration(format!(
                    "Hard penalty weight ({}) overflows the cost range of a {} x {} roster",
                    weight,
                    self.request.doctor_count(),
                    self.request.days()
                ))
            })?;
        Ok(())
    }

    /// Upper bound of the hard counters over every genome of this request
    fn max_hard_violations(&self) -> u64 {
        let doctors = self.request.doctor_count() as u64;
        let days = self.request.days() as u64;
        let consecutive = doctors * days.saturating_sub(1);
        let period = doctors * days.max(self.config.period_floor as u64);
        let staffing: u64 = self
            .request
            .min_shifts()
            .iter()
            .map(|&min| doctors.max(min as u64))
            .sum();
        let preference = doctors * days;
        consecutive + period + staffing + preference
    }

    /// Upper bound of the enabled soft counters
    fn max_soft_violations(&self) -> u64 {
        let soft = &self.config.soft;
        let doctors = self.request.doctor_count() as u64;
        let mut per_doctor = 0u64;
        if soft.rest_distance {
            per_doctor += self.request.days().saturating_sub(1) as u64;
        }
        if soft.weekly_overwork {
            per_doctor += 1;
        }
        if soft.weekend_limit_enabled {
            per_doctor += self.request.weekend().iter().filter(|&&w| w).count() as u64;
        }
        doctors * per_doctor
    }

    pub fn request(&self) -> &ScheduleRequest {
        &self.request
    }

    pub fn config(&self) -> &ConstraintConfig {
        &self.config
    }

    pub fn genome_length(&self) -> usize {
        self.request.genome_length()
    }

    pub fn decode(&self, genome: &[u8]) -> Result<DoctorRows> {
        genome::decode(genome, self.request.doctor_count(), self.request.days())
    }

    pub fn breakdown(&self, genome: &[u8]) -> Result<CostBreakdown> {
        let rows = self.decode(genome)?;
        Ok(self.breakdown_of_rows(&rows))
    }

    pub fn cost(&self, genome: &[u8]) -> Result<u64> {
        Ok(self.breakdown(genome)?.total())
    }

    pub fn report(&self, genome: &Genome) -> Result<ScheduleReport> {
        let rows = self.decode(genome)?;
        let breakdown = self.breakdown_of_rows(&rows);
        let rows = self
            .request
            .doctors()
            .iter()
            .zip(rows)
            .map(|(doctor, row)| (doctor.name.clone(), row))
            .collect();
        Ok(ScheduleReport { rows, breakdown })
    }

    fn breakdown_of_rows(&self, rows: &DoctorRows) -> CostBreakdown {
        let request = &self.request;
        let soft = &self.config.soft;

        CostBreakdown {
            consecutive: violations::consecutive_shifts(rows),
            period_cap: violations::period_cap(
                rows,
                self.config.period_floor,
                self.config.period_ceiling,
            ),
            staffing: violations::daily_staffing(
                rows,
                request.min_shifts(),
                request.max_shifts(),
            ),
            preference: violations::preference(rows, request.doctors()),
            rest_distance: if soft.rest_distance {
                violations::rest_distance(rows, soft.min_rest_distance)
            } else {
                0
            },
            weekly_overwork: if soft.weekly_overwork {
                violations::weekly_overwork(rows, soft.weeks_per_period, soft.weekly_average_limit)
            } else {
                0
            },
            weekend: if soft.weekend_limit_enabled {
                violations::weekend_excess(rows, request.weekend(), soft.weekend_limit)
            } else {
                0
            },
            hard_penalty_weight: self.config.hard_penalty_weight,
        }
    }
}
