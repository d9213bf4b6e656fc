use super::traits::ConfigSection;
use crate::error::RosterError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    /// Multiplier applied to every hard violation
    pub hard_penalty_weight: u64,
    /// Most shifts one doctor should take over the whole period
    pub period_ceiling: u32,
    /// Fewest shifts one doctor should take over the whole period
    pub period_floor: u32,
    pub soft: SoftConstraintConfig,
}

/// Optional soft terms. All of them are off unless switched on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftConstraintConfig {
    pub rest_distance: bool,
    pub min_rest_distance: u32,
    pub weekly_overwork: bool,
    pub weekly_average_limit: f64,
    pub weeks_per_period: u32,
    pub weekend_limit_enabled: bool,
    pub weekend_limit: u32,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            hard_penalty_weight: 10_000,
            period_ceiling: 7,
            period_floor: 5,
            soft: SoftConstraintConfig::default(),
        }
    }
}

impl Default for SoftConstraintConfig {
    fn default() -> Self {
        Self {
            rest_distance: false,
            min_rest_distance: 2,
            weekly_overwork: false,
            weekly_average_limit: 2.0,
            weeks_per_period: 4,
            weekend_limit_enabled: false,
            weekend_limit: 2,
        }
    }
}

impl SoftConstraintConfig {
    pub fn any_enabled(&self) -> bool {
        self.rest_distance || self.weekly_overwork || self.weekend_limit_enabled
    }
}

impl ConfigSection for ConstraintConfig {
    fn section_name() -> &'static str {
        "constraints"
    }

    fn validate(&self) -> Result<(), RosterError> {
        if self.hard_penalty_weight == 0 {
            return Err(RosterError::Configuration(
                "Hard penalty weight must be positive".to_string(),
            ));
        }
        if self.period_floor > self.period_ceiling {
            return Err(RosterError::Configuration(format!(
                "Period floor ({}) must not exceed period ceiling ({})",
                self.period_floor, self.period_ceiling
            )));
        }
        if self.soft.weeks_per_period == 0 {
            return Err(RosterError::Configuration(
                "Weeks per period must be at least 1".to_string(),
            ));
        }
        if !self.soft.weekly_average_limit.is_finite() || self.soft.weekly_average_limit < 0.0 {
            return Err(RosterError::Configuration(
                "Weekly average limit must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}
