pub mod constraint_model;
pub mod violations;

pub use constraint_model::{ConstraintModel, CostBreakdown, ScheduleReport};
