pub mod exporter;

pub use exporter::{ExportedSchedule, ShiftSlot, SolutionExporter};
