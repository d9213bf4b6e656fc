pub mod cache;
pub mod calendar;
pub mod connectors;
pub mod request;

pub use cache::FitnessCache;
pub use connectors::{ClinicRequest, JsonConnector, PreferenceMatrix, RequestValidator};
pub use request::ScheduleRequest;
