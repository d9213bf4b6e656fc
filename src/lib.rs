//! Monthly doctor shift rostering by genetic search.
//!
//! A [`data::ScheduleRequest`] describes the roster, the month and the
//! staffing band. [`engines::evaluation::ConstraintModel`] scores a candidate
//! roster as a weighted count of rule violations, and
//! [`engines::generation::GeneticSearch`] evolves a population of bit-vector
//! genomes towards the cheapest roster it can find.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod export;
pub mod types;

pub use error::{Result, RosterError};
