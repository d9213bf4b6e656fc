//! Genome representation for the monthly roster
//!
//! A genome is a flat bit vector of length `doctors * days`. It is read as
//! `doctors` contiguous blocks of `days` bits, one block per roster slot in
//! roster order, so bit `d * days + t` says whether doctor `d` works day `t`.
//!
//! # Why a flat vector?
//!
//! - **Crossover**: swapping a segment is plain slice copying
//! - **Mutation**: flipping a bit can never produce an invalid shape
//! - **Hashing**: the genome value itself keys the fitness cache
//!
//! # Example
//!
//! ```
//! use rostergen::engines::generation::genome::decode;
//!
//! // 2 doctors, 3 days
//! let genome = vec![1, 0, 1, 0, 1, 0];
//! let rows = decode(&genome, 2, 3).unwrap();
//! assert_eq!(rows, vec![vec![1, 0, 1], vec![0, 1, 0]]);
//! ```

use crate::error::{Result, RosterError};
use crate::types::{Assignment, DoctorRows};

pub type Genome = Vec<u8>;

/// Split a genome into per-doctor day vectors.
pub fn decode(genome: &[u8], doctors: usize, days: usize) -> Result<DoctorRows> {
    let expected = doctors * days;
    if genome.len() != expected {
        return Err(RosterError::shape("genome length", expected, genome.len()));
    }
    if days == 0 {
        return Ok(vec![Vec::new(); doctors]);
    }
    Ok(genome.chunks(days).map(|block| block.to_vec()).collect())
}

/// Flatten a days-major 0/1 matrix (`matrix[day][doctor]`) into a genome.
pub fn encode(assignment: &Assignment, doctors: usize, days: usize) -> Result<Genome> {
    if assignment.len() != days {
        return Err(RosterError::shape("assignment days", days, assignment.len()));
    }

    let mut genome = vec![0u8; doctors * days];
    for (day, row) in assignment.iter().enumerate() {
        if row.len() != doctors {
            return Err(RosterError::shape(
                format!("assignment row for day {}", day),
                doctors,
                row.len(),
            ));
        }
        for (doctor, &bit) in row.iter().enumerate() {
            if bit > 1 {
                return Err(RosterError::InvalidInput(format!(
                    "Assignment cell (day {}, doctor {}) must be 0 or 1, got {}",
                    day, doctor, bit
                )));
            }
            genome[doctor * days + day] = bit;
        }
    }
    Ok(genome)
}

/// Transpose per-doctor rows into the days-major matrix.
pub fn to_days_major(rows: &DoctorRows, days: usize) -> Assignment {
    (0..days)
        .map(|day| rows.iter().map(|row| row[day]).collect())
        .collect()
}
