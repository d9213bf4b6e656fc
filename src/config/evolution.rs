use super::traits::{check_probability, ConfigSection};
use crate::error::RosterError;
use serde::{Deserialize, Serialize};

/// Constants of one genetic search run.
///
/// Every run owns its own copy; nothing here is registered globally, so two
/// runs with different settings can live side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Probability that a consecutive pair of candidates is recombined
    pub crossover_rate: f64,
    /// Probability that an individual of the new generation is mutated at all
    pub mutation_rate: f64,
    /// Per-bit flip probability once an individual is mutated; `None` means 1/genome_length
    pub per_bit_mutation_rate: Option<f64>,
    pub tournament_size: usize,
    pub hall_of_fame_size: usize,
    pub seed: Option<u64>,
    pub parallel_evaluation: bool,
    pub fitness_cache_capacity: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 900,
            generations: 1000,
            crossover_rate: 0.9,
            mutation_rate: 0.3,
            per_bit_mutation_rate: None,
            tournament_size: 2,
            hall_of_fame_size: 450,
            seed: Some(42),
            parallel_evaluation: false,
            fitness_cache_capacity: 100_000,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), RosterError> {
        if self.population_size == 0 {
            return Err(RosterError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(RosterError::Configuration(
                "Hall of fame size must be at least 1".to_string(),
            ));
        }
        if self.population_size < self.hall_of_fame_size {
            return Err(RosterError::Configuration(format!(
                "Population size ({}) must not be smaller than the hall of fame size ({})",
                self.population_size, self.hall_of_fame_size
            )));
        }
        if self.generations == 0 {
            return Err(RosterError::Configuration(
                "Generation budget must be at least 1".to_string(),
            ));
        }
        if self.tournament_size < 1 {
            return Err(RosterError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        check_probability("Crossover rate", self.crossover_rate)?;
        check_probability("Mutation rate", self.mutation_rate)?;
        if let Some(p) = self.per_bit_mutation_rate {
            check_probability("Per-bit mutation rate", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, 900);
        assert_eq!(config.hall_of_fame_size, 450);
    }

    #[test]
    fn test_rejects_out_of_range_probabilities() {
        let config = EvolutionConfig {
            crossover_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RosterError::Configuration(_))));

        let config = EvolutionConfig {
            per_bit_mutation_rate: Some(-0.1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_hall_of_fame_larger_than_population() {
        let config = EvolutionConfig {
            population_size: 10,
            hall_of_fame_size: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tournament() {
        let config = EvolutionConfig {
            tournament_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
