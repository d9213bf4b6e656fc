use crate::config::EvolutionConfig;
use crate::engines::generation::genome::Genome;
use crate::engines::generation::operators::{
    flip_bit_mutate, tournament_selection, two_point_crossover,
};
use crate::engines::generation::population::Individual;
use rand::rngs::StdRng;

/// Fills the mating pool from an evaluated population
pub trait SelectionStrategy: Send + Sync {
    fn select(&self, population: &[Individual], count: usize, rng: &mut StdRng) -> Vec<Individual>;
}

/// Recombines two parents into two children without touching the parents
pub trait CrossoverStrategy: Send + Sync {
    fn crossover(&self, parent1: &Genome, parent2: &Genome, rng: &mut StdRng) -> (Genome, Genome);
}

/// Returns a mutated copy; the input genome is never modified
pub trait MutationStrategy: Send + Sync {
    fn mutate(&self, genome: &Genome, rng: &mut StdRng) -> Genome;
}

#[derive(Debug, Clone, Copy)]
pub struct TournamentSelection {
    pub tournament_size: usize,
}

impl SelectionStrategy for TournamentSelection {
    fn select(&self, population: &[Individual], count: usize, rng: &mut StdRng) -> Vec<Individual> {
        if population.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| tournament_selection(population, self.tournament_size, rng))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl CrossoverStrategy for TwoPointCrossover {
    fn crossover(&self, parent1: &Genome, parent2: &Genome, rng: &mut StdRng) -> (Genome, Genome) {
        two_point_crossover(parent1, parent2, rng)
    }
}

/// Flip-bit mutation; `None` flips each bit with probability 1/length
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipBitMutation {
    pub per_bit_probability: Option<f64>,
}

impl MutationStrategy for FlipBitMutation {
    fn mutate(&self, genome: &Genome, rng: &mut StdRng) -> Genome {
        let probability = match self.per_bit_probability {
            Some(p) => p,
            None if genome.is_empty() => 0.0,
            None => 1.0 / genome.len() as f64,
        };
        flip_bit_mutate(genome, probability, rng)
    }
}

/// Everything one run needs: constants plus the three operators.
pub struct GeneticAlgorithmConfig {
    pub evolution: EvolutionConfig,
    pub selection: Box<dyn SelectionStrategy>,
    pub crossover: Box<dyn CrossoverStrategy>,
    pub mutation: Box<dyn MutationStrategy>,
}

impl GeneticAlgorithmConfig {
    /// Binary-tournament / two-point / flip-bit operators as configured
    pub fn from_evolution(evolution: EvolutionConfig) -> Self {
        Self {
            selection: Box::new(TournamentSelection {
                tournament_size: evolution.tournament_size,
            }),
            crossover: Box::new(TwoPointCrossover),
            mutation: Box::new(FlipBitMutation {
                per_bit_probability: evolution.per_bit_mutation_rate,
            }),
            evolution,
        }
    }

    pub fn with_selection(mut self, selection: Box<dyn SelectionStrategy>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_crossover(mut self, crossover: Box<dyn CrossoverStrategy>) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_mutation(mut self, mutation: Box<dyn MutationStrategy>) -> Self {
        self.mutation = mutation;
        self
    }
}

impl Default for GeneticAlgorithmConfig {
    fn default() -> Self {
        Self::from_evolution(EvolutionConfig::default())
    }
}
