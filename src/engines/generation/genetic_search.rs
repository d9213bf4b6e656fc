use crate::config::{AppConfig, ConfigSection};
use crate::data::{FitnessCache, ScheduleRequest};
use crate::engines::evaluation::{ConstraintModel, CostBreakdown};
use crate::engines::generation::{
    genome::Genome,
    hall_of_fame::HallOfFame,
    population::{GenerationStats, Individual, Population},
    progress::ProgressCallback,
    strategies::GeneticAlgorithmConfig,
};
use crate::error::{Result, RosterError};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;

/// Result of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub best_genome: Genome,
    pub best_cost: u64,
    pub breakdown: CostBreakdown,
    pub history: Vec<GenerationStats>,
}

impl SearchOutcome {
    /// Zero-cost, all-idle schedule returned when there is nothing to schedule
    fn empty(genome_length: usize, hard_penalty_weight: u64) -> Self {
        Self {
            best_genome: vec![0; genome_length],
            best_cost: 0,
            breakdown: CostBreakdown {
                hard_penalty_weight,
                ..Default::default()
            },
            history: Vec::new(),
        }
    }
}

/// Generational, elitist genetic search over roster genomes.
///
/// Owns the population, the hall of fame, the fitness cache and the only
/// random generator of the run. Each generation:
/// 1. evaluate individuals lacking a cost
/// 2. merge them into the hall of fame
/// 3. fill a mating pool by tournament
/// 4. recombine consecutive pairs
/// 5. mutate
/// 6. overwrite the worst offspring with the hall of fame
pub struct GeneticSearch {
    config: GeneticAlgorithmConfig,
    model: ConstraintModel,
    hall_of_fame: HallOfFame,
    cache: FitnessCache,
    rng: StdRng,
}

impl GeneticSearch {
    pub fn new(config: GeneticAlgorithmConfig, model: ConstraintModel) -> Result<Self> {
        config.evolution.validate()?;
        model.validate()?;

        let rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            hall_of_fame: HallOfFame::new(config.evolution.hall_of_fame_size),
            cache: FitnessCache::new(config.evolution.fitness_cache_capacity),
            config,
            model,
            rng,
        })
    }

    /// Default operators, constants and constraint settings from an [`AppConfig`]
    pub fn from_app_config(request: Arc<ScheduleRequest>, app: &AppConfig) -> Result<Self> {
        let model = ConstraintModel::new(request, app.constraints.clone());
        Self::new(
            GeneticAlgorithmConfig::from_evolution(app.evolution.clone()),
            model,
        )
    }

    pub fn model(&self) -> &ConstraintModel {
        &self.model
    }

    pub fn get_hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    /// Run the full generation budget
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<SearchOutcome> {
        let request = self.model.request();
        let doctors = request.doctor_count();
        let days = request.days();

        if request.is_degenerate() {
            log::warn!(
                "Nothing to schedule for {} ({} roster slots, {} days); returning an empty schedule",
                request.month(),
                doctors,
                days
            );
            return Ok(SearchOutcome::empty(
                request.genome_length(),
                self.model.config().hard_penalty_weight,
            ));
        }

        let generations = self.config.evolution.generations;
        let parallel = self.config.evolution.parallel_evaluation;

        log::info!(
            "Starting genetic search for {}: {} doctors x {} days, population {}, {} generations",
            request.month(),
            doctors,
            days,
            self.config.evolution.population_size,
            generations
        );

        let mut population = Population::random(
            self.config.evolution.population_size,
            doctors,
            days,
            &mut self.rng,
        );
        let mut history = Vec::with_capacity(generations);

        for generation in 0..generations {
            callback.on_generation_start(generation);

            let fresh = population.evaluate(&self.model, &self.cache, parallel)?;
            callback.on_individuals_evaluated(fresh, population.len());

            self.hall_of_fame.update(population.individuals());

            let stats = self.generation_stats(generation, &population)?;
            callback.on_generation_complete(&stats);
            history.push(stats);

            population = self.next_generation(&population, parallel)?;
        }

        // the last offspring never went through step 2
        population.evaluate(&self.model, &self.cache, parallel)?;
        self.hall_of_fame.update(population.individuals());

        let best = self
            .hall_of_fame
            .best()
            .cloned()
            .ok_or_else(|| RosterError::InvalidInput("Hall of fame is empty".to_string()))?;
        let breakdown = self.model.breakdown(&best.genome)?;

        log::info!(
            "Genetic search finished: best cost {} ({} hard violations, {} soft)",
            best.cost,
            breakdown.hard_violations(),
            breakdown.soft_violations()
        );
        log::debug!("Best schedule breakdown:\n{}", breakdown);

        Ok(SearchOutcome {
            best_genome: best.genome,
            best_cost: best.cost,
            breakdown,
            history,
        })
    }

    fn generation_stats(&self, generation: usize, population: &Population) -> Result<GenerationStats> {
        let (min, mean) = population.min_and_mean().ok_or_else(|| {
            RosterError::InvalidInput(format!("Generation {} has no evaluated individuals", generation))
        })?;
        Ok(GenerationStats {
            generation,
            min,
            mean,
            hall_of_fame_size: self.hall_of_fame.len(),
            best_known: self.hall_of_fame.best_cost().unwrap_or(min),
        })
    }

    /// Selection, crossover, mutation and elitism; the result is fully evaluated.
    fn next_generation(&mut self, population: &Population, parallel: bool) -> Result<Population> {
        let size = population.len();
        let crossover_rate = self.config.evolution.crossover_rate;
        let mutation_rate = self.config.evolution.mutation_rate;

        let pool = self
            .config
            .selection
            .select(population.individuals(), size, &mut self.rng);

        let mut offspring: Vec<Individual> = Vec::with_capacity(size);
        for pair in pool.chunks(2) {
            match pair {
                [parent1, parent2] => {
                    if self.rng.gen::<f64>() < crossover_rate {
                        let (child1, child2) = self.config.crossover.crossover(
                            &parent1.genome,
                            &parent2.genome,
                            &mut self.rng,
                        );
                        offspring.push(Individual::new(child1));
                        offspring.push(Individual::new(child2));
                    } else {
                        offspring.push(parent1.clone());
                        offspring.push(parent2.clone());
                    }
                }
                rest => offspring.extend(rest.iter().cloned()),
            }
        }

        for individual in offspring.iter_mut() {
            if self.rng.gen::<f64>() < mutation_rate {
                let mutated = self.config.mutation.mutate(&individual.genome, &mut self.rng);
                *individual = Individual::new(mutated);
            }
        }

        let mut next = Population::new(offspring);
        next.evaluate(&self.model, &self.cache, parallel)?;

        next.replace_worst(self.hall_of_fame.get_all());

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConstraintConfig, EvolutionConfig};
    use crate::engines::generation::progress::NoopProgress;
    use crate::types::Preference;

    fn request(doctors: usize, days: usize) -> Arc<ScheduleRequest> {
        Arc::new(
            ScheduleRequest::new(
                "test",
                None,
                days,
                vec![false; days],
                vec![1; days],
                vec![2; days],
                (0..doctors).map(|i| format!("D{}", i)).collect(),
                vec![vec![Preference::Available; days]; doctors],
            )
            .unwrap(),
        )
    }

    fn small_config(seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            population_size: 30,
            generations: 15,
            hall_of_fame_size: 5,
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn search(request: Arc<ScheduleRequest>, evolution: EvolutionConfig) -> GeneticSearch {
        let model = ConstraintModel::new(request, ConstraintConfig::default());
        GeneticSearch::new(GeneticAlgorithmConfig::from_evolution(evolution), model).unwrap()
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let model = ConstraintModel::new(request(2, 7), ConstraintConfig::default());
        let evolution = EvolutionConfig {
            population_size: 4,
            hall_of_fame_size: 5,
            ..Default::default()
        };
        let result = GeneticSearch::new(GeneticAlgorithmConfig::from_evolution(evolution), model);
        assert!(matches!(result, Err(RosterError::Configuration(_))));
    }

    #[test]
    fn test_history_and_outcome_shape() {
        let mut search = search(request(3, 7), small_config(1));
        let outcome = search.run(NoopProgress).unwrap();

        assert_eq!(outcome.history.len(), 15);
        assert_eq!(outcome.best_genome.len(), 21);
        assert_eq!(outcome.best_cost, outcome.breakdown.total());
        assert_eq!(search.get_hall_of_fame().best_cost(), Some(outcome.best_cost));
        assert!(search.get_hall_of_fame().len() <= 5);
    }

    #[test]
    fn test_best_known_never_increases() {
        let mut search = search(request(4, 10), small_config(3));
        let outcome = search.run(NoopProgress).unwrap();

        for window in outcome.history.windows(2) {
            assert!(window[1].best_known <= window[0].best_known);
        }
        assert!(outcome.best_cost <= outcome.history[0].min);
    }

    #[test]
    fn test_degenerate_request_returns_empty_schedule() {
        let mut search = search(request(0, 7), small_config(1));
        let outcome = search.run(NoopProgress).unwrap();

        assert!(outcome.best_genome.is_empty());
        assert_eq!(outcome.best_cost, 0);
        assert!(outcome.history.is_empty());
    }

    #[test]
    fn test_odd_population_keeps_its_size() {
        let evolution = EvolutionConfig {
            population_size: 7,
            generations: 3,
            hall_of_fame_size: 2,
            seed: Some(5),
            ..Default::default()
        };
        let mut search = search(request(2, 5), evolution);
        search.run(NoopProgress).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let mut population = Population::random(7, 2, 5, &mut rng);
        population
            .evaluate(search.model(), &FitnessCache::new(0), false)
            .unwrap();
        let next = search.next_generation(&population, false).unwrap();
        assert_eq!(next.len(), 7);
        assert!(next.individuals().iter().all(Individual::is_evaluated));
    }

    #[test]
    fn test_next_generation_carries_the_hall_of_fame() {
        let evolution = EvolutionConfig {
            population_size: 12,
            generations: 1,
            hall_of_fame_size: 4,
            mutation_rate: 1.0,
            seed: Some(9),
            ..Default::default()
        };
        let mut search = search(request(3, 6), evolution);

        let mut rng = StdRng::seed_from_u64(4);
        let mut population = Population::random(12, 3, 6, &mut rng);
        population
            .evaluate(search.model(), &FitnessCache::new(0), false)
            .unwrap();
        search.hall_of_fame.update(population.individuals());
        let elites = search.get_hall_of_fame().get_all().to_vec();

        let next = search.next_generation(&population, false).unwrap();
        for elite in &elites {
            assert!(next
                .individuals()
                .iter()
                .any(|i| i.genome == elite.genome && i.cost == Some(elite.cost)));
        }
        let (min, _) = next.min_and_mean().unwrap();
        assert!(min <= elites[0].cost);
    }

    #[test]
    fn test_weak_hard_weight_is_rejected_with_soft_terms() {
        let mut constraints = ConstraintConfig {
            hard_penalty_weight: 1,
            ..Default::default()
        };
        constraints.soft.rest_distance = true;
        let model = ConstraintModel::new(request(2, 7), constraints);
        let result = GeneticSearch::new(GeneticAlgorithmConfig::from_evolution(small_config(1)), model);
        assert!(matches!(result, Err(RosterError::Configuration(_))));
    }
}

