use crate::data::FitnessCache;
use crate::engines::evaluation::ConstraintModel;
use crate::engines::generation::genome::Genome;
use crate::engines::generation::hall_of_fame::EliteSchedule;
use crate::engines::generation::operators::random_population;
use crate::error::Result;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;

/// A genome and its cost, `None` until evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub genome: Genome,
    pub cost: Option<u64>,
}

impl Individual {
    pub fn new(genome: Genome) -> Self {
        Self { genome, cost: None }
    }

    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }
}

/// Min/mean cost of one generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub min: u64,
    pub mean: f64,
    pub hall_of_fame_size: usize,
    pub best_known: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn random<R: Rng + ?Sized>(size: usize, doctors: usize, days: usize, rng: &mut R) -> Self {
        Self::new(
            random_population(size, doctors, days, rng)
                .into_iter()
                .map(Individual::new)
                .collect(),
        )
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Cost every individual lacking one; returns how many were computed fresh.
    ///
    /// Cache hits are resolved first. The remaining genomes are scored either
    /// sequentially or on the rayon pool; results are written back in
    /// population order either way.
    pub fn evaluate(
        &mut self,
        model: &ConstraintModel,
        cache: &FitnessCache,
        parallel: bool,
    ) -> Result<usize> {
        for individual in self.individuals.iter_mut().filter(|i| !i.is_evaluated()) {
            individual.cost = cache.get(&individual.genome);
        }

        let missing: Vec<usize> = self
            .individuals
            .iter()
            .enumerate()
            .filter(|(_, i)| !i.is_evaluated())
            .map(|(idx, _)| idx)
            .collect();

        let costs: Vec<Result<u64>> = if parallel {
            missing
                .par_iter()
                .map(|&idx| model.cost(&self.individuals[idx].genome))
                .collect()
        } else {
            missing
                .iter()
                .map(|&idx| model.cost(&self.individuals[idx].genome))
                .collect()
        };

        for (&idx, cost) in missing.iter().zip(costs) {
            let cost = cost?;
            let individual = &mut self.individuals[idx];
            cache.set(individual.genome.clone(), cost);
            individual.cost = Some(cost);
        }

        Ok(missing.len())
    }

    /// Lowest and mean cost over the evaluated individuals
    pub fn min_and_mean(&self) -> Option<(u64, f64)> {
        let costs: Vec<u64> = self.individuals.iter().filter_map(|i| i.cost).collect();
        let min = *costs.iter().min()?;
        let mean = costs.iter().map(|&c| c as f64).sum::<f64>() / costs.len() as f64;
        Some((min, mean))
    }

    /// Overwrite the worst-ranked individuals with `elites`, in order.
    ///
    /// Slot `i` of [`Population::worst_first`] receives `elites[i]` together
    /// with its known cost.
    pub fn replace_worst(&mut self, elites: &[EliteSchedule]) {
        let worst = self.worst_first();
        for (slot, elite) in worst.into_iter().zip(elites) {
            self.individuals[slot] = Individual {
                genome: elite.genome.clone(),
                cost: Some(elite.cost),
            };
        }
    }

    /// Indices ordered worst first: highest cost, then highest index.
    ///
    /// Unevaluated individuals rank as the worst of all.
    pub fn worst_first(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.individuals.len()).collect();
        order.sort_by(|&a, &b| {
            let cost_a = self.individuals[a].cost.unwrap_or(u64::MAX);
            let cost_b = self.individuals[b].cost.unwrap_or(u64::MAX);
            cost_b.cmp(&cost_a).then(b.cmp(&a))
        });
        order
    }
}
