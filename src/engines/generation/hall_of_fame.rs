use crate::engines::generation::genome::Genome;
use crate::engines::generation::population::Individual;

use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliteSchedule {
    pub genome: Genome,
    pub cost: u64,
}

/// Best distinct genomes seen during one run, cheapest first.
pub struct HallOfFame {
    schedules: Vec<EliteSchedule>,
    max_size: usize,
    seen_genomes: HashSet<Genome>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            schedules: Vec::with_capacity(max_size),
            max_size,
            seen_genomes: HashSet::new(),
        }
    }

    /// Merge every evaluated individual, then sort and trim once.
    ///
    /// Returns how many genomes were new to the hall before trimming.
    pub fn update(&mut self, individuals: &[Individual]) -> usize {
        if self.max_size == 0 {
            return 0;
        }
        let mut offered = 0;
        for individual in individuals {
            let Some(cost) = individual.cost else {
                continue;
            };
            if self.seen_genomes.insert(individual.genome.clone()) {
                self.schedules.push(EliteSchedule {
                    genome: individual.genome.clone(),
                    cost,
                });
                offered += 1;
            }
        }
        self.sort_and_trim();
        offered
    }

    /// Stable sort by cost, so earlier entrants win ties
    fn sort_and_trim(&mut self) {
        self.schedules.sort_by_key(|s| s.cost);

        while self.schedules.len() > self.max_size {
            if let Some(removed) = self.schedules.pop() {
                self.seen_genomes.remove(&removed.genome);
            }
        }
    }

    pub fn best(&self) -> Option<&EliteSchedule> {
        self.schedules.first()
    }

    pub fn best_cost(&self) -> Option<u64> {
        self.best().map(|s| s.cost)
    }

    pub fn get_all(&self) -> &[EliteSchedule] {
        &self.schedules
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
