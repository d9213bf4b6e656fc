use crate::engines::generation::genome::Genome;
use crate::engines::generation::population::Individual;
use rand::Rng;

/// Tournament selection: pick the lowest cost of K random candidates (with replacement).
///
/// Every candidate must already carry a cost; unevaluated ones lose every duel.
pub fn tournament_selection<R: Rng + ?Sized>(
    population: &[Individual],
    tournament_size: usize,
    rng: &mut R,
) -> Individual {
    let mut best_idx = rng.gen_range(0..population.len());
    let mut best_cost = population[best_idx].cost.unwrap_or(u64::MAX);

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..population.len());
        let cost = population[idx].cost.unwrap_or(u64::MAX);
        if cost < best_cost {
            best_idx = idx;
            best_cost = cost;
        }
    }

    population[best_idx].clone()
}

/// Two-point crossover: swap the segment `[a, b)` between the parents.
///
/// Cut points are distinct and drawn uniformly from `0..=len`. Parents are
/// left untouched; each child keeps its own parent's length.
pub fn two_point_crossover<R: Rng + ?Sized>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    let len = parent1.len().min(parent2.len());
    if len == 0 {
        return (parent1.clone(), parent2.clone());
    }

    let first = rng.gen_range(0..=len);
    let mut second = rng.gen_range(0..len);
    if second >= first {
        second += 1;
    }
    let (a, b) = if first < second {
        (first, second)
    } else {
        (second, first)
    };

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1[a..b].copy_from_slice(&parent2[a..b]);
    child2[a..b].copy_from_slice(&parent1[a..b]);

    (child1, child2)
}

/// Flip-bit mutation: every bit flips independently with `per_bit_probability`.
pub fn flip_bit_mutate<R: Rng + ?Sized>(
    genome: &Genome,
    per_bit_probability: f64,
    rng: &mut R,
) -> Genome {
    genome
        .iter()
        .map(|&bit| {
            if rng.gen::<f64>() < per_bit_probability {
                bit ^ 1
            } else {
                bit
            }
        })
        .collect()
}

/// Generate random genome, each bit uniform 0/1
pub fn random_genome<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen_range(0..=1u8)).collect()
}

/// `size` random genomes for a roster of `doctors` over `days`
pub fn random_population<R: Rng + ?Sized>(
    size: usize,
    doctors: usize,
    days: usize,
    rng: &mut R,
) -> Vec<Genome> {
    (0..size)
        .map(|_| random_genome(doctors * days, rng))
        .collect()
}
