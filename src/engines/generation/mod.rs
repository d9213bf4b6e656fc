pub mod genetic_search;
pub mod genome;
pub mod hall_of_fame;
pub mod operators;
pub mod population;
pub mod progress;
pub mod strategies;

pub use genetic_search::{GeneticSearch, SearchOutcome};
pub use genome::Genome;
pub use hall_of_fame::{EliteSchedule, HallOfFame};
pub use population::{GenerationStats, Individual, Population};
pub use progress::{ChannelProgressCallback, LogProgressCallback, NoopProgress, ProgressCallback, ProgressMessage};
pub use strategies::{
    CrossoverStrategy, FlipBitMutation, GeneticAlgorithmConfig, MutationStrategy, SelectionStrategy,
    TournamentSelection, TwoPointCrossover,
};
