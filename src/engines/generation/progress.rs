use super::population::GenerationStats;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
    fn on_individuals_evaluated(&mut self, fresh: usize, population_size: usize);
}

/// Discards every event
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
    fn on_individuals_evaluated(&mut self, _fresh: usize, _population_size: usize) {}
}

/// Reports through the `log` facade, one info line every `every` generations
pub struct LogProgressCallback {
    every: usize,
}

impl LogProgressCallback {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for LogProgressCallback {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        if stats.generation % self.every == 0 {
            log::info!(
                "Generation {}: min {} / mean {:.1}, best known {}, hall of fame {}",
                stats.generation + 1,
                stats.min,
                stats.mean,
                stats.best_known,
                stats.hall_of_fame_size
            );
        } else {
            log::debug!(
                "Generation {}: min {} / mean {:.1}",
                stats.generation + 1,
                stats.min,
                stats.mean
            );
        }
    }

    fn on_individuals_evaluated(&mut self, fresh: usize, population_size: usize) {
        log::trace!("Evaluated {}/{} new individuals", fresh, population_size);
    }
}

// For callers running the search on a worker thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationStats),
    IndividualsEvaluated { fresh: usize, total: usize },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete(*stats));
    }

    fn on_individuals_evaluated(&mut self, fresh: usize, population_size: usize) {
        let _ = self.sender.send(ProgressMessage::IndividualsEvaluated {
            fresh,
            total: population_size,
        });
    }
}
