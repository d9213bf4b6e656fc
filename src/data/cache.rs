use crate::engines::generation::genome::Genome;
use std::collections::HashMap;
use std::sync::Mutex;

/// Cost memo keyed by genome value, shared by all generations of one run.
pub struct FitnessCache {
    data: Mutex<HashMap<Genome, u64>>,
    capacity: usize,
}

impl FitnessCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Mutex::new(HashMap::with_capacity(capacity.min(4096))),
            capacity,
        }
    }

    pub fn get(&self, genome: &Genome) -> Option<u64> {
        let data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        data.get(genome).copied()
    }

    pub fn set(&self, genome: Genome, cost: u64) {
        if self.capacity == 0 {
            return;
        }
        let mut data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        if data.len() >= self.capacity && !data.contains_key(&genome) {
            // A simple eviction strategy: clear the cache when full.
            data.clear();
        }
        data.insert(genome, cost);
    }

    pub fn len(&self) -> usize {
        self.data.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
