use std::ops::Range;

/// Contiguous per-worker step ranges. The first `steps % workers` workers
/// own one extra step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    steps: u64,
    workers: usize,
    base: u64,
    remainder: u64,
}

impl Partition {
    // Clamped into 1..=steps so no worker is left idle.
    pub fn new(steps: u64, requested_workers: usize) -> Self {
        let workers = (requested_workers as u64).min(steps).max(1);

        Partition {
            steps,
            workers: workers as usize,
            base: steps / workers,
            remainder: steps % workers,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn range(&self, worker: usize) -> Range<u64> {
        debug_assert!(worker < self.workers);

        let t = worker as u64;
        let start = t * self.base + t.min(self.remainder);
        let size = self.base + u64::from(t < self.remainder);
        start..start + size
    }

    pub fn ranges(&self) -> impl Iterator<Item = Range<u64>> + '_ {
        (0..self.workers).map(move |worker| self.range(worker))
    }
}
