use std::io;
use std::ops::Range;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::partition::Partition;

/// Value the estimate is compared against.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const REFERENCE_PI: f64 = 3.14159265358979323846;

#[derive(Debug, Clone, Copy)]
pub struct Estimate {
    pub steps: u64,
    pub workers: usize,
    pub pi: f64,
    /// Wall-clock time from partitioning to the end of the reduction.
    pub elapsed: Duration,
}

impl Estimate {
    pub fn abs_error(&self) -> f64 {
        (self.pi - REFERENCE_PI).abs()
    }
}

#[inline]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

pub fn partial_sum(range: Range<u64>, dx: f64) -> f64 {
    let mut sum = 0.0;
    for i in range {
        let x = (i as f64 + 0.5) * dx;
        sum += integrand(x);
    }
    sum
}

/// Midpoint rule over `[0, 1]` split across `requested_workers` threads.
///
/// Each worker owns one slot of `partial_sums`; the scope joins every worker
/// before the slots are read, and the reduction runs in worker order.
pub fn estimate_pi(steps: u64, requested_workers: usize) -> io::Result<Estimate> {
    let start = Instant::now();

    let partition = Partition::new(steps, requested_workers);
    let dx = 1.0 / partition.steps() as f64;
    info!(steps = partition.steps(), workers = partition.workers(), dx, "partitioned");

    let mut partial_sums = vec![0.0f64; partition.workers()];

    // Workers spawned before a failure are still joined when the scope ends.
    thread::scope(|s| {
        for (worker, (slot, range)) in partial_sums.iter_mut().zip(partition.ranges()).enumerate() {
            debug!(worker, start = range.start, end = range.end, "spawning worker");

            thread::Builder::new()
                .name(format!("pi-worker-{}", worker))
                .spawn_scoped(s, move || {
                    *slot = partial_sum(range, dx);
                    debug!(worker, partial = *slot, "worker finished");
                })
                .map_err(|err| spawn_error(worker, err))?;
        }
        Ok::<_, io::Error>(())
    })?;

    let total = partial_sums.iter().fold(0.0, |acc, partial| acc + partial);
    let pi = total * dx;
    let elapsed = start.elapsed();
    info!(pi, elapsed_secs = elapsed.as_secs_f64(), "reduced");

    Ok(Estimate {
        steps: partition.steps(),
        workers: partition.workers(),
        pi,
        elapsed,
    })
}

fn spawn_error(worker: usize, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("worker {}: {}", worker, err))
}
