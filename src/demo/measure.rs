use std::hint::black_box;
use std::time::{Duration, Instant};

/// Timing for a run of repeated calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    pub elapsed: Duration,
    pub successes: usize,
    pub errors: usize,
}

impl Measurement {
    pub fn calls(&self) -> usize {
        self.successes + self.errors
    }

    pub fn average_per_call(&self) -> Duration {
        match u32::try_from(self.calls()) {
            Ok(0) => Duration::ZERO,
            Ok(calls) => self.elapsed / calls,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.calls() as f64),
        }
    }

    /// How many times faster `self` ran than `other`
    pub fn speedup_over(&self, other: &Measurement) -> Option<f64> {
        if self.elapsed.is_zero() {
            return None;
        }
        Some(other.elapsed.as_secs_f64() / self.elapsed.as_secs_f64())
    }
}

/// Run `call` over every case `iterations` times, counting `Err` results as errors
pub fn measure<C, T, E, F>(cases: &[C], iterations: usize, mut call: F) -> Measurement
where
    F: FnMut(&C) -> Result<T, E>,
{
    let mut measurement = Measurement::default();
    let start = Instant::now();

    for _ in 0..iterations {
        for case in cases {
            match black_box(call(case)) {
                Ok(_) => measurement.successes += 1,
                Err(_) => measurement.errors += 1,
            }
        }
    }

    measurement.elapsed = start.elapsed();
    measurement
}
