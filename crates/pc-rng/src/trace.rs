//! Draw recording for comparing runs

use serde::{Deserialize, Serialize};

use crate::RandomSource;

/// One recorded draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    /// Requested bound
    pub bound: u32,
    /// Value handed back to the caller
    pub result: u32,
}

/// Wraps a source and records every draw made through it.
#[derive(Debug, Clone)]
pub struct TracingRng<R> {
    inner: R,
    trace: Vec<RngTraceEntry>,
    draws: u64,
}

impl<R: RandomSource> TracingRng<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            trace: Vec::new(),
            draws: 0,
        }
    }

    /// Total number of draws made so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Drain the recorded trace, keeping the draw counter
    pub fn take_trace(&mut self) -> Vec<RngTraceEntry> {
        std::mem::take(&mut self.trace)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomSource> RandomSource for TracingRng<R> {
    fn below(&mut self, n: u32) -> u32 {
        let result = self.inner.below(n);
        self.trace.push(RngTraceEntry {
            seq: self.draws,
            bound: n,
            result,
        });
        self.draws += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CarveRng, SequenceRng};

    #[test]
    fn test_records_draws() {
        let mut rng = TracingRng::new(SequenceRng::new([1, 2]));
        rng.below(4);
        rng.below(3);

        assert_eq!(rng.draws(), 2);
        assert_eq!(
            rng.trace(),
            &[
                RngTraceEntry { seq: 0, bound: 4, result: 1 },
                RngTraceEntry { seq: 1, bound: 3, result: 2 },
            ]
        );
    }

    #[test]
    fn test_take_trace_keeps_counter() {
        let mut rng = TracingRng::new(CarveRng::new(5));
        rng.below(10);
        let taken = rng.take_trace();
        assert_eq!(taken.len(), 1);
        assert!(rng.trace().is_empty());

        rng.below(10);
        assert_eq!(rng.trace()[0].seq, 1);
    }

    #[test]
    fn test_same_seed_same_trace() {
        let mut a = TracingRng::new(CarveRng::new(99));
        let mut b = TracingRng::new(CarveRng::new(99));
        for n in 1..50 {
            a.below(n);
            b.below(n);
        }
        assert_eq!(a.trace(), b.trace());
    }
}
