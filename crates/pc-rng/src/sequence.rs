//! Scripted random source

use std::collections::VecDeque;

use crate::RandomSource;

/// Replays a fixed list of draws, then yields 0 forever.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for one bound never produces an out-of-range draw.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    script: VecDeque<u32>,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    /// A source that always draws 0
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for SequenceRng {
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.script.pop_front().map_or(0, |v| v % n)
    }
}
