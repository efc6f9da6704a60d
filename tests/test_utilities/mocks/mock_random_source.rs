use rigcheck::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RandomSource that replays scripted values
///
/// Each draw takes the next scripted value (cycling) and clamps it into the
/// requested range. With no script every draw returns the range minimum.
#[derive(Default, Clone)]
pub struct MockRandomSource {
    values: Vec<u32>,
    cursor: usize,
    pub calls: Arc<Mutex<Vec<(u32, u32)>>>,
}

#[allow(dead_code)]
impl MockRandomSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            cursor: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Source that always answers with the lowest value in range
    pub fn lowest() -> Self {
        Self::new(vec![])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RandomSource for MockRandomSource {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.calls.lock().unwrap().push((low, high));
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
