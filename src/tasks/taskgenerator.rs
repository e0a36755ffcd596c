use std::ops::Range;
use std::sync::Arc;

use rand::{
    Rng,
    SeedableRng
};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::math::function::basic::log::Log;
use crate::math::function::functionerror::FunctionError;
use crate::tasks::integrationtask::{
    IntegrationTask,
    TaskSlot
};

const BASE_RANGE: Range<f64> = 1.0..10.0;
const LEFT_RANGE: Range<f64> = 0.0..100.0;
const RIGHT_RANGE: Range<f64> = 100.0..200.0;
const STEP_RANGE: Range<f64> = 0.001..1.0;
const MIN_LEFT_X: f64 = 0.001;

/// Seeded source of random logarithm integration tasks.
pub struct TaskGenerator {
    rng: ChaCha8Rng
}

impl TaskGenerator {
    pub fn new(seed: u64) -> TaskGenerator {
        TaskGenerator { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// `log_b` with `b` in `[1, 10)` over `[left, right]` with `left` in
    /// `(0, 100)` and `right` in `[100, 200)`.
    pub fn next_task(&mut self) -> Result<IntegrationTask, FunctionError> {
        let base = self.rng.random_range(BASE_RANGE);
        let left_x = self.rng.random_range(LEFT_RANGE).max(MIN_LEFT_X);
        let right_x = self.rng.random_range(RIGHT_RANGE);
        let step = self.rng.random_range(STEP_RANGE);
        let log = Log::new(base)?;
        Ok(IntegrationTask::new(Arc::new(log), left_x, right_x, step))
    }
}

/// Posts up to `count` tasks into `slot` and closes it afterwards.
///
/// Stops early when the consumer closes the slot. Returns how many tasks were
/// handed over.
pub fn generate_tasks(slot: &TaskSlot,
                      generator: &mut TaskGenerator,
                      count: usize) -> Result<usize, FunctionError> {
    let result = post_tasks(slot, generator, count);
    slot.close();
    result
}

fn post_tasks(slot: &TaskSlot,
              generator: &mut TaskGenerator,
              count: usize) -> Result<usize, FunctionError> {
    for number in 0..count {
        let task = generator.next_task()?;
        let (left_x, right_x, step) = (task.left_x(), task.right_x(), task.step());
        if slot.put(task).is_err() {
            debug!(posted = number, "generator: slot closed");
            return Ok(number);
        }
        debug!(task = number + 1, left_x, right_x, step, "generator: source");
    }
    Ok(count)
}
