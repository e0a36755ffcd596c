use std::thread;

use tracing::{
    debug,
    warn
};

use crate::math::function::functionerror::FunctionError;
use crate::math::integration::trapezoid::integrate;
use crate::tasks::integrationtask::{
    IntegrationTask,
    TaskSlot
};
use crate::tasks::taskgenerator::{
    generate_tasks,
    TaskGenerator
};

/// A consumed task together with its integral, or the reason it was rejected.
#[derive(Debug)]
pub struct TaskOutcome {
    task: IntegrationTask,
    result: Result<f64, FunctionError>
}

impl TaskOutcome {
    pub fn task(&self) -> &IntegrationTask {
        &self.task
    }

    pub fn result(&self) -> &Result<f64, FunctionError> {
        &self.result
    }
}

/// Integrates tasks taken from `slot` until it is closed and drained.
///
/// A rejected task is recorded and does not stop the loop.
pub fn integrate_tasks(slot: &TaskSlot) -> Vec<TaskOutcome> {
    let mut outcomes = Vec::new();
    while let Some(task) = slot.take() {
        let result = integrate(task.function(), task.left_x(), task.right_x(), task.step());
        let number = outcomes.len() + 1;
        match &result {
            Ok(integral) => debug!(task = number,
                                   left_x = task.left_x(),
                                   right_x = task.right_x(),
                                   step = task.step(),
                                   integral,
                                   "integrator: result"),
            Err(error) => warn!(task = number, %error, "integrator: task rejected")
        }
        outcomes.push(TaskOutcome { task, result });
    }
    outcomes
}

/// Runs a seeded generator and an integrator on two threads sharing one slot.
pub fn run_tasks(count: usize, seed: u64) -> Result<Vec<TaskOutcome>, FunctionError> {
    let slot = TaskSlot::new();
    let mut generator = TaskGenerator::new(seed);
    thread::scope(|scope| {
        let producer = scope.spawn(|| generate_tasks(&slot, &mut generator, count));
        let outcomes = integrate_tasks(&slot);
        let posted = producer
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))?;
        debug!(posted, integrated = outcomes.len(), "tasks finished");
        Ok(outcomes)
    })
}
