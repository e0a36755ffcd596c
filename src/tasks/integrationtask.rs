use std::fmt;
use std::sync::{
    Arc,
    Condvar,
    Mutex,
    MutexGuard,
    PoisonError
};

use tracing::trace;

use crate::math::function::function::Function;

/// One integration job: a function, an interval and a step.
#[derive(Clone)]
pub struct IntegrationTask {
    function: Arc<dyn Function>,
    left_x: f64,
    right_x: f64,
    step: f64
}

impl IntegrationTask {
    pub fn new(function: Arc<dyn Function>, left_x: f64, right_x: f64, step: f64) -> IntegrationTask {
        IntegrationTask { function, left_x, right_x, step }
    }

    pub fn function(&self) -> &Arc<dyn Function> {
        &self.function
    }

    pub fn left_x(&self) -> f64 {
        self.left_x
    }

    pub fn right_x(&self) -> f64 {
        self.right_x
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl fmt::Debug for IntegrationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationTask")
            .field("left_x", &self.left_x)
            .field("right_x", &self.right_x)
            .field("step", &self.step)
            .finish()
    }
}

struct SlotState {
    task: Option<IntegrationTask>,
    closed: bool
}

/// Single-task mailbox between one producer and one consumer.
///
/// `put` waits until the previous task has been taken, so producer and
/// consumer strictly alternate and every task is seen exactly once. After
/// `close`, `put` hands the task back and `take` drains what is left, then
/// returns `None`.
pub struct TaskSlot {
    state: Mutex<SlotState>,
    changed: Condvar
}

impl TaskSlot {
    pub fn new() -> TaskSlot {
        TaskSlot {
            state: Mutex::new(SlotState { task: None, closed: false }),
            changed: Condvar::new()
        }
    }

    fn state(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, SlotState>) -> MutexGuard<'a, SlotState> {
        self.changed.wait(guard).unwrap_or_else(PoisonError::into_inner)
    }

    pub fn put(&self, task: IntegrationTask) -> Result<(), IntegrationTask> {
        let mut state = self.state();
        while state.task.is_some() && !state.closed {
            state = self.wait(state);
        }
        if state.closed {
            return Err(task);
        }
        trace!(?task, "slot: put");
        state.task = Some(task);
        self.changed.notify_all();
        Ok(())
    }

    pub fn take(&self) -> Option<IntegrationTask> {
        let mut state = self.state();
        loop {
            if let Some(task) = state.task.take() {
                trace!(?task, "slot: take");
                self.changed.notify_all();
                return Some(task);
            }
            if state.closed {
                return None;
            }
            state = self.wait(state);
        }
    }

    pub fn close(&self) {
        self.state().closed = true;
        self.changed.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.state().closed
    }
}

impl Default for TaskSlot {
    fn default() -> Self {
        Self::new()
    }
}
