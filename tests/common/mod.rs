#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_wasm::schedule::Scheduler;

struct Task {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Inner {
    now: Cell<u64>,
    seq: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
}

/// Virtual-time scheduler: tasks run only when the test advances the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<Inner>,
}

/// Cancels its task on drop unless detached.
pub struct Pending {
    cancelled: Rc<Cell<bool>>,
    armed: bool,
}

impl Drop for Pending {
    fn drop(&mut self) {
        if self.armed {
            self.cancelled.set(true);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Pending = Pending;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Pending {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.inner.seq.get();
        self.inner.seq.set(seq + 1);
        self.inner.tasks.borrow_mut().push(Task {
            due: self.inner.now.get() + u64::from(delay_ms),
            seq,
            cancelled: Rc::clone(&cancelled),
            run: task,
        });
        Pending {
            cancelled,
            armed: true,
        }
    }

    fn detach(&self, mut pending: Pending) {
        pending.armed = false;
    }
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.inner.now.get()
    }

    pub fn pending(&self) -> usize {
        self.inner
            .tasks
            .borrow()
            .iter()
            .filter(|task| !task.cancelled.get())
            .count()
    }

    /// Moves the clock forward, running due tasks in (due, scheduling) order.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.inner.tasks.borrow_mut();
                tasks.retain(|task| !task.cancelled.get());
                let index = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.seq))
                    .map(|(index, _)| index);
                index.map(|index| tasks.remove(index))
            };
            let Some(task) = next else {
                break;
            };
            self.inner.now.set(task.due);
            (task.run)();
        }
        self.inner.now.set(target);
    }
}
