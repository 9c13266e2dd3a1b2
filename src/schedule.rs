//! Deferred callbacks and the trailing debounce built on them.

use std::cell::Cell;
use std::rc::Rc;

/// Something that can run a task after a delay.
///
/// Dropping a `Pending` handle cancels its task; `detach` lets it run regardless.
pub trait Scheduler {
    type Pending;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending;

    fn detach(&self, pending: Self::Pending);

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let pending = self.schedule(delay_ms, task);
        self.detach(pending);
    }
}

/// Runs the settle task once events have stopped for `delay_ms`.
pub struct TrailingDebounce<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Pending>,
    settled: Rc<Cell<bool>>,
}

impl<S: Scheduler> TrailingDebounce<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
            settled: Rc::new(Cell::new(false)),
        }
    }

    /// Replaces any pending settle task with `on_settle`.
    pub fn trigger(&mut self, on_settle: impl FnOnce() + 'static) {
        let settled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&settled);
        let task = Box::new(move || {
            flag.set(true);
            on_settle();
        });
        // assigning drops, and so cancels, the previous timer
        self.pending = Some(self.scheduler.schedule(self.delay_ms, task));
        self.settled = settled;
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// True while a settle task is waiting to run.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some() && !self.settled.get()
    }
}
