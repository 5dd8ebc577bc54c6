use crate::utils::timer::{Scheduler, TimerHandle};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

struct Entry {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry>,
}

struct CancelOnDrop(Rc<Cell<bool>>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// Virtual-time scheduler: tasks only run when the test calls `advance`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::new(self.clone())
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.clock
            .borrow()
            .entries
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    /// Moves the clock forward, running due tasks in deadline order. Tasks run
    /// outside the clock borrow so they may schedule more work.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.entries.retain(|entry| !entry.cancelled.get());
                let index = clock
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.seq))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => {
                        let entry = clock.entries.remove(index);
                        clock.now = entry.due;
                        Some(entry)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(entry) => {
                    entry.cancelled.set(true);
                    (entry.task)();
                }
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.entries.push(Entry {
            due,
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        TimerHandle::new(CancelOnDrop(cancelled))
    }
}
