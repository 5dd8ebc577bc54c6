use std::{any::Any, cell::RefCell, rc::Rc, time::Duration};

/// Cancels the scheduled task when dropped.
pub struct TimerHandle {
    _guard: Box<dyn Any>,
}

impl TimerHandle {
    pub fn new(guard: impl Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Browser timers via `setTimeout`; dropping the `Timeout` clears it.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimerHandle::new(gloo_timers::callback::Timeout::new(millis, task))
    }
}

/// Server-side rendering has no event loop, so scheduled work is discarded.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct InertScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for InertScheduler {
    fn schedule(&self, _delay: Duration, _task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::new(())
    }
}

pub fn default_scheduler() -> Rc<dyn Scheduler> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(GlooScheduler)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(InertScheduler)
    }
}

/// Keeps at most one pending task. Scheduling replaces (and so cancels) the
/// previous one; dropping the debouncer cancels whatever is left.
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
    pending: RefCell<Option<TimerHandle>>,
}

impl Debouncer {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: RefCell::new(None),
        }
    }

    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.schedule(self.delay, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        if self.pending.borrow_mut().take().is_some() {
            log::debug!("cleanup: pending validity check cancelled");
        }
    }
}
