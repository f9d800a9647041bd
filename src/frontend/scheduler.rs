//! A single worker which runs deferred tasks in order.
//!
//! Each task carries an instant before which it does not run.
//! The worker takes tasks in the order they were deferred, waits until the task may run, and runs it to completion before taking the next.
//! So, no two tasks run at the same time, and a task deferred with a short delay after a task with a long delay still waits on the first.
//!
//! A task which fails, or panics, is logged and the worker moves on to the next.
//!
//! There is no cancellation.
//! [finish](Scheduler::finish) stops accepting tasks, and returns once every task already deferred has run.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::atomic::{AtomicUsize, Ordering},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crossbeam::channel::{self, unbounded, Receiver, Sender};

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// Stack size of the worker thread.
pub const WORKER_STACK_SIZE: usize = 128 * 1024 * 1024;

/// A deferred body, whose failure is logged by the worker.
pub type Job = Box<dyn FnOnce() -> Result<(), err::ErrorKind> + Send>;

struct Task {
    id: usize,
    not_before: Instant,
    job: Job,
}

pub struct Scheduler {
    sender: Option<Sender<Task>>,
    worker: Option<JoinHandle<()>>,
    counter: AtomicUsize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler::new()
    }
}

impl Scheduler {
    /// A scheduler with a fresh worker.
    ///
    /// If the worker cannot be spawned this is logged, and every task is refused.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<Task>();
        let spawned = thread::Builder::new()
            .name("proplog-worker".to_string())
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || work(receiver));

        match spawned {
            Ok(worker) => Scheduler {
                sender: Some(sender),
                worker: Some(worker),
                counter: AtomicUsize::new(0),
            },

            Err(e) => {
                log::error!(target: targets::SCHEDULER, "Failed to spawn the worker: {e}");
                Scheduler {
                    sender: None,
                    worker: None,
                    counter: AtomicUsize::new(0),
                }
            }
        }
    }

    /// Hands `job` to the worker, to be run no sooner than `delay` from now.
    ///
    /// Returns the id of the task.
    pub fn defer(
        &self,
        delay: Duration,
        job: impl FnOnce() -> Result<(), err::ErrorKind> + Send + 'static,
    ) -> Result<usize, err::SchedulerError> {
        let Some(sender) = &self.sender else {
            return Err(err::SchedulerError::Disconnected);
        };

        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let task = Task {
            id,
            not_before: Instant::now() + delay,
            job: Box::new(job),
        };

        match sender.send(task) {
            Ok(()) => {
                log::trace!(target: targets::SCHEDULER, "Deferred task {id} by {delay:?}");
                Ok(id)
            }
            Err(_) => Err(err::SchedulerError::Disconnected),
        }
    }

    /// Stops accepting tasks, and waits for the worker to run those already deferred.
    pub fn finish(&mut self) {
        drop(self.sender.take());

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!(target: targets::SCHEDULER, "The worker panicked");
            }
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.finish();
    }
}

fn work(receiver: Receiver<Task>) {
    while let Ok(task) = receiver.recv() {
        if Instant::now() < task.not_before {
            // A timer channel delivers once, at the instant.
            let _ = channel::at(task.not_before).recv();
        }

        log::trace!(target: targets::SCHEDULER, "Running task {}", task.id);
        match panic::catch_unwind(AssertUnwindSafe(task.job)) {
            Ok(Ok(())) => {}

            Ok(Err(e)) => {
                log::error!(target: targets::SCHEDULER, "Task {} failed: {e:?}", task.id);
            }

            Err(payload) => {
                log::error!(target: targets::SCHEDULER, "Task {} panicked: {}", task.id, panic_message(&*payload));
            }
        }
    }

    log::trace!(target: targets::SCHEDULER, "Worker finished");
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
