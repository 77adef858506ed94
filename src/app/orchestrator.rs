//! Bounded fan-out over a shared worker budget.
//!
//! The orchestrator bounds the number of concurrently executing task
//! *bodies* across every level of a nested fan-out. A body is the span in
//! which a unit of work holds a worker permit, which is exactly the span of
//! one [`Orchestrator::run`] call. Joins never hold a permit: a parent that
//! fans out suspends on its children without occupying a worker slot, so a
//! deep tree cannot starve a small budget.
//!
//! ```text
//!  build_report ── run(list_sports) ── fan_out(sports)
//!                                         ├─ build_sport ── fan_out(leagues)
//!                                         │                   ├─ build_league ── run(list_events) ── fan_out(events)
//!                                         │                   │                                      ├─ run(event_detail)
//!                                         │                   │                                      └─ run(event_detail)
//!                                         │                   └─ ...
//!                                         └─ ...
//! ```
//!
//! Failure is fail-fast: the first failing unit cancels its scope, pending
//! and running bodies of that scope observe the signal and stop with
//! [`Error::Cancelled`], and the failing join aborts its remaining tasks. A
//! join always reports a root-cause error over a `Cancelled` one. Scopes
//! ([`Orchestrator::scope`]) share one worker budget, so a failed build
//! leaves the budget usable for the next one until it is released.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Semaphore, SemaphorePermit};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default worker budget.
pub const DEFAULT_WORKERS: usize = 3;

/// How fan-out units are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Units are spawned onto the runtime and joined by index.
    #[default]
    Concurrent,
    /// Units run one after another on the caller's task with a budget of one.
    Sequential,
}

impl ExecutionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concurrent => "concurrent",
            Self::Sequential => "sequential",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worker budget shared by every scope of one session.
#[derive(Debug)]
struct Budget {
    semaphore: Semaphore,
    workers: usize,
    mode: ExecutionMode,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    released: watch::Sender<bool>,
    closed: AtomicBool,
}

#[derive(Debug)]
pub struct Orchestrator {
    budget: Arc<Budget>,
    cancel: watch::Sender<bool>,
}

impl Orchestrator {
    /// Create an orchestrator. Sequential mode always runs with a budget of one.
    ///
    /// # Panics
    ///
    /// Panics if `budget` is 0.
    #[must_use]
    pub fn new(mode: ExecutionMode, budget: usize) -> Self {
        assert!(budget > 0, "worker budget must be > 0");
        let workers = match mode {
            ExecutionMode::Concurrent => budget,
            ExecutionMode::Sequential => 1,
        };
        let (released, _) = watch::channel(false);

        Self::with_budget(Arc::new(Budget {
            semaphore: Semaphore::new(workers),
            workers,
            mode,
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            released,
            closed: AtomicBool::new(false),
        }))
    }

    fn with_budget(budget: Arc<Budget>) -> Self {
        let (cancel, _) = watch::channel(false);
        Self { budget, cancel }
    }

    #[must_use]
    pub fn concurrent(budget: usize) -> Self {
        Self::new(ExecutionMode::Concurrent, budget)
    }

    #[must_use]
    pub fn sequential() -> Self {
        Self::new(ExecutionMode::Sequential, 1)
    }

    /// A fresh cancellation scope over the same worker budget.
    ///
    /// A failure inside the scope cancels only that scope's units; releasing
    /// the budget with [`close`](Self::close) still stops every scope.
    #[must_use]
    pub fn scope(&self) -> Self {
        Self::with_budget(Arc::clone(&self.budget))
    }

    /// Run one unit of work while holding a worker permit.
    ///
    /// Waits for a free permit, then drives `work` to completion. Both the
    /// wait and the work race the cancellation signal.
    pub async fn run<F, T>(&self, work: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _permit = self.acquire().await?;

        tokio::select! {
            biased;
            () = self.cancelled() => Err(Error::Cancelled),
            result = work => result,
        }
    }

    /// Run `task` once per item and return the results in input order.
    ///
    /// Returns once every unit has completed, or with the first failure.
    pub async fn fan_out<I, R, F, Fut>(&self, items: Vec<I>, task: F) -> Result<Vec<R>>
    where
        I: Send + 'static,
        R: Send + 'static,
        F: Fn(I) -> Fut + Send,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        self.ensure_open()?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        match self.budget.mode {
            ExecutionMode::Sequential => self.join_sequential(items, task).await,
            ExecutionMode::Concurrent => self.join_concurrent(items, task).await,
        }
    }

    async fn join_sequential<I, R, F, Fut>(&self, items: Vec<I>, task: F) -> Result<Vec<R>>
    where
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let mut results = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match AssertUnwindSafe(task(item)).catch_unwind().await {
                Ok(Ok(value)) => results.push(value),
                Ok(Err(err)) => return Err(self.fail(index, err)),
                Err(payload) => {
                    return Err(self.fail(index, Error::TaskPanicked(panic_message(&*payload))))
                }
            }
        }
        Ok(results)
    }

    async fn join_concurrent<I, R, F, Fut>(&self, items: Vec<I>, task: F) -> Result<Vec<R>>
    where
        I: Send + 'static,
        R: Send + 'static,
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        let total = items.len();
        let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(total).collect();
        let mut units = JoinSet::new();

        for (index, item) in items.into_iter().enumerate() {
            let unit = task(item);
            units.spawn(async move { (index, unit.await) });
        }
        debug!(units = total, "Fan-out submitted");

        let mut saw_cancel = false;
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok((index, Ok(value))) => slots[index] = Some(value),
                Ok((_, Err(Error::Cancelled))) => saw_cancel = true,
                // Dropping `units` on return aborts the remaining siblings.
                Ok((index, Err(err))) => return Err(self.fail(index, err)),
                Err(join_err) if join_err.is_panic() => {
                    let payload = join_err.into_panic();
                    return Err(self.fail(total, Error::TaskPanicked(panic_message(&*payload))));
                }
                Err(_) => saw_cancel = true,
            }
        }

        if saw_cancel {
            return Err(Error::Cancelled);
        }
        slots
            .into_iter()
            .collect::<Option<Vec<R>>>()
            .ok_or(Error::Cancelled)
    }

    fn fail(&self, index: usize, err: Error) -> Error {
        if !err.is_cancelled() {
            warn!(index, error = %err, "Fan-out unit failed, cancelling scope");
        }
        self.cancel();
        err
    }

    async fn acquire(&self) -> Result<WorkerPermit<'_>> {
        self.ensure_open()?;

        let permit = tokio::select! {
            biased;
            () = self.cancelled() => return Err(Error::Cancelled),
            permit = self.budget.semaphore.acquire() => permit.map_err(|_| Error::SessionClosed)?,
        };

        let current = self.budget.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.budget.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        Ok(WorkerPermit {
            _permit: permit,
            in_flight: &self.budget.in_flight,
        })
    }

    /// Resolves once this scope is cancelled or the budget is released.
    async fn cancelled(&self) {
        tokio::select! {
            () = raised(self.cancel.subscribe()) => {}
            () = raised(self.budget.released.subscribe()) => {}
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::SessionClosed);
        }
        Ok(())
    }

    /// Signal every pending and running unit of this scope to stop.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    /// Release the worker budget for every scope sharing it. Returns `false`
    /// if already released.
    pub fn close(&self) -> bool {
        if self.budget.closed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.budget.semaphore.close();
        self.budget.released.send_replace(true);
        true
    }

    /// Whether this scope was cancelled or the budget released.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow() || *self.budget.released.borrow()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.budget.closed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget.workers
    }

    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        self.budget.mode
    }

    /// Units currently holding a worker permit, across all scopes.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.budget.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of units that held a permit at the same time.
    #[must_use]
    pub fn peak_in_flight(&self) -> usize {
        self.budget.peak_in_flight.load(Ordering::SeqCst)
    }
}

/// Worker permit with in-flight bookkeeping; released on drop.
struct WorkerPermit<'a> {
    _permit: SemaphorePermit<'a>,
    in_flight: &'a AtomicUsize,
}

impl Drop for WorkerPermit<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Resolves once the flag is raised or its sender is gone.
async fn raised(mut rx: watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
