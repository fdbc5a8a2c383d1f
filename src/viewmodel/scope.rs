//! Background execution context owned by a single view-model.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Notify};

type Job = (&'static str, Pin<Box<dyn Future<Output = ()> + Send + 'static>>);

/// Runs a view-model's background work and tears it down with the owner.
///
/// Launched tasks execute one after another, in launch order, on the
/// ambient Tokio runtime. A task that panics is logged and swallowed; the
/// scope stays usable. Work still queued or in flight when the scope is
/// cancelled is dropped without publishing.
pub struct ViewModelScope {
    label: &'static str,
    signal: CancelSignal,
    jobs: mpsc::UnboundedSender<Job>,
}

impl ViewModelScope {
    /// Create a scope and start its worker. Must be called from within a
    /// Tokio runtime. `label` tags every log line from the scope.
    pub fn new(label: &'static str) -> Self {
        let signal = CancelSignal::default();
        let (jobs, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_jobs(label, signal.clone(), queue));
        Self {
            label,
            signal,
            jobs,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.is_cancelled()
    }

    /// Cancel queued and running tasks. Idempotent.
    pub fn cancel(&self) {
        if self.signal.cancel() {
            tracing::debug!(scope = self.label, "View-model scope cancelled");
        }
    }

    /// Queue `work` on this scope.
    pub fn launch<F>(&self, task: &'static str, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.is_cancelled() {
            tracing::trace!(scope = self.label, task, "Scope already cancelled, task dropped");
            return;
        }
        if self.jobs.send((task, Box::pin(work))).is_err() {
            tracing::trace!(scope = self.label, task, "Scope worker gone, task dropped");
        }
    }
}

impl Drop for ViewModelScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_jobs(
    label: &'static str,
    signal: CancelSignal,
    mut queue: mpsc::UnboundedReceiver<Job>,
) {
    loop {
        let next = tokio::select! {
            biased;
            _ = signal.wait() => break,
            next = queue.recv() => next,
        };
        let Some((task, work)) = next else {
            break;
        };

        // Each task gets its own runtime task so a panic stays contained.
        let mut running = tokio::spawn(work);
        let abort = running.abort_handle();
        tokio::select! {
            biased;
            _ = signal.wait() => {
                abort.abort();
                tracing::trace!(scope = label, task, "Task discarded on scope teardown");
                break;
            }
            result = &mut running => match result {
                Ok(()) => {}
                Err(err) if err.is_panic() => {
                    tracing::error!(scope = label, task, error = %err, "View-model task panicked");
                }
                Err(err) => {
                    tracing::trace!(scope = label, task, error = %err, "View-model task aborted");
                }
            },
        }
    }
    tracing::trace!(scope = label, "Scope worker stopped");
}

#[derive(Clone, Default)]
struct CancelSignal {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelSignal {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns true for the call that actually flipped the flag.
    fn cancel(&self) -> bool {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    async fn wait(&self) {
        // Register interest before reading the flag, or a cancel landing in
        // between would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
