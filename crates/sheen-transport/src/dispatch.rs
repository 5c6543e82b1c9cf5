//! Running request futures for completion-style callers
//!
//! Futures go to the ambient tokio runtime when there is one, otherwise to a
//! small process-wide runtime created on first use.

use crate::error::{NetworkError, NetworkResult};
use once_cell::sync::OnceCell;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::{AbortHandle, JoinHandle};

const DISPATCH_THREADS: usize = 2;
const DISPATCH_THREAD_NAME: &str = "sheen-dispatch";

static DISPATCH_RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn dispatch_runtime() -> NetworkResult<&'static Runtime> {
    DISPATCH_RUNTIME.get_or_try_init(|| {
        tracing::debug!("starting dispatch runtime");
        Builder::new_multi_thread()
            .worker_threads(DISPATCH_THREADS)
            .thread_name(DISPATCH_THREAD_NAME)
            .enable_all()
            .build()
            .map_err(|e| NetworkError::Config(format!("Failed to create dispatch runtime: {}", e)))
    })
}

/// Spawn `future` on the ambient runtime, or the dispatch runtime outside one
pub fn spawn<F>(future: F) -> NetworkResult<JoinHandle<F::Output>>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => Ok(handle.spawn(future)),
        Err(_) => Ok(dispatch_runtime()?.spawn(future)),
    }
}

const PENDING: u8 = 0;
const COMPLETED: u8 = 1;
const CANCELLED: u8 = 2;

/// Shared completion state: exactly one of "complete" or "cancel" wins
#[derive(Debug, Clone, Default)]
pub(crate) struct CompletionGate {
    state: Arc<AtomicU8>,
}

impl CompletionGate {
    /// Claim the right to fire the completion
    pub(crate) fn try_complete(&self) -> bool {
        self.state
            .compare_exchange(PENDING, COMPLETED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn try_cancel(&self) -> bool {
        self.state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn state(&self) -> u8 {
        self.state.load(Ordering::Acquire)
    }
}

/// Spawn `future` and hand its result to `completion`, unless cancelled first
///
/// The request runs in its own task so a panic inside it still completes
/// with [`NetworkError::Cancelled`].
pub fn dispatch<F, T, C>(future: F, completion: C) -> NetworkResult<RequestHandle>
where
    F: Future<Output = NetworkResult<T>> + Send + 'static,
    T: Send + 'static,
    C: FnOnce(NetworkResult<T>) + Send + 'static,
{
    let gate = CompletionGate::default();
    let task_gate = gate.clone();
    let request = spawn(future)?;
    let request_abort = request.abort_handle();
    let task = spawn(async move {
        let result = match request.await {
            Ok(result) => result,
            Err(e) => {
                if e.is_panic() {
                    tracing::warn!("request task panicked");
                }
                Err(NetworkError::Cancelled)
            }
        };
        if task_gate.try_complete() {
            completion(result);
        }
    })?;

    Ok(RequestHandle {
        task,
        request: request_abort,
        gate,
    })
}

/// Handle to a dispatched request
#[derive(Debug)]
pub struct RequestHandle {
    task: JoinHandle<()>,
    request: AbortHandle,
    gate: CompletionGate,
}

impl RequestHandle {
    /// Cancel the request
    ///
    /// Returns `true` when the completion had not fired yet; it never will.
    /// Returns `false` when the completion already fired (or is firing).
    pub fn cancel(&self) -> bool {
        let cancelled = self.gate.try_cancel();
        if cancelled {
            self.request.abort();
            self.task.abort();
        }
        cancelled
    }

    pub fn is_cancelled(&self) -> bool {
        self.gate.state() == CANCELLED
    }

    /// Whether the completion has fired
    pub fn is_completed(&self) -> bool {
        self.gate.state() == COMPLETED
    }

    /// Whether the underlying task has stopped running
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
