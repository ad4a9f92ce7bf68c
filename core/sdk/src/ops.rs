//! Tracked async operations.
//!
//! [`TrackedOperation`] couples a spawned task with a watchable status, so
//! callers can observe the lifecycle without holding the result future. The
//! two resolution branches of [`TrackedOperation::wait`] (`Ok`/`Err`) are
//! the success and error outcomes of the operation. Overlapping operations
//! are allowed; each owns its own status. There is no cancellation:
//! dropping a `TrackedOperation` detaches the task.

use crate::error::{Result, SdkError};
use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Lifecycle of a tracked operation. Settled states are terminal: a status
/// moves `InFlight -> Succeeded | Failed` and never backwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OperationStatus {
    /// Declared but not spawned
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl OperationStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, OperationStatus::Succeeded | OperationStatus::Failed)
    }
}

/// A spawned operation with an observable status
pub struct TrackedOperation<T> {
    status_rx: watch::Receiver<OperationStatus>,
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> TrackedOperation<T> {
    /// Spawns the future on the current tokio runtime. The status is
    /// `InFlight` from the moment this returns.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (status_tx, status_rx) = watch::channel(OperationStatus::InFlight);
        let handle = tokio::spawn(async move {
            let out = future.await;
            let settled = if out.is_ok() {
                OperationStatus::Succeeded
            } else {
                OperationStatus::Failed
            };
            // All receivers may be gone when the caller only wait()s
            let _ = status_tx.send(settled);
            out
        });
        Self { status_rx, handle }
    }

    /// Snapshot of the current status
    pub fn status(&self) -> OperationStatus {
        *self.status_rx.borrow()
    }

    /// A watch receiver for callers that want to await settlement without
    /// consuming the operation, e.g.
    /// `rx.wait_for(|s| s.is_settled()).await`.
    pub fn subscribe(&self) -> watch::Receiver<OperationStatus> {
        self.status_rx.clone()
    }

    /// Waits for the operation to settle and returns its outcome.
    pub async fn wait(self) -> Result<T> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(SdkError::Other(anyhow::anyhow!(
                "operation task failed: {e}"
            ))),
        }
    }
}
