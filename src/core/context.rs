use crate::utils::error::{PickemError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;

/// Per-call cancellation and deadline for a fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchContext {
    timeout: Option<Duration>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels every context cloned from the one it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        // send_replace never fails, even with no receivers left
        self.sender.send_replace(true);
    }
}

impl FetchContext {
    /// No deadline, never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn cancellable() -> (CancelHandle, Self) {
        let (sender, receiver) = watch::channel(false);
        (
            CancelHandle { sender },
            Self {
                timeout: None,
                cancel: Some(receiver),
            },
        )
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keeps an existing deadline when `timeout` is `None`.
    pub fn with_optional_timeout(self, timeout: Option<Duration>) -> Self {
        match timeout {
            Some(timeout) => self.with_timeout(timeout),
            None => self,
        }
    }

    /// Bounded by what is left of an outer deadline once `headroom` is set
    /// aside, and never longer than `limit`. `None` when nothing is left.
    pub fn within_deadline(
        remaining: Duration,
        headroom: Duration,
        limit: Option<Duration>,
    ) -> Option<Self> {
        let budget = remaining.checked_sub(headroom).filter(|b| !b.is_zero())?;
        let timeout = limit.map_or(budget, |limit| limit.min(budget));
        Some(Self::background().with_timeout(timeout))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|receiver| *receiver.borrow())
            .unwrap_or(false)
    }

    /// Drives `operation` until it finishes, the deadline passes or the
    /// context is cancelled, whichever comes first.
    pub async fn run<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_cancelled() {
            return Err(PickemError::Cancelled);
        }

        let bounded = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, operation)
                    .await
                    .map_err(|_| PickemError::TimedOut(limit))?,
                None => operation.await,
            }
        };

        match self.cancel.clone() {
            Some(mut receiver) => {
                tokio::select! {
                    result = bounded => result,
                    _ = wait_for_cancel(&mut receiver) => Err(PickemError::Cancelled),
                }
            }
            None => bounded.await,
        }
    }
}

async fn wait_for_cancel(receiver: &mut watch::Receiver<bool>) {
    loop {
        if *receiver.borrow_and_update() {
            return;
        }
        if receiver.changed().await.is_err() {
            // handle dropped without cancelling
            std::future::pending::<()>().await;
        }
    }
}
