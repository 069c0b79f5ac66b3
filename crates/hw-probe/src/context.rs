use std::{future::Future, time::Duration};

use tokio::time::{Instant, sleep_until};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::error::ProbeError;

/// Cancellation scope of one scrape.
///
/// Canceled when the parent token is canceled (server shutdown) or when
/// [`ProbeContext::cancel`] is called, and expires at a fixed deadline.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    token: CancellationToken,
    deadline: Instant,
}

impl ProbeContext {
    pub fn new(parent: &CancellationToken, timeout: Duration) -> Self {
        Self {
            token: parent.child_token(),
            deadline: Instant::now() + timeout,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Guard that cancels this context when dropped, e.g. together with the
    /// request future when the scraper disconnects.
    pub fn cancel_on_drop(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    /// Drive `fut` until it completes, the context is canceled, or the
    /// deadline passes, whichever happens first.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ProbeError>
    where
        F: Future<Output = Result<T, ProbeError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ProbeError::Canceled),
            _ = sleep_until(self.deadline) => Err(ProbeError::DeadlineExceeded),
            res = fut => res,
        }
    }
}
