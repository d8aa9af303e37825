use super::CompletableResult;
use crate::error::Failure;

use std::pin::Pin;
use std::task::{Context, Poll};

impl<T, E> Future for CompletableResult<T, E>
where
    T: Clone,
    E: Clone,
{
    /// The value, or the failure that ended the task.
    type Output = Result<T, Failure<E>>;

    /// Polls the result.
    ///
    /// If the task has already finished, its outcome is returned
    /// immediately. Otherwise, the current waker is registered and
    /// the future returns `Poll::Pending`.
    ///
    /// The waker is registered **before** re-checking the state
    /// to avoid missed wake-ups.
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.outcome() {
            return Poll::Ready(outcome.map(T::clone).map_err(Failure::clone));
        }

        self.register_waker(cx.waker());

        if let Some(outcome) = self.outcome() {
            return Poll::Ready(outcome.map(T::clone).map_err(Failure::clone));
        }

        Poll::Pending
    }
}
