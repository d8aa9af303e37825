//! Error types surfaced by result handles and executors.
//!
//! Three distinct situations are reported:
//! - reading a result that is not ready yet ([`AsyncError::NotReady`]),
//! - reading a result whose task failed ([`AsyncError::TaskFailed`]),
//! - a blocking wait cut short by an interrupt ([`Interrupted`]).

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// The captured cause of a failed task.
///
/// The original error returned by the task is kept unmodified in
/// [`Failure::Error`], so callers can inspect it exactly as produced.
#[derive(Debug, Clone, Error)]
pub enum Failure<E> {
    /// The task returned `Err(e)`.
    #[error("{0}")]
    Error(E),

    /// The task panicked. Holds the panic message when it was a string.
    #[error("task panicked: {0}")]
    Panicked(String),

    /// The worker thread could not be spawned, so the task never ran.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(Arc<io::Error>),
}

impl<E> Failure<E> {
    /// Returns the task's own error, if the failure came from `Err(e)`.
    pub fn as_error(&self) -> Option<&E> {
        match self {
            Failure::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Consumes the failure and returns the task's own error, if any.
    pub fn into_error(self) -> Option<E> {
        match self {
            Failure::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the task panicked instead of returning.
    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panicked(_))
    }
}

/// A blocking wait was interrupted before the result completed.
///
/// The result handle is left untouched; the wait may simply be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wait interrupted before the task completed")]
pub struct Interrupted;

/// Errors returned when reading a result.
#[derive(Debug, Clone, Error)]
pub enum AsyncError<E> {
    /// The task is still running.
    #[error("execution not completed yet")]
    NotReady,

    /// The task failed; the cause is preserved.
    #[error("execution failed: {0}")]
    TaskFailed(Failure<E>),

    /// The calling thread was interrupted while waiting.
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

impl<E> AsyncError<E> {
    /// Returns the failure cause when the task itself failed.
    pub fn failure(&self) -> Option<&Failure<E>> {
        match self {
            AsyncError::TaskFailed(failure) => Some(failure),
            _ => None,
        }
    }
}
