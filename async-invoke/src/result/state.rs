/// The task is still executing.
///
/// This is the only initial state; no outcome has been recorded.
pub(crate) const RUNNING: usize = 0;

/// The task returned a value.
///
/// Terminal. The stored value is immutable from now on.
pub(crate) const COMPLETED: usize = 1;

/// The task failed.
///
/// Terminal. The stored failure is immutable from now on.
pub(crate) const FAILED: usize = 2;

/// Lifecycle state of a [`CompletableResult`](super::CompletableResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The task has not produced an outcome yet.
    Running,
    /// The task produced a value.
    Completed,
    /// The task failed.
    Failed,
}

impl State {
    /// Decodes a raw state. Only the three constants above are ever stored.
    pub(crate) fn from_raw(raw: usize) -> Self {
        match raw {
            RUNNING => State::Running,
            COMPLETED => State::Completed,
            FAILED => State::Failed,
            _ => unreachable!("invalid result state {raw}"),
        }
    }

    /// Whether the state is `Completed` or `Failed`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, State::Running)
    }
}
