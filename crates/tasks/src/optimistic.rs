//! Explicit state for optimistic mutations.
//!
//! UI callers apply a change locally, fire the request, and then either
//! commit or roll back. Instead of ad hoc prev-state capture, the
//! mutation is a small state machine: `Pending -> Committed` on success,
//! `Pending -> RolledBack` on failure, with both terminal.

use xtrawrkx_core::CoreError;

/// Lifecycle of one optimistic mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    /// Applied locally, request in flight.
    Pending,
    /// The backend accepted the change.
    Committed,
    /// The request failed; the previous value is authoritative again.
    RolledBack,
}

/// An optimistic change to one entity, holding both snapshots.
#[derive(Debug, Clone)]
pub struct OptimisticUpdate<T> {
    prev: T,
    next: T,
    state: MutationState,
}

impl<T> OptimisticUpdate<T> {
    /// Begin a pending mutation from `prev` to `next`.
    pub fn begin(prev: T, next: T) -> Self {
        Self {
            prev,
            next,
            state: MutationState::Pending,
        }
    }

    pub fn state(&self) -> MutationState {
        self.state
    }

    /// The value a view should display right now: the optimistic `next`
    /// unless the mutation was rolled back.
    pub fn current(&self) -> &T {
        match self.state {
            MutationState::RolledBack => &self.prev,
            _ => &self.next,
        }
    }

    /// Mark the backend write as accepted. Only valid while pending.
    pub fn commit(&mut self) -> Result<(), CoreError> {
        self.transition(MutationState::Committed)
    }

    /// Revert to the previous value. Only valid while pending.
    pub fn roll_back(&mut self) -> Result<(), CoreError> {
        self.transition(MutationState::RolledBack)
    }

    /// Consume the mutation, yielding the value that ended up
    /// authoritative.
    pub fn into_value(self) -> T {
        match self.state {
            MutationState::RolledBack => self.prev,
            _ => self.next,
        }
    }

    fn transition(&mut self, to: MutationState) -> Result<(), CoreError> {
        if self.state != MutationState::Pending {
            return Err(CoreError::Conflict(format!(
                "mutation already settled as {:?}",
                self.state
            )));
        }
        self.state = to;
        Ok(())
    }
}
