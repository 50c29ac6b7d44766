/// Lifecycle of one outstanding scan.
#[derive(Debug, Clone, PartialEq)]
pub enum PollState {
    Polling { attempts: u64 },
    Resolved { attempts: u64 },
    Rejected { attempts: u64 },
}

/// What a single detection attempt produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttemptOutcome {
    Found,
    Empty,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PollAction {
    /// Wait for the next frame and try again.
    Reschedule,
    Resolve,
    Reject(RejectReason),
    /// Attempt reported after the scan already settled.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    Failed,
    Aborted,
}

impl PollState {
    pub fn new() -> Self {
        PollState::Polling { attempts: 0 }
    }

    /// `abort_requested` is only consulted after an empty attempt.
    pub fn transition(
        &self,
        outcome: AttemptOutcome,
        abort_requested: bool,
    ) -> (PollState, PollAction) {
        match self {
            PollState::Polling { attempts } => {
                let attempts = attempts + 1;
                match outcome {
                    AttemptOutcome::Found => {
                        (PollState::Resolved { attempts }, PollAction::Resolve)
                    }
                    AttemptOutcome::Failed => (
                        PollState::Rejected { attempts },
                        PollAction::Reject(RejectReason::Failed),
                    ),
                    AttemptOutcome::Empty if abort_requested => (
                        PollState::Rejected { attempts },
                        PollAction::Reject(RejectReason::Aborted),
                    ),
                    AttemptOutcome::Empty => {
                        (PollState::Polling { attempts }, PollAction::Reschedule)
                    }
                }
            }
            settled => (settled.clone(), PollAction::Ignore),
        }
    }

    pub fn attempts(&self) -> u64 {
        match self {
            PollState::Polling { attempts }
            | PollState::Resolved { attempts }
            | PollState::Rejected { attempts } => *attempts,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, PollState::Polling { .. })
    }
}

impl Default for PollState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PollMachine {
    state: PollState,
}

impl PollMachine {
    pub fn new() -> Self {
        Self {
            state: PollState::new(),
        }
    }

    pub fn record(&mut self, outcome: AttemptOutcome, abort_requested: bool) -> PollAction {
        let (new_state, action) = self.state.transition(outcome, abort_requested);
        self.state = new_state;

        action
    }

    pub fn current_state(&self) -> &PollState {
        &self.state
    }

    pub fn attempt_count(&self) -> u64 {
        self.state.attempts()
    }
}

impl Default for PollMachine {
    fn default() -> Self {
        Self::new()
    }
}
