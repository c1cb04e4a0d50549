use crate::outcome::Outcome;
use derive_getters::Getters;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Lets a single form go through once per page lifetime.
/// There is no way back to `Idle`: only a reload, which recreates the form, resets it.
#[derive(Debug, Default, Getters)]
pub struct SubmissionGuard {
    state: SubmissionState,
    suppressed: u32,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress a submit event before any other listener sees it.
    /// Leaves an `Idle` guard untouched: the decision to submit is taken by [`Self::on_submit`].
    pub fn intercept(&mut self) -> Outcome {
        match self.state {
            SubmissionState::Submitting => self.suppress(),
            SubmissionState::Idle => Outcome::Proceed,
        }
    }

    /// Handle a submit event.
    ///
    /// `already_cancelled` is `true` when an earlier listener prevented the submission:
    /// the form has not been sent, so the guard stays `Idle` and leaves the event alone.
    pub fn on_submit(&mut self, already_cancelled: bool) -> Outcome {
        match self.state {
            SubmissionState::Submitting => self.suppress(),
            SubmissionState::Idle if already_cancelled => Outcome::Proceed,
            SubmissionState::Idle => {
                self.state = SubmissionState::Submitting;
                Outcome::Proceed
            }
        }
    }

    fn suppress(&mut self) -> Outcome {
        self.suppressed = self.suppressed.saturating_add(1);
        Outcome::Cancel
    }
}
