//! Cancellation checks: deciding a follow-up from an event's final veto state.
//!
//! A controller that reacts to submit, reset, or a decoy swap registers a
//! [`PendingCheck`] naming what to do if the event went through and what to
//! do if it was vetoed. Checks hold a generational [`ControllerKey`], never
//! the controller itself, so a check that outlives its controller resolves
//! to nothing.

use crate::controller::ControllerKey;
use crate::event::Event;
use dom::Id;
use serde::Deserialize;
use std::time::Duration;

/// Delay of the timer fallback. Long enough for every synchronous handler of
/// the triggering event to have had its chance to veto.
pub const DEFAULT_DEFERRED_DELAY: Duration = Duration::from_millis(200);

/// How a controller learns whether an event was vetoed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum CancellationCheck {
    /// Run the check right after dispatch, once every listener and the
    /// default action have run.
    #[default]
    AfterDispatch,
    /// Run the check on the page's timer queue after `delay_ms`.
    ///
    /// This is an approximation: it assumes every veto lands within the
    /// window.
    Deferred { delay_ms: u64 },
}

impl CancellationCheck {
    pub fn deferred() -> Self {
        Self::Deferred {
            delay_ms: DEFAULT_DEFERRED_DELAY.as_millis() as u64,
        }
    }

    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::AfterDispatch => None,
            Self::Deferred { delay_ms } => Some(Duration::from_millis(delay_ms)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FollowUp {
    Nothing,
    /// Re-run the controller's reset.
    Reset,
    /// Move focus off the decoy if it still holds it.
    BlurDecoy(Id),
    /// Return focus to the real field after its decoy was removed.
    FocusField(Id),
}

#[derive(Clone, Debug)]
pub(crate) struct PendingCheck {
    pub(crate) event: Event,
    pub(crate) controller: ControllerKey,
    pub(crate) proceed: FollowUp,
    pub(crate) cancelled: FollowUp,
}

impl PendingCheck {
    /// The follow-up matching the event's veto state at this moment.
    pub(crate) fn outcome(&self) -> FollowUp {
        if self.event.is_default_prevented() {
            self.cancelled
        } else {
            self.proceed
        }
    }
}
