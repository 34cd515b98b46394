//! Tap/hold decision for dual-role keys.
//!
//! The decision only depends on how long the key has been held when it's released,
//! or when another key event arrives, compared with the tapping threshold.
//! Measuring the time is up to the caller, which passes [`Instant`]s in.

use embassy_time::{Duration, Instant};

use crate::config::TapHoldConfig;
use crate::types::action::{Action, KeyAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapHoldDecision {
    /// Released (or interrupted) before the threshold
    Tap,
    /// Held for at least the threshold
    Hold,
}

/// `held_for < threshold` is a tap, anything else is a hold.
pub fn decide(held_for: Duration, threshold: Duration) -> TapHoldDecision {
    if held_for >= threshold {
        TapHoldDecision::Hold
    } else {
        TapHoldDecision::Tap
    }
}

/// Pick the action a key resolves to after being held for `held_for`.
///
/// Only `TapHold` depends on the duration, `Single` always yields its action.
pub fn resolve_dual_role(key_action: KeyAction, held_for: Duration, threshold: Duration) -> Action {
    match key_action {
        KeyAction::TapHold(tap, hold) => match decide(held_for, threshold) {
            TapHoldDecision::Tap => tap,
            TapHoldDecision::Hold => hold,
        },
        KeyAction::Single(action) => action,
        KeyAction::No | KeyAction::Transparent => Action::No,
    }
}

/// A dual-role key that is pressed, waiting for the decision.
#[derive(Debug, Clone, Copy)]
pub struct HoldingKey {
    pub row: u8,
    pub col: u8,
    pub action: KeyAction,
    pressed_at: Instant,
}

impl HoldingKey {
    pub fn new(row: u8, col: u8, action: KeyAction, pressed_at: Instant) -> Self {
        Self {
            row,
            col,
            action,
            pressed_at,
        }
    }

    pub fn press_time(&self) -> Instant {
        self.pressed_at
    }

    pub fn held_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.pressed_at)
    }

    /// The host polls this to trigger the hold action as soon as the threshold passes,
    /// without waiting for the release.
    pub fn is_timed_out(&self, now: Instant, config: &TapHoldConfig) -> bool {
        decide(self.held_for(now), config.hold_timeout) == TapHoldDecision::Hold
    }

    /// The key is released at `at`
    pub fn on_release(&self, at: Instant, config: &TapHoldConfig) -> Action {
        let action = resolve_dual_role(self.action, self.held_for(at), config.hold_timeout);
        debug!("Tap/hold key ({}, {}) released, resolved to {:?}", self.row, self.col, action);
        action
    }

    /// Another key event arrives at `at` while this key is still held
    pub fn on_other_key_press(&self, at: Instant, config: &TapHoldConfig) -> Action {
        let action = resolve_dual_role(self.action, self.held_for(at), config.hold_timeout);
        debug!(
            "Tap/hold key ({}, {}) interrupted by another key, resolved to {:?}",
            self.row, self.col, action
        );
        action
    }
}
