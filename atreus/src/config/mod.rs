use embassy_time::Duration;

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_hold: TapHoldConfig,
}

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// A dual-role key pressed at least this long is a hold
    pub hold_timeout: Duration,
}

impl TapHoldConfig {
    pub const fn new(hold_timeout_ms: u64) -> Self {
        Self {
            hold_timeout: Duration::from_millis(hold_timeout_ms),
        }
    }
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self::new(crate::layout::TAPPING_TERM_MS)
    }
}
