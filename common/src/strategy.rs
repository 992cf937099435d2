//! Debounce algorithm selection.

/// Algorithm used by [`DebounceFilter::poll`](crate::DebounceFilter::poll).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceStrategy {
    /// Accept a change immediately, then ignore the input for the interval.
    ///
    /// Guarantees a hard minimum spacing between accepted transitions. Toggles
    /// inside the window are discarded, not queued.
    Lockout,
    /// Accept a change only after the raw reading held for the full interval.
    #[default]
    StabilityTimeout,
}

impl DebounceStrategy {
    /// Short label for logs and plots.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lockout => "lockout",
            Self::StabilityTimeout => "stable",
        }
    }

    /// Timestamp seeded into the timer at attach time.
    ///
    /// Lockout measures its first window from clock zero, so a filter attached
    /// more than one interval after boot accepts its first change at once.
    /// Stability-timeout starts from the attach time.
    #[inline]
    pub(crate) const fn attach_timestamp(
        self,
        now_ms: u32,
    ) -> u32 {
        match self {
            Self::Lockout => 0,
            Self::StabilityTimeout => now_ms,
        }
    }
}
