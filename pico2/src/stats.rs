//! Transition statistics for the periodic log summary.
//!
//! Counts accepted edges and polls, keeps the most recent edges in an
//! [`EdgeLog`], and tells the main loop when the next summary is due.

use bounce_common::{Edge, EdgeLog};

use crate::config::{EDGE_LOG_SIZE, STATS_REPORT_PERIOD_MS};

/// Running edge counters plus a short edge history.
pub struct TransitionStats {
    /// Accepted false → true transitions.
    pub rises: u32,
    /// Accepted true → false transitions.
    pub falls: u32,
    /// Polls since the last summary.
    pub polls_since_report: u32,
    /// Recent edges (oldest first).
    pub recent: EdgeLog<EDGE_LOG_SIZE>,
    last_report_ms: u32,
}

impl TransitionStats {
    pub const fn new(now_ms: u32) -> Self {
        Self {
            rises: 0,
            falls: 0,
            polls_since_report: 0,
            recent: EdgeLog::new(),
            last_report_ms: now_ms,
        }
    }

    /// Account for one poll and the edge it produced, if any.
    pub fn record_poll(
        &mut self,
        edge: Option<Edge>,
        at_ms: u32,
    ) {
        self.polls_since_report = self.polls_since_report.saturating_add(1);
        let Some(edge) = edge else {
            return;
        };

        match edge {
            Edge::Rising => self.rises = self.rises.saturating_add(1),
            Edge::Falling => self.falls = self.falls.saturating_add(1),
        }
        self.recent.record(edge, at_ms);
    }

    /// Total accepted edges.
    #[inline]
    pub const fn total_edges(&self) -> u32 { self.rises.saturating_add(self.falls) }

    /// Returns true once per `STATS_REPORT_PERIOD_MS` and restarts the period.
    pub fn report_due(
        &mut self,
        now_ms: u32,
    ) -> bool {
        if now_ms.wrapping_sub(self.last_report_ms) < STATS_REPORT_PERIOD_MS {
            return false;
        }
        self.last_report_ms = now_ms;
        true
    }

    /// Reset the per-period poll counter after a summary was logged.
    pub fn finish_report(&mut self) { self.polls_since_report = 0; }
}
