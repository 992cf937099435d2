//! Debounced transitions and a fixed-capacity history of them.
//!
//! [`EdgeLog`] is a ring buffer: once full, recording a new edge drops the
//! oldest one. It lets firmware report recent activity without allocating.
//!
//! # Usage
//!
//! ```ignore
//! let mut log: EdgeLog<8> = EdgeLog::new();
//! if filter.poll() {
//!     if let Some(edge) = filter.edge() {
//!         log.record(edge, filter.last_transition_ms());
//!     }
//! }
//! ```

use heapless::Deque;

/// Direction of an accepted transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Debounced value went false → true.
    Rising,
    /// Debounced value went true → false.
    Falling,
}

impl Edge {
    /// Edge that ends in the given debounced value.
    #[inline]
    pub const fn from_level(level: bool) -> Self { if level { Self::Rising } else { Self::Falling } }

    /// Debounced value after this edge.
    #[inline]
    pub const fn level(self) -> bool { matches!(self, Self::Rising) }

    /// Single-character marker for compact logs.
    pub const fn symbol(self) -> char {
        match self {
            Self::Rising => '/',
            Self::Falling => '\\',
        }
    }
}

/// One accepted transition with its timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeRecord {
    /// Transition direction.
    pub edge: Edge,
    /// Clock value when the transition was accepted.
    pub timestamp_ms: u32,
}

/// Ring buffer of the last `N` accepted transitions.
pub struct EdgeLog<const N: usize> {
    buffer: Deque<EdgeRecord, N>,
}

impl<const N: usize> EdgeLog<N> {
    /// Create an empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Record an edge. If the log is full, the oldest record is dropped.
    pub fn record(
        &mut self,
        edge: Edge,
        timestamp_ms: u32,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(EdgeRecord { edge, timestamp_ms }).ok();
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> { self.buffer.iter() }

    /// Most recent record.
    #[inline]
    pub fn last(&self) -> Option<&EdgeRecord> { self.buffer.back() }

    /// Shortest gap between consecutive records, if there are at least two.
    pub fn min_spacing_ms(&self) -> Option<u32> {
        self.buffer
            .iter()
            .zip(self.buffer.iter().skip(1))
            .map(|(a, b)| b.timestamp_ms.wrapping_sub(a.timestamp_ms))
            .min()
    }

    /// Number of records held.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if no edge has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Forget all records.
    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl<const N: usize> Default for EdgeLog<N> {
    fn default() -> Self { Self::new() }
}
