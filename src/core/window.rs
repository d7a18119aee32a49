use serde::{Deserialize, Serialize};

use crate::types::SaleTimestamp;

/// Open date interval `(start, end)` where either side may be unbounded.
///
/// Bounds keep whatever offset they were given; comparisons are by instant,
/// so a bound in one offset filters sales recorded in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateWindow {
    /// Exclusive lower bound; `None` means no lower bound.
    pub start: Option<SaleTimestamp>,
    /// Exclusive upper bound; `None` means no upper bound.
    pub end: Option<SaleTimestamp>,
}

impl DateWindow {
    /// Builds a window from optional bounds.
    pub const fn new(start: Option<SaleTimestamp>, end: Option<SaleTimestamp>) -> Self {
        Self { start, end }
    }

    /// Window with neither bound set.
    pub const fn unbounded() -> Self {
        Self { start: None, end: None }
    }

    /// `(start, end)` when both are set and `start` is after `end`.
    ///
    /// A missing bound never makes a window inverted.
    pub fn inverted_bounds(&self) -> Option<(SaleTimestamp, SaleTimestamp)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Some((start, end)),
            _ => None,
        }
    }

    /// True when [`DateWindow::inverted_bounds`] reports a pair.
    pub fn is_inverted(&self) -> bool {
        self.inverted_bounds().is_some()
    }

    /// Strict containment on both sides.
    pub fn contains(&self, ts: SaleTimestamp) -> bool {
        self.start.is_none_or(|start| ts > start) && self.end.is_none_or(|end| ts < end)
    }
}
