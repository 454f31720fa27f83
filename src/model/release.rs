//! Release-date milestones.

use chrono::NaiveDate;

/// Release-date-relative event eligible for at most one announcement per release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Milestone {
    ReleasingToday,
    ReleasingSoon,
}

impl Milestone {
    /// Stable identifier stored in the `milestone` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReleasingToday => "releasing-today",
            Self::ReleasingSoon => "releasing-soon",
        }
    }
}

/// Direction of a release date change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateChange {
    Delayed,
    MovedForward,
}

impl DateChange {
    /// Classifies a change from `old` to `new`; `None` when the date did not move.
    pub fn between(old: NaiveDate, new: NaiveDate) -> Option<Self> {
        match new.cmp(&old) {
            std::cmp::Ordering::Greater => Some(Self::Delayed),
            std::cmp::Ordering::Less => Some(Self::MovedForward),
            std::cmp::Ordering::Equal => None,
        }
    }
}
