//! Sort direction, column sort types, and the per-table sort state record.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Declared comparison strategy for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Case-insensitive text comparison. The default for untyped columns.
    #[default]
    Text,
    /// Values parse as floating point; anything unparseable sorts as zero.
    Number,
    /// Lexical comparison of date strings (ISO 8601 expected). No date
    /// parsing is performed.
    Date,
}

impl SortType {
    /// Parses the markup-style column tag. Unrecognized tags fall back to
    /// [`SortType::Text`], mirroring an absent attribute.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => Self::Number,
            "date" => Self::Date,
            _ => Self::Text,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    ///
    /// Descending is a sign flip of the ascending comparator, not a reverse
    /// pass over the sorted rows: ties keep their ascending relative order in
    /// both directions.
    pub fn applied(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

/// Which column currently drives a table's row order, and in which direction.
///
/// This is the explicit record behind the header indicators: the UI renders
/// glyphs from this state, never the other way round. At most one column is
/// active per table; tables never share state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(usize, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active column and its direction, if any. `None` means rows are in
    /// insertion order.
    pub fn active(&self) -> Option<(usize, SortDirection)> {
        self.active
    }

    /// Direction of the given column if it is the active one.
    pub fn direction_of(&self, column: usize) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }

    /// Runs the header-click transition and returns the new direction.
    ///
    /// Clicking the active ascending column switches it to descending;
    /// clicking anything else (an inactive column, or the active descending
    /// one) activates that column ascending. Activating a column always
    /// deactivates the previous one.
    pub fn click(&mut self, column: usize) -> SortDirection {
        let direction = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.active = Some((column, direction));
        direction
    }

    /// Back to insertion-order semantics. Does not move any rows.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
