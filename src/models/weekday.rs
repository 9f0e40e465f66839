//! Weekday model.
//!
//! The allocation cycle is a fixed working week. The order of the days is
//! part of the output contract: timetables are always produced and
//! serialized Monday first, Friday last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A working day of the allocation cycle.
///
/// Variant order defines `Ord`, so ordered collections keyed by `Weekday`
/// iterate Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All days of the cycle, in contract order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Full English name, as used in serialized documents.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
