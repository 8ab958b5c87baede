use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Age-based retention selector.
///
/// Persisted as its integer index; unknown indices resolve to `Never`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ErasureTarget {
    #[default]
    Never,
    Day,
    Week,
    Month,
    Year,
}

impl ErasureTarget {
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => ErasureTarget::Day,
            2 => ErasureTarget::Week,
            3 => ErasureTarget::Month,
            4 => ErasureTarget::Year,
            _ => ErasureTarget::Never,
        }
    }

    pub fn index(self) -> i64 {
        match self {
            ErasureTarget::Never => 0,
            ErasureTarget::Day => 1,
            ErasureTarget::Week => 2,
            ErasureTarget::Month => 3,
            ErasureTarget::Year => 4,
        }
    }

    pub fn is_never(self) -> bool {
        self == ErasureTarget::Never
    }

    /// Cutoff in epoch milliseconds: everything added strictly before it has
    /// expired. `Never` yields `i64::MIN`, which matches nothing.
    pub fn cutoff_ms(self, now_ms: i64) -> i64 {
        let Some(now) = DateTime::<Utc>::from_timestamp_millis(now_ms) else {
            return i64::MIN;
        };

        let cutoff = match self {
            ErasureTarget::Never => None,
            ErasureTarget::Day => now.checked_sub_signed(Duration::days(1)),
            ErasureTarget::Week => now.checked_sub_signed(Duration::weeks(1)),
            ErasureTarget::Month => now.checked_sub_months(Months::new(1)),
            ErasureTarget::Year => now.checked_sub_months(Months::new(12)),
        };

        cutoff.map_or(i64::MIN, |c| c.timestamp_millis())
    }
}

impl From<i64> for ErasureTarget {
    fn from(index: i64) -> Self {
        ErasureTarget::from_index(index)
    }
}

impl From<ErasureTarget> for i64 {
    fn from(target: ErasureTarget) -> Self {
        target.index()
    }
}
