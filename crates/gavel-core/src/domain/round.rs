//! Round records kept for the end-of-session report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trade::TradeOutcome;

/// One completed round: both bids, how it settled, and when.
///
/// Records live in memory for the lifetime of the session; nothing is
/// persisted across process runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session.
    pub round: u32,
    pub own_bid: i64,
    pub other_bid: i64,
    pub outcome: TradeOutcome,
    pub at: DateTime<Utc>,
}

impl RoundRecord {
    pub fn new(round: u32, own_bid: i64, other_bid: i64, outcome: TradeOutcome) -> Self {
        Self {
            round,
            own_bid,
            other_bid,
            outcome,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_record_roundtrips_through_json() {
        let record = RoundRecord::new(3, 10, 4, TradeOutcome::classify(10, 4));
        let s = serde_json::to_string(&record).unwrap();
        let back: RoundRecord = serde_json::from_str(&s).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.outcome, TradeOutcome::Win(10));
    }
}
