//! End-of-session report.

use serde::{Deserialize, Serialize};

use crate::agent::BiddingAgent;
use crate::domain::{RoundRecord, SessionId, TradeOutcome};

/// Serializable view of where a session ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_split: usize,
    pub rounds_lost: usize,
    pub units_acquired: i64,
    pub money_remaining: i64,
}

impl SessionSummary {
    pub(crate) fn of(
        session_id: SessionId,
        rounds: &[RoundRecord],
        agent: &BiddingAgent,
    ) -> Self {
        let mut rounds_won = 0;
        let mut rounds_split = 0;
        let mut rounds_lost = 0;
        for record in rounds {
            match record.outcome {
                TradeOutcome::Win(_) => rounds_won += 1,
                TradeOutcome::Partial(_) => rounds_split += 1,
                TradeOutcome::Loss(_) => rounds_lost += 1,
            }
        }
        Self {
            session_id,
            rounds_played: rounds.len(),
            rounds_won,
            rounds_split,
            rounds_lost,
            units_acquired: agent.units_acquired(),
            money_remaining: agent.money_remaining(),
        }
    }
}
