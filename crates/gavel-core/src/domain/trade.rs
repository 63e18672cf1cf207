//! Trade outcome model: how one auction round settles.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one round, classified from the two sealed bids.
///
/// The payload is the clearing price the round settled at: the own bid on a
/// win or a tie, the opposing bid on a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "clearing_price", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeOutcome {
    /// Own bid was strictly higher: two units, cleared at the own price.
    Win(i64),

    /// Bids tied: one unit each, cleared at the shared price.
    Partial(i64),

    /// Own bid was strictly lower: no units, cleared at the opposing price.
    Loss(i64),
}

impl TradeOutcome {
    pub fn classify(own_bid: i64, other_bid: i64) -> Self {
        match own_bid.cmp(&other_bid) {
            Ordering::Greater => Self::Win(own_bid),
            Ordering::Equal => Self::Partial(own_bid),
            Ordering::Less => Self::Loss(other_bid),
        }
    }

    /// Units acquired this round.
    pub fn quantity(&self) -> i64 {
        match self {
            Self::Win(_) => 2,
            Self::Partial(_) => 1,
            Self::Loss(_) => 0,
        }
    }

    /// Price the round settled at, fed back into the next bid's divergence.
    pub fn clearing_price(&self) -> i64 {
        match self {
            Self::Win(price) | Self::Partial(price) | Self::Loss(price) => *price,
        }
    }
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win(_) => write!(f, "WIN"),
            Self::Partial(_) => write!(f, "PARTIAL"),
            Self::Loss(_) => write!(f, "LOSS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::win(7, 3, TradeOutcome::Win(7), 2)]
    #[case::tie(5, 5, TradeOutcome::Partial(5), 1)]
    #[case::loss(3, 7, TradeOutcome::Loss(7), 0)]
    #[case::negative_bids(-1, -2, TradeOutcome::Win(-1), 2)]
    #[case::zero_tie(0, 0, TradeOutcome::Partial(0), 1)]
    fn classification(
        #[case] own: i64,
        #[case] other: i64,
        #[case] expected: TradeOutcome,
        #[case] quantity: i64,
    ) {
        let outcome = TradeOutcome::classify(own, other);
        assert_eq!(outcome, expected);
        assert_eq!(outcome.quantity(), quantity);
    }

    #[test]
    fn serializes_with_tagged_kind_names() {
        let v = serde_json::to_value(TradeOutcome::Win(7)).unwrap();
        assert_eq!(v["kind"], "WIN");
        assert_eq!(v["clearing_price"], 7);

        let back: TradeOutcome = serde_json::from_value(v).unwrap();
        assert_eq!(back, TradeOutcome::Win(7));
    }

    #[test]
    fn displays_as_the_kind_name() {
        assert_eq!(TradeOutcome::Partial(5).to_string(), "PARTIAL");
    }
}
