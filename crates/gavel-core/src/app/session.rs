//! Interactive session: the round-by-round console loop.

use tracing::{info, warn};

use crate::agent::BiddingAgent;
use crate::domain::{RoundRecord, SessionId};
use crate::error::SessionError;
use crate::ports::Console;

use super::summary::SessionSummary;

/// Drives one auction session over a [`Console`].
///
/// Each iteration shows the agent's bid and waits for the opposing bid. A
/// bid is only placed when none is pending, so rejected input re-displays
/// the same price instead of re-running the engine.
pub struct AuctionSession<C> {
    id: SessionId,
    agent: BiddingAgent,
    console: C,
    rounds: Vec<RoundRecord>,
}

impl<C: Console> AuctionSession<C> {
    pub fn new(agent: BiddingAgent, console: C) -> Self {
        let id = SessionId::generate();
        info!(session = %id, "session opened");
        Self {
            id,
            agent,
            console,
            rounds: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Run rounds until the operator quits or input ends, then report.
    ///
    /// - `quit` (any case) or end of input closes the session.
    /// - An integer is taken as the opposing bid and settles the round.
    /// - Anything else is rejected without touching the agent; the pending
    ///   bid is shown again on the next prompt.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut pending: Option<i64> = None;

        loop {
            let bid = match pending {
                Some(bid) => bid,
                None => {
                    let bid = self.agent.place_bid()?;
                    pending = Some(bid);
                    bid
                }
            };

            self.console
                .write(&format!("my bid : {bid} MU, input 'quit' or your bid : "))?;

            let Some(line) = self.console.read_line()? else {
                break;
            };
            let input = line.trim();

            if input.eq_ignore_ascii_case("quit") {
                break;
            }

            match input.parse::<i64>() {
                Ok(other_bid) => {
                    let outcome = self.agent.observe_trade(bid, other_bid);
                    let round = self.rounds.len() as u32 + 1;
                    self.rounds
                        .push(RoundRecord::new(round, bid, other_bid, outcome));
                    pending = None;
                }
                Err(err) => {
                    warn!(session = %self.id, input, %err, "opposing bid was not a number");
                }
            }
        }

        info!(session = %self.id, rounds = self.rounds.len(), "session closed");
        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::of(self.id, &self.rounds, &self.agent)
    }
}
