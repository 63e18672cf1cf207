//! Auction domain model (ids, trade outcomes, round records).

pub mod ids;
pub mod round;
pub mod trade;

pub use ids::SessionId;
pub use round::RoundRecord;
pub use trade::TradeOutcome;
