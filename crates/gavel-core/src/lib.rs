//! gavel-core
//!
//! Core building blocks for gavel, a bidding bot for a repeated two-party
//! sealed-bid auction.
//!
//! # モジュール構成
//! - **fuzzy**: generic Mamdani inference (terms, variables, rules, centroid)
//! - **domain**: auction domain model (trade outcomes, round records, ids)
//! - **agent**: the bidding agent and its six-rule controller
//! - **ports**: abstraction layer (Console)
//! - **app**: application logic (interactive session, end-of-session summary)

pub mod agent;
pub mod app;
pub mod domain;
pub mod error;
pub mod fuzzy;
pub mod ports;

pub use agent::BiddingAgent;
pub use error::{AgentError, FuzzyError, SessionError};
