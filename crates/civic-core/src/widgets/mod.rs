//! Widgets
//!
//! Interactive cards and controls that sit on top of the domain items:
//! voting, team membership, microcredit investment and SMS code entry.

pub mod invest;
pub mod sms;
pub mod team;
pub mod voting;

pub use invest::{payment_summary, InvestPanel, PaymentSummary};
pub use sms::{CodeEntry, SmsState, SmsValidator};
pub use team::TeamCard;
pub use voting::{toggle_vote, VoteButton, VotingWidget};
