//! Domain layer: the cards, the bet ledger, the payout rules and the round
//! state machine, plus the ports the application layer talks through.

pub mod card;
pub mod command;
pub mod ledger;
pub mod payout;
pub mod player;
pub mod ports;
pub mod table;
