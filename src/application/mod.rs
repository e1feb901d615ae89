//! Application layer orchestrating one player's session: commands in,
//! resolved rounds and registry updates out.

pub mod engine;
