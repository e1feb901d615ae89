use crate::domain::ledger::Tokens;
use crate::domain::table::RoundResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registry entry for one player, keyed by name.
///
/// This is what the leaderboard is built from; the core table never reads
/// it back during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub tokens: Tokens,
    pub rounds_played: u64,
    pub total_wagered: Tokens,
    pub total_won: Tokens,
    pub last_seen: DateTime<Utc>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Tokens::ZERO,
            rounds_played: 0,
            total_wagered: Tokens::ZERO,
            total_won: Tokens::ZERO,
            last_seen: Utc::now(),
        }
    }

    /// Folds one resolved round into the running totals. The lifetime
    /// sums saturate rather than wrap on extreme stakes.
    pub fn record_round(&mut self, result: &RoundResult, balance_after: Tokens) {
        self.rounds_played += 1;
        self.total_wagered = self.total_wagered.saturating_add(result.wagered);
        self.total_won = self.total_won.saturating_add(result.payout);
        self.tokens = balance_after;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}
