use crate::domain::card::Card;
use crate::domain::ledger::{BetSet, Tokens};
use crate::error::{GameError, Result};

/// How repeat landings on the same bet card are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// Every ball that lands on a bet card counts, repeats included.
    #[default]
    PerBall,
    /// Each bet card counts at most once, however many balls land on it.
    DistinctBets,
}

/// Multipliers per match count. 0 matches always pays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutTable {
    one: u64,
    two: u64,
    three: u64,
}

impl PayoutTable {
    /// The 2x / 3x / 5x table.
    pub const CLASSIC: Self = Self {
        one: 2,
        two: 3,
        three: 5,
    };

    /// Builds a table, rejecting one that pays less for more matches.
    pub fn new(one: u64, two: u64, three: u64) -> Result<Self> {
        if one <= two && two <= three {
            Ok(Self { one, two, three })
        } else {
            Err(GameError::Validation(
                "payout multipliers must be non-decreasing".to_string(),
            ))
        }
    }

    pub fn multiplier(&self, matches: usize) -> u64 {
        match matches {
            0 => 0,
            1 => self.one,
            2 => self.two,
            _ => self.three,
        }
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Counts landing cards that hit the bet set under the given rule.
pub fn count_matches(bets: &BetSet, landings: &[Card], rule: MatchRule) -> usize {
    match rule {
        MatchRule::PerBall => landings.iter().filter(|c| bets.contains(**c)).count(),
        MatchRule::DistinctBets => bets.iter().filter(|b| landings.contains(b)).count(),
    }
}

/// Tokens won for one resolved round: `multiplier(matches) * stake_per_card`.
///
/// Saturates at the token range; the table refuses a launch whose
/// worst-case payout could not be credited, so an in-engine round never
/// reaches the saturation point.
pub fn payout(
    bets: &BetSet,
    landings: &[Card],
    stake_per_card: Tokens,
    table: &PayoutTable,
    rule: MatchRule,
) -> Tokens {
    let matches = count_matches(bets, landings, rule);
    Tokens::new(table.multiplier(matches).saturating_mul(stake_per_card.value()))
}
