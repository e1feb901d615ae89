use crate::domain::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A non-negative token balance.
///
/// Wrapper around `u64` so amounts and balances cannot be confused with
/// counts or indices elsewhere in the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tokens(pub u64);

impl Tokens {
    pub const ZERO: Self = Self(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Scales a per-card amount to a whole-bet amount; `None` when the
    /// product leaves the token range.
    pub fn checked_times(&self, count: usize) -> Option<Self> {
        self.0.checked_mul(count as u64).map(Self)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Tokens {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Tokens {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Tokens {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Tokens {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Most bets a single round accepts.
pub const MAX_BETS: usize = 3;

/// What a toggle did to the bet set, so the caller can render feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetToggle {
    Placed(Card),
    Removed(Card),
    /// The set already holds `MAX_BETS` cards; nothing changed.
    TableFull,
}

/// The player's selected cards for the current round.
///
/// Holds at most `MAX_BETS` cards. Insertion order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetSet {
    cards: Vec<Card>,
}

impl BetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the card if absent and there is room, removes it if present.
    pub fn toggle(&mut self, card: Card) -> BetToggle {
        if let Some(pos) = self.cards.iter().position(|c| *c == card) {
            self.cards.remove(pos);
            BetToggle::Removed(card)
        } else if self.cards.len() < MAX_BETS {
            self.cards.push(card);
            BetToggle::Placed(card)
        } else {
            BetToggle::TableFull
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
